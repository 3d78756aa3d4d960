//! The preference-stratified, depth-ordered work queue driving the
//! inference engine's BFS.

use std::collections::{BTreeMap, HashMap};

use crate::graph::{AsGraph, Asn};
use crate::relationship::PathPref;
use crate::state::AnnouncementState;

/// One bucket per preference an edge can be enqueued at, each bucket a
/// `BTreeMap` from BFS depth to the edges discovered at that depth.
/// `BTreeMap` gives an O(log n) "smallest depth present" lookup in place
/// of the original's `min()` scan over a plain dict on every pop.
#[derive(Debug, Default)]
pub struct WorkQueue {
    buckets: HashMap<PathPref, BTreeMap<usize, Vec<(Asn, Asn)>>>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `exporter`'s downstream edges per the Gao-Rexford export
    /// rule: an AS exports a path to a neighbor only if the path came from
    /// a customer, or the neighbor is a provider of this AS. Exporting to
    /// a peer or provider what was learned from a peer or provider would
    /// never be accepted (or, worse, would violate valley-freedom), so
    /// those edges are never even generated.
    pub fn add_work(&mut self, graph: &AsGraph, state: &AnnouncementState, exporter: Asn) {
        let pref = state.pref(exporter);
        let depth = state
            .len(exporter)
            .expect("an AS is only ever passed to add_work after a path has been installed for it");

        for neighbor in graph.neighbors(exporter) {
            let rel = graph
                .relationship(exporter, neighbor)
                .expect("graph.neighbors only yields ASes with a real edge back to exporter");
            let downstream_pref = PathPref::from_relationship(rel);

            if pref == PathPref::Customer || downstream_pref == PathPref::Provider {
                self.buckets
                    .entry(downstream_pref)
                    .or_default()
                    .entry(depth)
                    .or_default()
                    .push((exporter, neighbor));
            }
        }
    }

    /// Mirrors the original implementation's `check_work` assertion helper:
    /// verifies that every downstream edge `add_work(graph, state, importer)`
    /// would enqueue is already present in the correct preference bucket at
    /// `importer`'s fixed depth. `update_paths` calls this as a
    /// `debug_assert!` when it merges an additional tie into an
    /// already-known AS instead of re-enqueueing it, to confirm the
    /// "enqueue invariant" from spec.md §4.4 still holds: that work was
    /// already done exactly once, when `importer` was first reached.
    pub(crate) fn check_work(&self, graph: &AsGraph, state: &AnnouncementState, importer: Asn) -> bool {
        let pref = state.pref(importer);
        let depth = match state.len(importer) {
            Some(depth) => depth,
            None => return false,
        };

        graph.neighbors(importer).all(|neighbor| {
            let rel = match graph.relationship(importer, neighbor) {
                Some(rel) => rel,
                None => return false,
            };
            let downstream_pref = PathPref::from_relationship(rel);
            if pref != PathPref::Customer && downstream_pref != PathPref::Provider {
                return true;
            }
            self.buckets
                .get(&downstream_pref)
                .and_then(|b| b.get(&depth))
                .map_or(false, |edges| edges.contains(&(importer, neighbor)))
        })
    }

    /// Pop one edge from the smallest populated depth in `pref`'s bucket.
    /// Order among edges sharing a depth is unspecified (currently LIFO) —
    /// spec.md's property 6 requires that the final `best_paths` not
    /// depend on this order, not that any particular order be used.
    pub fn pop(&mut self, pref: PathPref) -> Option<(Asn, Asn)> {
        let bucket = self.buckets.get_mut(&pref)?;
        let &depth = bucket.keys().next()?;
        let edges = bucket.get_mut(&depth)?;
        let edge = edges.pop();
        if edges.is_empty() {
            bucket.remove(&depth);
        }
        edge
    }

    /// Same as [`pop`](Self::pop), but picks uniformly at random among the
    /// edges at the smallest populated depth instead of always taking the
    /// last one pushed. Used to exercise spec.md's property that the final
    /// `best_paths` set does not depend on pop order within a depth.
    pub fn pop_randomized(&mut self, pref: PathPref) -> Option<(Asn, Asn)> {
        use rand::Rng;

        let bucket = self.buckets.get_mut(&pref)?;
        let &depth = bucket.keys().next()?;
        let edges = bucket.get_mut(&depth)?;
        let idx = rand::thread_rng().gen_range(0..edges.len());
        let edge = edges.remove(idx);
        if edges.is_empty() {
            bucket.remove(&depth);
        }
        Some(edge)
    }

    #[cfg(test)]
    pub(crate) fn depths(&self, pref: PathPref) -> Vec<usize> {
        self.buckets.get(&pref).map(|b| b.keys().copied().collect()).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn edges_at(&self, pref: PathPref, depth: usize) -> Vec<(Asn, Asn)> {
        self.buckets
            .get(&pref)
            .and_then(|b| b.get(&depth))
            .cloned()
            .unwrap_or_default()
    }
}
