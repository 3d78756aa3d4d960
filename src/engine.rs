//! The inference engine: three preference-ordered phases, each seeding the
//! work queue from the announcement and then draining it to a fixed point.

use std::collections::HashMap;

use log::{debug, trace};

use crate::announcement::Announcement;
use crate::error::InferenceError;
use crate::graph::{AsGraph, Asn};
use crate::relationship::PathPref;
use crate::state::{AnnouncementState, AsPath};
use crate::work_queue::WorkQueue;

/// Default early-stop threshold. `infer_paths` keeps running until
/// `best_paths(stop_at_asn).len() > stop_at_count` — strictly greater, not
/// greater-or-equal, matching the original implementation's behavior; see
/// DESIGN.md for why this crate preserves it rather than "fixing" it.
pub const DEFAULT_STOP_AT_COUNT: usize = 2;

/// Observer hooks fired during inference, the idiomatic-Rust rendition of
/// spec.md's `set_callback(kind, fn)` surface keyed by a three-variant
/// enum. All methods default to doing nothing; implement only the ones you
/// need. Grounded in the teacher's own `PolicyExtension` trait
/// (`src/simulation_engine/policy/mod.rs`), which uses the same
/// default-method-on-a-trait shape for an analogous set of hooks.
pub trait InferenceObserver {
    /// Fired once at the start of each of the three relationship phases.
    fn start_relationship_phase(&mut self, _pref: PathPref) {}

    /// Fired once per (source, neighbor) pair considered during a phase's
    /// seeding step, including pairs later dropped for having a longer
    /// suffix than some sibling at the same neighbor.
    fn neighbor_announce(&mut self, _source: Asn, _neighbor: Asn, _pref: PathPref, _suffix: &[Asn]) {}

    /// Fired once per edge popped off the work queue during a phase's
    /// drain step, before it is processed.
    fn visit_edge(&mut self, _exporter: Asn, _importer: Asn, _pref: PathPref) {}
}

struct NoopObserver;
impl InferenceObserver for NoopObserver {}

/// Options accepted by [`infer_paths`]. Build with [`InferOptions::default`]
/// and set only the fields a given call needs.
#[derive(Default)]
pub struct InferOptions<'a> {
    /// If set, inference returns as soon as this AS has accumulated more
    /// than `stop_at_count` tied-for-best paths, even if other ASes have
    /// not yet reached a fixed point.
    pub stop_at_asn: Option<Asn>,
    /// Defaults to [`DEFAULT_STOP_AT_COUNT`] when `stop_at_asn` is set.
    pub stop_at_count: Option<usize>,
    /// Seed the run from an existing [`AnnouncementState`] instead of an
    /// empty one — useful for layering a second announcement's effects on
    /// top of a first.
    pub initial_state: Option<AnnouncementState>,
    pub observer: Option<&'a mut dyn InferenceObserver>,
    /// Pop edges in random order within a depth instead of the default
    /// stack order. Exists so tests can confirm the final result does not
    /// depend on tie-break order (spec.md §8 property 6); no production
    /// caller should need this.
    pub randomize_tie_order: bool,
}

/// Run Gao-Rexford path inference for `announcement` over `graph`.
///
/// Validates the announcement, then processes the three relationship
/// phases (CUSTOMER, PEER, PROVIDER) in order: each phase seeds the work
/// queue from the sources' direct exports at that preference, then drains
/// the queue to a fixed point before the next phase begins. See spec.md §4
/// for the full algorithm and the rationale behind the phase ordering.
pub fn infer_paths(
    graph: &AsGraph,
    announcement: &Announcement,
    mut options: InferOptions,
) -> Result<AnnouncementState, InferenceError> {
    announcement.validate(graph)?;

    let mut state = options.initial_state.take().unwrap_or_default();
    let mut queue = WorkQueue::new();
    let stop_at_count = options.stop_at_count.unwrap_or(DEFAULT_STOP_AT_COUNT);
    let mut noop = NoopObserver;
    let observer: &mut dyn InferenceObserver = options.observer.take().unwrap_or(&mut noop);

    for pref in [PathPref::Customer, PathPref::Peer, PathPref::Provider] {
        observer.start_relationship_phase(pref);
        debug!("starting relationship phase {:?}", pref);

        seed_phase(graph, announcement, pref, &mut state, &mut queue, observer);

        loop {
            let popped = if options.randomize_tie_order {
                queue.pop_randomized(pref)
            } else {
                queue.pop(pref)
            };
            let (exporter, importer) = match popped {
                Some(edge) => edge,
                None => break,
            };

            if let Some(target) = options.stop_at_asn {
                if state.best_paths(target).len() > stop_at_count {
                    return Ok(state);
                }
            }

            trace!("visiting edge {exporter} -> {importer} ({pref:?})");
            observer.visit_edge(exporter, importer, pref);

            if announcement.is_source(importer) {
                continue;
            }

            if update_paths(graph, &mut state, &queue, exporter, importer, None) {
                queue.add_work(graph, &state, importer);
            }
        }
    }

    Ok(state)
}

/// Seed one phase's work queue directly from the announcement: for every
/// (source, neighbor) pair whose edge carries preference `pref`, group by
/// neighbor and keep only the shortest suffix(es) at each neighbor — a
/// longer suffix to the same neighbor could never tie for best, so it is
/// never installed (but is still reported to the observer, matching the
/// original implementation's behavior of announcing every considered
/// source before filtering).
fn seed_phase(
    graph: &AsGraph,
    announcement: &Announcement,
    pref: PathPref,
    state: &mut AnnouncementState,
    queue: &mut WorkQueue,
    observer: &mut dyn InferenceObserver,
) {
    let mut by_neighbor: HashMap<Asn, HashMap<usize, Vec<Asn>>> = HashMap::new();

    for (&source, neighbor_suffix) in &announcement.source_to_neighbor_suffix {
        for (&neighbor, suffix) in neighbor_suffix {
            let rel = graph
                .relationship(source, neighbor)
                .expect("announcement.validate already confirmed this edge exists");
            if PathPref::from_relationship(rel) != pref {
                continue;
            }
            observer.neighbor_announce(source, neighbor, pref, suffix);
            by_neighbor.entry(neighbor).or_default().entry(suffix.len()).or_default().push(source);
        }
    }

    for (neighbor, mut by_len) in by_neighbor {
        let shortest = *by_len.keys().min().expect("group is populated by construction");
        for source in by_len.remove(&shortest).expect("shortest key was just observed present") {
            let suffix = announcement.source_to_neighbor_suffix[&source][&neighbor].clone();
            if update_paths(graph, state, queue, source, neighbor, Some(suffix)) {
                queue.add_work(graph, state, neighbor);
            }
        }
    }
}

/// Offer `importer` the paths held at `exporter` (or, during seeding, the
/// literal `suffix`) over the edge `exporter -> importer`. Returns `true`
/// if this is the first time `importer` was reached this phase (callers
/// must then enqueue `importer`'s own downstream edges).
///
/// Implements spec.md §4.4's policy table: strictly worse preference is
/// rejected outright; strictly better preference replaces everything
/// known so far; equal preference with a strictly longer path is rejected;
/// equal preference with an equal-length path is merged in as an
/// additional tie. Equal preference with a *shorter* path cannot occur —
/// this is a pure breadth-first search over depth, so the first path ever
/// installed at a given preference is already shortest.
fn update_paths(
    graph: &AsGraph,
    state: &mut AnnouncementState,
    queue: &WorkQueue,
    exporter: Asn,
    importer: Asn,
    suffix: Option<AsPath>,
) -> bool {
    let new_pref = PathPref::from_relationship(
        graph
            .relationship(exporter, importer)
            .expect("a queued or seeded (exporter, importer) pair always names a real edge"),
    );
    let current_pref = state.pref(importer);

    if current_pref > new_pref {
        return false;
    }

    let mut candidates: Vec<AsPath> = match suffix {
        Some(suffix) => {
            debug_assert!(!suffix.contains(&importer), "a validated announcement cannot poison its own neighbor");
            vec![std::iter::once(exporter).chain(suffix).collect()]
        }
        None => state
            .best_paths(exporter)
            .iter()
            .filter(|p| !p.contains(&importer))
            .map(|p| std::iter::once(exporter).chain(p.iter().copied()).collect())
            .collect(),
    };

    if let Some(filter) = graph.import_filter(importer) {
        candidates = filter.apply(exporter, candidates);
    }

    if candidates.is_empty() {
        return false;
    }

    debug_assert!(
        candidates.iter().all(|p| {
            let mut full = Vec::with_capacity(p.len() + 1);
            full.push(importer);
            full.extend_from_slice(p);
            crate::valley::is_valley_free(graph, &full)
        }),
        "every path installed by update_paths must be valley-free"
    );
    debug_assert!(
        candidates.iter().all(|p| !p.contains(&importer)),
        "every path installed by update_paths must be loop-free"
    );

    let new_len = candidates[0].len();
    debug_assert!(candidates.iter().all(|p| p.len() == new_len), "ties must share a uniform path length");

    if current_pref == PathPref::Unknown {
        state.install_first(importer, new_pref, candidates);
        return true;
    }

    debug_assert_eq!(current_pref, new_pref, "preference at an already-reached AS can only hold steady here");
    let current_len = state.len(importer).expect("a reached AS always has a recorded path length");
    debug_assert!(new_len >= current_len, "breadth-first order forbids discovering a shorter path later");

    if new_len == current_len {
        state.extend_ties(importer, candidates);
        debug_assert!(
            queue.check_work(graph, state, importer),
            "importer's downstream edges must already be enqueued before a tie is merged in"
        );
    }

    false
}
