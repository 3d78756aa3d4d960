//! Valley-free path validation.

use crate::graph::{AsGraph, Asn};
use crate::relationship::Relationship;

/// Whether `path` (`[a0, a1, ..., an]`, edges walked `a_i -> a_{i+1}`) is
/// valley-free: its relationship sequence is non-increasing (an "uphill"
/// run of zero or more `C2P` hops, then zero or more `P2P` hops, then a
/// "downhill" run of zero or more `P2C` hops) and contains at most one
/// `P2P` hop.
///
/// Every edge in `path` must exist in `graph`; this is an invariant of
/// paths produced by [`infer_paths`](crate::engine::infer_paths), not a
/// condition this function is meant to tolerate violations of.
pub fn is_valley_free(graph: &AsGraph, path: &[Asn]) -> bool {
    if path.len() < 2 {
        return true;
    }

    let rels: Vec<Relationship> = path
        .windows(2)
        .map(|w| {
            graph
                .relationship(w[0], w[1])
                .expect("every hop of a path produced by this crate is a real graph edge")
        })
        .collect();

    let non_increasing = rels.windows(2).all(|w| w[0] >= w[1]);
    let peer_hops = rels.iter().filter(|&&r| r == Relationship::P2P).count();
    non_increasing && peer_hops <= 1
}
