//! The AS-relationship graph: an immutable (once built) map of directed,
//! relationship-tagged edges between ASes, plus optional per-AS import
//! filters.

use std::collections::HashMap;
use std::fmt;

use crate::relationship::Relationship;

/// Autonomous system number.
pub type Asn = u32;

/// A caller-supplied policy applied to the candidate paths an AS is about to
/// import over a given edge, before they are compared against anything
/// already known at that AS.
///
/// The idiomatic Rust rendition of spec.md's `(fn, data)` pair: whatever
/// state the filter needs, it simply closes over. A blanket impl below lets
/// plain closures be used directly.
pub trait ImportFilter: Send + Sync {
    /// `exporter` is the AS the candidates arrived from; `candidates` are
    /// the AS-paths about to be imported. Return the subset (or
    /// transformation) that should actually be considered.
    fn apply(&self, exporter: Asn, candidates: Vec<Vec<Asn>>) -> Vec<Vec<Asn>>;
}

impl<F> ImportFilter for F
where
    F: Fn(Asn, Vec<Vec<Asn>>) -> Vec<Vec<Asn>> + Send + Sync,
{
    fn apply(&self, exporter: Asn, candidates: Vec<Vec<Asn>>) -> Vec<Vec<Asn>> {
        self(exporter, candidates)
    }
}

#[derive(Default)]
struct AsNode {
    edges: HashMap<Asn, Relationship>,
    import_filter: Option<Box<dyn ImportFilter>>,
}

/// The AS-relationship graph. Built once via [`AsGraph::add_peering`] and
/// [`AsGraph::set_import_filter`], then treated as read-only for the
/// lifetime of any [`infer_paths`](crate::engine::infer_paths) call.
#[derive(Default)]
pub struct AsGraph {
    nodes: HashMap<Asn, AsNode>,
}

impl fmt::Debug for AsGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsGraph")
            .field("as_count", &self.nodes.len())
            .finish()
    }
}

impl AsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a peering between `a` and `b`. `rel` is `a`'s relationship to
    /// `b` (`a -> b` tagged `rel`, `b -> a` tagged `rel.reversed()`).
    ///
    /// Calling this again for the same pair overwrites the previous tag in
    /// both directions; spec.md leaves conflicting repeated calls as a
    /// caller bug, not a reported error.
    pub fn add_peering(&mut self, a: Asn, b: Asn, rel: Relationship) {
        self.nodes.entry(a).or_default().edges.insert(b, rel);
        self.nodes.entry(b).or_default().edges.insert(a, rel.reversed());
    }

    /// Install an import filter at `asn`, replacing any previous one.
    pub fn set_import_filter(&mut self, asn: Asn, filter: Box<dyn ImportFilter>) {
        self.nodes.entry(asn).or_default().import_filter = Some(filter);
    }

    pub fn contains_as(&self, asn: Asn) -> bool {
        self.nodes.contains_key(&asn)
    }

    /// Whether a directed edge `a -> b` exists (equivalently, whether `a`
    /// and `b` peer at all, since every peering is recorded both ways).
    pub fn has_edge(&self, a: Asn, b: Asn) -> bool {
        self.nodes.get(&a).map_or(false, |n| n.edges.contains_key(&b))
    }

    /// The relationship tag on the directed edge `exporter -> importer`.
    pub fn relationship(&self, exporter: Asn, importer: Asn) -> Option<Relationship> {
        self.nodes.get(&exporter)?.edges.get(&importer).copied()
    }

    /// All ASes peering with `asn`, in unspecified order.
    pub fn neighbors(&self, asn: Asn) -> impl Iterator<Item = Asn> + '_ {
        self.nodes.get(&asn).into_iter().flat_map(|n| n.edges.keys().copied())
    }

    pub(crate) fn import_filter(&self, asn: Asn) -> Option<&dyn ImportFilter> {
        self.nodes.get(&asn)?.import_filter.as_deref()
    }
}
