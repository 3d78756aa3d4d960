//! The announcement fed to the inference engine: one or more origin ASes,
//! each exporting a (possibly already-prepended) AS-path suffix to some
//! subset of its neighbors.

use std::collections::HashMap;

use crate::error::AnnouncementError;
use crate::graph::{AsGraph, Asn};

/// An AS-path suffix handed directly to a neighbor, excluding the
/// source and the neighbor itself. Most announcements use an empty
/// suffix (the common "announce a fresh route" case); a non-empty suffix
/// models an AS that already held a path before engine construction and
/// is re-exporting it verbatim (spec.md's prepending scenarios).
pub type Suffix = Vec<Asn>;

/// `source_to_neighbor_suffix[source][neighbor]` is the suffix `source`
/// exports directly to `neighbor`. A prefix may have more than one source
/// (anycast).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Announcement {
    pub(crate) source_to_neighbor_suffix: HashMap<Asn, HashMap<Asn, Suffix>>,
}

impl Announcement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an anycast announcement: every AS in `sources` exports an
    /// empty suffix to all of its graph neighbors.
    pub fn anycast(graph: &AsGraph, sources: impl IntoIterator<Item = Asn>) -> Self {
        let mut source_to_neighbor_suffix = HashMap::new();
        for source in sources {
            let neighbors = graph.neighbors(source).map(|n| (n, Suffix::new())).collect();
            source_to_neighbor_suffix.insert(source, neighbors);
        }
        Announcement { source_to_neighbor_suffix }
    }

    /// Record that `source` exports `suffix` directly to `neighbor`.
    /// Overwrites any suffix previously set for this pair.
    pub fn set(&mut self, source: Asn, neighbor: Asn, suffix: Suffix) {
        self.source_to_neighbor_suffix.entry(source).or_default().insert(neighbor, suffix);
    }

    pub fn sources(&self) -> impl Iterator<Item = Asn> + '_ {
        self.source_to_neighbor_suffix.keys().copied()
    }

    pub fn is_source(&self, asn: Asn) -> bool {
        self.source_to_neighbor_suffix.contains_key(&asn)
    }

    /// Check the three validity conditions from spec.md §7: every source
    /// must be a known AS, every (source, neighbor) pair must name an
    /// actual edge, and no suffix may mention the neighbor it is sent to.
    pub(crate) fn validate(&self, graph: &AsGraph) -> Result<(), AnnouncementError> {
        for (&source, neighbor_suffix) in &self.source_to_neighbor_suffix {
            if !graph.contains_as(source) {
                return Err(AnnouncementError::UnknownSource(source));
            }
            for (&neighbor, suffix) in neighbor_suffix {
                if !graph.has_edge(source, neighbor) {
                    return Err(AnnouncementError::NonAdjacentNeighbor { source, neighbor });
                }
                if suffix.contains(&neighbor) {
                    return Err(AnnouncementError::SelfPoisonedNeighbor { neighbor });
                }
            }
        }
        Ok(())
    }
}
