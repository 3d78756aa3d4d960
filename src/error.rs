//! Error types surfaced by the public API.
//!
//! Built with `thiserror`, the way `nsg-ethz-bgpsim` and `nsg-ethz-snowcap`
//! build their error enums, rather than hand-rolling `Display`/`Error` impls.

use thiserror::Error;

use crate::graph::Asn;

/// Why an [`Announcement`](crate::announcement::Announcement) was rejected
/// before inference began.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnouncementError {
    /// A source AS named in the announcement is not present in the graph.
    #[error("announcement source AS{0} is not present in the graph")]
    UnknownSource(Asn),

    /// A (source, neighbor) pair names two ASes that are not adjacent.
    #[error("AS{source} names AS{neighbor} as a neighbor, but they do not peer")]
    NonAdjacentNeighbor { source: Asn, neighbor: Asn },

    /// A neighbor's suffix already contains that same neighbor's ASN.
    #[error("the suffix announced to AS{neighbor} already contains AS{neighbor}")]
    SelfPoisonedNeighbor { neighbor: Asn },
}

/// Top-level error returned by [`crate::engine::infer_paths`].
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The announcement failed validation against the graph before any
    /// inference work began.
    #[error("invalid announcement: {0}")]
    InvalidAnnouncement(#[from] AnnouncementError),
}
