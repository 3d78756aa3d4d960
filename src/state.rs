//! Per-AS bookkeeping produced by a single inference run.

use std::collections::HashMap;

use crate::graph::Asn;
use crate::relationship::PathPref;

/// An AS-path as seen at the AS holding it: the AS itself is not included,
/// the next hop is first, the origin is last.
pub type AsPath = Vec<Asn>;

/// Tracks, for every AS an inference run has reached, the preference of
/// its current best path, that path's length, and the complete set of
/// paths tied for best at that preference and length.
///
/// `path_pref` is tracked (not just re-derived from `best_paths`) because
/// once an AS has accepted a path at a given preference, any further path
/// offered over a strictly worse edge must be rejected outright — tracking
/// the preference directly lets that rejection be an O(1) comparison
/// instead of a re-derivation from the best path's first hop every time.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AnnouncementState {
    path_pref: HashMap<Asn, PathPref>,
    path_len: HashMap<Asn, usize>,
    best_paths: HashMap<Asn, Vec<AsPath>>,
}

impl AnnouncementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `PathPref::Unknown` for any AS not yet reached, matching spec.md's
    /// default-UNKNOWN preference map.
    pub fn pref(&self, asn: Asn) -> PathPref {
        self.path_pref.get(&asn).copied().unwrap_or(PathPref::Unknown)
    }

    pub fn len(&self, asn: Asn) -> Option<usize> {
        self.path_len.get(&asn).copied()
    }

    /// The AS-paths tied for best at `asn`. Empty for any AS not yet
    /// reached (including every announcement source).
    pub fn best_paths(&self, asn: Asn) -> &[AsPath] {
        self.best_paths.get(&asn).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reached(&self, asn: Asn) -> bool {
        self.path_pref.contains_key(&asn)
    }

    pub(crate) fn install_first(&mut self, asn: Asn, pref: PathPref, paths: Vec<AsPath>) {
        let len = paths[0].len();
        self.path_len.insert(asn, len);
        self.path_pref.insert(asn, pref);
        self.best_paths.insert(asn, paths);
    }

    pub(crate) fn extend_ties(&mut self, asn: Asn, mut paths: Vec<AsPath>) {
        self.best_paths.entry(asn).or_default().append(&mut paths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_as_defaults_to_unknown_and_empty() {
        let state = AnnouncementState::new();
        assert_eq!(state.pref(1), PathPref::Unknown);
        assert_eq!(state.len(1), None);
        assert!(state.best_paths(1).is_empty());
        assert!(!state.reached(1));
    }

    #[test]
    fn install_then_extend_accumulates_ties() {
        let mut state = AnnouncementState::new();
        state.install_first(1, PathPref::Customer, vec![vec![2, 10]]);
        assert_eq!(state.pref(1), PathPref::Customer);
        assert_eq!(state.len(1), Some(2));
        state.extend_ties(1, vec![vec![3, 10]]);
        assert_eq!(state.best_paths(1), &[vec![2, 10], vec![3, 10]]);
    }
}
