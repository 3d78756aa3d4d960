//! spec.md §8's universal invariants, checked across several of the fixture
//! topologies rather than tied to one concrete scenario: every source is
//! exempt from getting a preference, every stored path is valley-free and
//! loop-free, and all paths tied for best at a given AS share one length.
use gaorex::{infer_paths, is_valley_free, Announcement, AsGraph, InferOptions, PathPref, Relationship};

fn multiple_choices_graph() -> AsGraph {
    let mut g = AsGraph::new();
    g.add_peering(1, 2, Relationship::P2C);
    g.add_peering(1, 3, Relationship::P2C);
    g.add_peering(1, 4, Relationship::P2C);
    g.add_peering(2, 5, Relationship::P2C);
    g.add_peering(3, 5, Relationship::P2C);
    g.add_peering(4, 5, Relationship::P2C);
    g.add_peering(2, 6, Relationship::P2P);
    g.add_peering(3, 6, Relationship::P2P);
    g.add_peering(4, 6, Relationship::P2P);
    g.add_peering(6, 7, Relationship::P2C);
    g.add_peering(5, 8, Relationship::P2C);
    g.add_peering(5, 9, Relationship::P2C);
    g.add_peering(5, 10, Relationship::P2C);
    g.add_peering(8, 11, Relationship::P2C);
    g.add_peering(9, 11, Relationship::P2C);
    g.add_peering(10, 11, Relationship::P2C);
    g.add_peering(8, 12, Relationship::P2P);
    g.add_peering(9, 12, Relationship::P2P);
    g.add_peering(10, 12, Relationship::P2P);
    g.add_peering(12, 13, Relationship::P2C);
    g
}

fn assert_invariants_hold(g: &AsGraph, sources: &[u32]) {
    let announcement = Announcement::anycast(g, sources.iter().copied());
    let state = infer_paths(g, &announcement, InferOptions::default()).unwrap();

    for &source in sources {
        assert_eq!(state.pref(source), PathPref::Unknown, "source AS{source} must stay UNKNOWN");
        assert!(state.best_paths(source).is_empty(), "source AS{source} must have no best paths");
    }

    for asn in 1..=13u32 {
        let paths = state.best_paths(asn);
        if paths.is_empty() {
            continue;
        }

        let first_len = paths[0].len();
        for path in paths {
            assert_eq!(path.len(), first_len, "AS{asn}'s tied paths must share one length");
            assert!(!path.contains(&asn), "AS{asn}'s own path must not contain AS{asn}");

            let mut full = vec![asn];
            full.extend_from_slice(path);
            assert!(is_valley_free(g, &full), "AS{asn}'s path {path:?} must be valley-free");
        }
    }
}

#[test]
fn invariants_hold_for_every_source_set() {
    let g = multiple_choices_graph();
    for sources in [vec![1], vec![11], vec![2, 4], vec![8, 10], vec![1, 13]] {
        assert_invariants_hold(&g, &sources);
    }
}
