//! Ported from `test_diamond_exhaustive`: every one of the 3^6 = 729
//! relationship assignments on a three-way diamond (AS1 through two or
//! three transits to AS5) is checked against an independent reference
//! computation of what AS5's best paths must be.
use gaorex::{infer_paths, Announcement, AsGraph, AsPath, InferOptions, PathPref, Relationship};

const RELATIONSHIPS: [Relationship; 3] = [Relationship::P2C, Relationship::P2P, Relationship::C2P];

fn build_diamond(rels: [Relationship; 6]) -> AsGraph {
    let mut g = AsGraph::new();
    g.add_peering(1, 2, rels[0]);
    g.add_peering(1, 3, rels[1]);
    g.add_peering(1, 4, rels[2]);
    g.add_peering(2, 5, rels[3]);
    g.add_peering(3, 5, rels[4]);
    g.add_peering(4, 5, rels[5]);
    g
}

/// Independent reference computation of AS5's best paths and preference,
/// mirroring the original test's reference enumerator rather than the
/// engine under test.
fn reference_as5_paths(g: &AsGraph) -> (Vec<AsPath>, PathPref) {
    let mut as5_paths = Vec::new();
    let mut best_pref = PathPref::Unknown;

    for transit in [2u32, 3, 4] {
        let as5_pref = PathPref::from_relationship(g.relationship(transit, 5).unwrap());
        if as5_pref < best_pref {
            continue;
        }
        let transit_pref = PathPref::from_relationship(g.relationship(1, transit).unwrap());
        if transit_pref != PathPref::Customer && as5_pref != PathPref::Provider {
            continue;
        }
        if as5_pref > best_pref {
            as5_paths = vec![vec![transit, 1]];
        } else {
            as5_paths.push(vec![transit, 1]);
        }
        best_pref = std::cmp::max(best_pref, as5_pref);
    }

    (as5_paths, best_pref)
}

fn assert_same_paths(actual: &[AsPath], expected: &[AsPath]) {
    let mut a: Vec<AsPath> = actual.to_vec();
    let mut e: Vec<AsPath> = expected.to_vec();
    a.sort();
    e.sort();
    assert_eq!(a, e);
}

#[test]
fn every_relationship_assignment_matches_the_reference_enumerator() {
    for r0 in RELATIONSHIPS {
        for r1 in RELATIONSHIPS {
            for r2 in RELATIONSHIPS {
                for r3 in RELATIONSHIPS {
                    for r4 in RELATIONSHIPS {
                        for r5 in RELATIONSHIPS {
                            let rels = [r0, r1, r2, r3, r4, r5];
                            let g = build_diamond(rels);
                            let announcement = Announcement::anycast(&g, [1]);
                            let state = infer_paths(&g, &announcement, InferOptions::default()).unwrap();

                            let (expected_paths, expected_pref) = reference_as5_paths(&g);
                            assert_same_paths(state.best_paths(5), &expected_paths);
                            assert_eq!(state.pref(5), expected_pref, "rels = {rels:?}");
                        }
                    }
                }
            }
        }
    }
}
