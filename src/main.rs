use gaorex::{Announcement, AsGraph, InferOptions, Relationship};

fn main() {
    env_logger::init();

    println!("gaorex - Gao-Rexford path inference\n");

    run_implicit_withdrawal_example();
    println!("\n{}\n", "=".repeat(72));
    run_multiple_providers_example();
    println!("\n{}\n", "=".repeat(72));
    run_peer_lock_example();
}

/// A provider AS (1) with three customers (3, 4, 8's grandparent 6, and the
/// origin 10). AS1 prefers the direct customer route it already has even
/// after the origin starts exporting a second, longer path elsewhere in
/// the graph — nothing "withdraws" it, the later path simply never beats it.
fn run_implicit_withdrawal_example() {
    println!("Example 1: preference holds once a better route is known");
    println!("----------------------------------------------------------");

    let mut graph = AsGraph::new();
    graph.add_peering(1, 3, Relationship::P2C);
    graph.add_peering(1, 4, Relationship::P2C);
    graph.add_peering(1, 10, Relationship::P2C);
    graph.add_peering(4, 6, Relationship::P2C);
    graph.add_peering(6, 8, Relationship::P2C);
    graph.add_peering(2, 3, Relationship::P2P);
    graph.add_peering(2, 5, Relationship::P2C);
    graph.add_peering(5, 7, Relationship::P2C);
    graph.add_peering(7, 9, Relationship::P2C);
    graph.add_peering(9, 10, Relationship::P2C);

    let announcement = Announcement::anycast(&graph, [10]);
    let state = gaorex::infer_paths(&graph, &announcement, InferOptions::default())
        .expect("well-formed announcement");

    for asn in [1, 3, 8] {
        println!("AS{asn} ({:?}): {:?}", state.pref(asn), state.best_paths(asn));
    }
}

/// AS1 has two customers (2 and 3) that both reach the origin, and an AS4
/// with those same two as its own customers sees the resulting tie.
fn run_multiple_providers_example() {
    println!("Example 2: ties for best surface as multiple paths");
    println!("-----------------------------------------------------");

    let mut graph = AsGraph::new();
    graph.add_peering(10, 2, Relationship::P2C);
    graph.add_peering(10, 3, Relationship::P2C);
    graph.add_peering(2, 4, Relationship::P2C);
    graph.add_peering(3, 4, Relationship::P2C);

    let announcement = Announcement::anycast(&graph, [10]);
    let state = gaorex::infer_paths(&graph, &announcement, InferOptions::default())
        .expect("well-formed announcement");

    let mut at4 = state.best_paths(4).to_vec();
    at4.sort();
    println!("AS4 ({:?}): {at4:?}", state.pref(4));
}

/// AS2 and AS4 both only accept routes whose origin is AS1, modeling a
/// simple origin-lock import filter. A second origin (AS9) is visible
/// through the graph but gets filtered out at those two ASes.
fn run_peer_lock_example() {
    println!("Example 3: a per-AS import filter locking origin to one AS");
    println!("--------------------------------------------------------------");

    let mut graph = AsGraph::new();
    graph.add_peering(1, 2, Relationship::P2C);
    graph.add_peering(1, 4, Relationship::P2C);
    graph.add_peering(9, 2, Relationship::P2C);
    graph.add_peering(9, 4, Relationship::P2C);
    graph.add_peering(2, 3, Relationship::P2C);
    graph.add_peering(4, 3, Relationship::P2C);

    let origin_lock = |_exporter: gaorex::Asn, candidates: Vec<gaorex::AsPath>| {
        candidates.into_iter().filter(|p| p.last() == Some(&1)).collect()
    };
    graph.set_import_filter(2, Box::new(origin_lock));
    graph.set_import_filter(4, Box::new(origin_lock));

    let announcement = Announcement::anycast(&graph, [1, 9]);
    let state = gaorex::infer_paths(&graph, &announcement, InferOptions::default())
        .expect("well-formed announcement");

    for asn in [2, 3, 4] {
        println!("AS{asn} ({:?}): {:?}", state.pref(asn), state.best_paths(asn));
    }
}
