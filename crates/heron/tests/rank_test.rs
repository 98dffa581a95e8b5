use heron::Error;
use heron::graphlib::Graph;
use heron::rank::{RankAssignment, rank};

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph<()> {
    Graph::from_parts(nodes.iter().map(|id| (*id, ())), edges.iter().copied()).unwrap()
}

fn ranks_by_id(g: &Graph<()>, ranks: &RankAssignment) -> Vec<(String, usize)> {
    g.nodes()
        .enumerate()
        .map(|(v, id)| (id.to_string(), ranks.rank(v).unwrap()))
        .collect()
}

fn expected(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(id, r)| (id.to_string(), *r)).collect()
}

#[test]
fn rank_a_linear_chain() {
    let g = graph(&["1", "2", "3"], &[("1", "2"), ("2", "3")]);
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ranks_by_id(&g, &ranks),
        expected(&[("1", 0), ("2", 1), ("3", 2)])
    );
    assert_eq!(ranks.rank_count(), 3);
}

#[test]
fn rank_a_diamond_takes_the_longest_incoming_path() {
    let g = graph(
        &["1", "2", "3", "4"],
        &[("1", "2"), ("1", "3"), ("2", "4"), ("3", "4")],
    );
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ranks_by_id(&g, &ranks),
        expected(&[("1", 0), ("2", 1), ("3", 1), ("4", 2)])
    );
}

#[test]
fn rank_uses_the_longest_path_not_the_shortest() {
    let g = graph(&["a", "b", "c"], &[("a", "c"), ("a", "b"), ("b", "c")]);
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ranks_by_id(&g, &ranks),
        expected(&[("a", 0), ("b", 1), ("c", 2)])
    );
}

#[test]
fn rank_components_independently() {
    let g = graph(&["1", "2", "3", "4"], &[("1", "2"), ("3", "4")]);
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ranks_by_id(&g, &ranks),
        expected(&[("1", 0), ("2", 1), ("3", 0), ("4", 1)])
    );
}

#[test]
fn rank_puts_every_source_on_rank_zero() {
    let g = graph(
        &["x", "a", "b", "y"],
        &[("a", "b"), ("b", "y"), ("x", "y")],
    );
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ranks_by_id(&g, &ranks),
        expected(&[("x", 0), ("a", 0), ("b", 1), ("y", 2)])
    );
}

#[test]
fn rank_ignores_edge_multiplicity() {
    let g = graph(&["a", "b"], &[("a", "b"), ("a", "b"), ("a", "b")]);
    let ranks = rank(&g).unwrap();
    assert_eq!(ranks_by_id(&g, &ranks), expected(&[("a", 0), ("b", 1)]));
}

#[test]
fn rank_an_edgeless_graph_on_one_rank() {
    let g = graph(&["a", "b", "c"], &[]);
    let ranks = rank(&g).unwrap();
    assert_eq!(ranks.as_slice(), &[0, 0, 0]);
    assert_eq!(ranks.layers(), vec![vec![0, 1, 2]]);
}

#[test]
fn rank_an_empty_graph() {
    let g: Graph<()> = Graph::new();
    let ranks = rank(&g).unwrap();
    assert!(ranks.is_empty());
    assert_eq!(ranks.rank_count(), 0);
    assert!(ranks.layers().is_empty());
}

#[test]
fn rank_fails_on_a_two_cycle() {
    let g = graph(&["1", "2"], &[("1", "2"), ("2", "1")]);
    match rank(&g) {
        Err(Error::CycleDetected { node_id }) => {
            assert!(node_id == "1" || node_id == "2", "unexpected node {node_id}");
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn rank_names_a_node_on_the_cycle() {
    let g = graph(
        &["start", "end", "a", "b", "c"],
        &[
            ("start", "a"),
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "end"),
        ],
    );
    let Err(Error::CycleDetected { node_id }) = rank(&g) else {
        panic!("expected a cycle");
    };
    assert!(["a", "b", "c"].contains(&node_id.as_str()));
}

#[test]
fn every_edge_points_to_a_strictly_higher_rank() {
    let g = graph(
        &["a", "b", "c", "d", "e", "f", "g", "h"],
        &[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "h"),
            ("a", "e"),
            ("e", "g"),
            ("g", "h"),
            ("a", "f"),
            ("f", "g"),
        ],
    );
    let ranks = rank(&g).unwrap();
    assert!(ranks.respects_edges(&g));
    for e in g.edges() {
        assert!(ranks.rank(e.w).unwrap() > ranks.rank(e.v).unwrap());
    }
}
