use heron::OrderHeuristic;
use heron::graphlib::Graph;
use heron::order::{OrderOptions, cross_count, init_order, order};
use heron::rank::rank;

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph<()> {
    Graph::from_parts(nodes.iter().map(|id| (*id, ())), edges.iter().copied()).unwrap()
}

fn ids(g: &Graph<()>, layers: &[Vec<usize>]) -> Vec<Vec<String>> {
    layers
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|&v| g.node_id(v).unwrap().to_string())
                .collect()
        })
        .collect()
}

fn layers(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|layer| layer.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn init_order_is_breadth_first_from_rank_zero() {
    let g = graph(
        &["a", "b", "c", "d", "e"],
        &[("a", "d"), ("a", "c"), ("b", "e"), ("c", "e")],
    );
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ids(&g, &init_order(&g, &ranks)),
        layers(&[&["a", "b"], &["d", "c"], &["e"]])
    );
}

#[test]
fn init_order_shares_rank_zero_across_components() {
    let g = graph(&["1", "2", "3", "4"], &[("1", "2"), ("3", "4")]);
    let ranks = rank(&g).unwrap();
    assert_eq!(
        ids(&g, &init_order(&g, &ranks)),
        layers(&[&["1", "3"], &["2", "4"]])
    );
}

#[test]
fn init_order_of_an_edgeless_graph_follows_input_order() {
    let g = graph(&["c", "a", "b"], &[]);
    let ranks = rank(&g).unwrap();
    assert_eq!(ids(&g, &init_order(&g, &ranks)), layers(&[&["c", "a", "b"]]));
}

#[test]
fn cross_count_is_zero_without_layers() {
    let g = graph(&[], &[]);
    assert_eq!(cross_count(&g, &[]), 0);
}

#[test]
fn cross_count_counts_a_single_crossing() {
    let g = graph(&["a1", "a2", "b1", "b2"], &[("a1", "b1"), ("a2", "b2")]);
    assert_eq!(cross_count(&g, &[vec![0, 1], vec![2, 3]]), 0);
    assert_eq!(cross_count(&g, &[vec![0, 1], vec![3, 2]]), 1);
}

#[test]
fn cross_count_counts_parallel_edges_separately() {
    let g = graph(
        &["a1", "a2", "b1", "b2"],
        &[("a1", "b2"), ("a1", "b2"), ("a2", "b1")],
    );
    assert_eq!(cross_count(&g, &[vec![0, 1], vec![2, 3]]), 2);
}

#[test]
fn cross_count_sums_over_layer_pairs() {
    let g = graph(
        &["a1", "a2", "b1", "b2", "c1", "c2"],
        &[
            ("a1", "b1"),
            ("a2", "b2"),
            ("b1", "c1"),
            ("b2", "c2"),
        ],
    );
    assert_eq!(
        cross_count(&g, &[vec![0, 1], vec![3, 2], vec![4, 5]]),
        2
    );
}

#[test]
fn order_removes_a_crossing() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "c"), ("a", "d"), ("b", "c")],
    );
    let ranks = rank(&g).unwrap();
    let initial = init_order(&g, &ranks);
    assert_eq!(cross_count(&g, &initial), 1);

    let result = order(&g, &ranks, OrderOptions::default());
    assert_eq!(ids(&g, result.layers()), layers(&[&["a", "b"], &["d", "c"]]));
    assert_eq!(cross_count(&g, result.layers()), 0);
    assert_eq!(result.order(3), Some(0));
    assert_eq!(result.order(2), Some(1));
}

#[test]
fn order_removes_a_crossing_with_barycenters() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "c"), ("a", "d"), ("b", "c")],
    );
    let ranks = rank(&g).unwrap();
    let result = order(
        &g,
        &ranks,
        OrderOptions {
            heuristic: OrderHeuristic::Barycenter,
            passes: 4,
        },
    );
    assert_eq!(cross_count(&g, result.layers()), 0);
}

#[test]
fn order_with_zero_passes_keeps_the_initial_order() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "c"), ("a", "d"), ("b", "c")],
    );
    let ranks = rank(&g).unwrap();
    let result = order(
        &g,
        &ranks,
        OrderOptions {
            passes: 0,
            ..Default::default()
        },
    );
    assert_eq!(ids(&g, result.layers()), layers(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn order_never_moves_nodes_between_ranks() {
    let g = graph(
        &["r", "a", "b", "c", "x", "y", "z"],
        &[
            ("r", "a"),
            ("r", "b"),
            ("r", "c"),
            ("a", "z"),
            ("b", "y"),
            ("c", "x"),
            ("a", "x"),
        ],
    );
    let ranks = rank(&g).unwrap();
    let result = order(&g, &ranks, OrderOptions::default());
    for (r, layer) in result.layers().iter().enumerate() {
        for (i, &v) in layer.iter().enumerate() {
            assert_eq!(ranks.rank(v), Some(r));
            assert_eq!(result.order(v), Some(i));
        }
    }
    let placed: usize = result.layers().iter().map(Vec::len).sum();
    assert_eq!(placed, g.node_count());
}

#[test]
fn order_does_not_increase_crossings() {
    let g = graph(
        &["r", "a", "b", "c", "x", "y", "z"],
        &[
            ("r", "a"),
            ("r", "b"),
            ("r", "c"),
            ("a", "z"),
            ("b", "y"),
            ("c", "x"),
            ("a", "x"),
        ],
    );
    let ranks = rank(&g).unwrap();
    let initial = cross_count(&g, &init_order(&g, &ranks));
    let result = order(&g, &ranks, OrderOptions::default());
    assert!(cross_count(&g, result.layers()) <= initial);
}

#[test]
fn order_is_deterministic() {
    let g = graph(
        &["r", "a", "b", "c", "x", "y", "z"],
        &[
            ("r", "a"),
            ("r", "b"),
            ("r", "c"),
            ("a", "z"),
            ("b", "y"),
            ("c", "x"),
            ("a", "x"),
        ],
    );
    let ranks = rank(&g).unwrap();
    let first = order(&g, &ranks, OrderOptions::default());
    for _ in 0..8 {
        assert_eq!(order(&g, &ranks, OrderOptions::default()), first);
    }
}
