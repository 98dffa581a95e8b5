use heron_graphlib::{Edge, Error, Graph};

fn abc() -> Graph<(f64, f64)> {
    let mut g: Graph<(f64, f64)> = Graph::new();
    g.set_node("a", (10.0, 20.0));
    g.set_node("b", (30.0, 40.0));
    g.set_node("c", (50.0, 60.0));
    g
}

#[test]
fn graph_starts_empty() {
    let g: Graph<()> = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.nodes().count(), 0);
}

#[test]
fn set_node_keeps_insertion_order() {
    let g = abc();
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(g.node_ix("b"), Some(1));
    assert_eq!(g.node_id(2), Some("c"));
    assert_eq!(g.node_by_id("a"), Some(&(10.0, 20.0)));
}

#[test]
fn set_node_replaces_label_but_keeps_position() {
    let mut g = abc();
    let ix = g.set_node("a", (1.0, 2.0));
    assert_eq!(ix, 0);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node(0), Some(&(1.0, 2.0)));
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn set_edge_builds_adjacency_in_edge_order() {
    let mut g = abc();
    assert_eq!(g.set_edge("a", "c").unwrap(), 0);
    assert_eq!(g.set_edge("a", "b").unwrap(), 1);
    assert_eq!(g.set_edge("b", "c").unwrap(), 2);

    assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(g.predecessors(2).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(g.out_edges(0), &[0, 1]);
    assert_eq!(g.in_edges(2), &[0, 2]);
    assert_eq!(g.edge(2), Some(Edge { v: 1, w: 2 }));
    assert_eq!(g.in_degree(0), 0);
    assert_eq!(g.out_degree(0), 2);
}

#[test]
fn parallel_edges_are_not_deduplicated() {
    let mut g = abc();
    g.set_edge("a", "b").unwrap();
    g.set_edge("a", "b").unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 1]);
    assert_eq!(g.in_degree(1), 2);
}

#[test]
fn set_edge_rejects_unknown_endpoints() {
    let mut g = abc();
    assert_eq!(
        g.set_edge("a", "z"),
        Err(Error::UnknownNodeReference {
            id: "z".to_string()
        })
    );
    assert_eq!(
        g.set_edge("y", "a"),
        Err(Error::UnknownNodeReference {
            id: "y".to_string()
        })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn set_edge_rejects_self_edges() {
    let mut g = abc();
    assert_eq!(
        g.set_edge("b", "b"),
        Err(Error::InvalidEdge {
            source_id: "b".to_string(),
            target_id: "b".to_string()
        })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn from_parts_validates_every_edge() {
    let g: Graph<()> = Graph::from_parts([("a", ()), ("b", ())], [("a", "b")]).unwrap();
    assert_eq!(g.edge_count(), 1);

    let err = Graph::<()>::from_parts([("a", ())], [("a", "b")]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownNodeReference {
            id: "b".to_string()
        }
    );
}

#[test]
fn out_of_range_queries_are_empty() {
    let g = abc();
    assert!(g.node(99).is_none());
    assert!(g.out_edges(99).is_empty());
    assert_eq!(g.successors(99).count(), 0);
}
