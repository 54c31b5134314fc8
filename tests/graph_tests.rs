use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_path::graph::generators::{generate_grid, generate_random};
use shortest_path::graph::{Arc, DirectedGraph, GraphProvider, MutableGraph};

fn sample_graph() -> DirectedGraph<char, f64> {
    let mut graph = DirectedGraph::new();
    for node in ['a', 'b', 'c', 'd'] {
        graph.add_node(node);
    }
    graph.add_arc('a', 'b', 1.0);
    graph.add_arc('b', 'c', 2.0);
    graph.add_arc('a', 'c', 4.0);
    graph.add_arc('c', 'd', 1.5);
    graph
}

#[test]
fn test_nodes_keep_insertion_order() {
    let graph = sample_graph();

    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!['a', 'b', 'c', 'd']);
    assert_eq!(graph.node_count(), 4);
    assert!(graph.contains_node(&'c'));
    assert!(!graph.contains_node(&'z'));
}

#[test]
fn test_add_node_twice() {
    let mut graph = sample_graph();

    assert!(!graph.add_node('a'));
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_add_arc_replaces_weight() {
    let mut graph = sample_graph();

    assert_eq!(graph.add_arc('a', 'b', 3.0), Some(1.0));
    assert_eq!(graph.arc_weight(&'a', &'b'), Some(3.0));
    assert_eq!(graph.arc_count(), 4);
    assert_eq!(graph.outgoing_arcs(&'a').count(), 2);
}

#[test]
fn test_arc_lookup() {
    let graph = sample_graph();

    assert_eq!(graph.arc(&'b', &'c'), Some(Arc::new('b', 'c', 2.0)));
    assert_eq!(graph.arc(&'c', &'b'), None);
    assert_eq!(graph.arc_weight(&'z', &'a'), None);
    assert_eq!(graph.outgoing_arcs(&'z').count(), 0);

    let mut arcs: Vec<_> = graph.arcs().map(|arc| (arc.source, arc.target)).collect();
    arcs.sort();
    assert_eq!(arcs, vec![('a', 'b'), ('a', 'c'), ('b', 'c'), ('c', 'd')]);
}

#[test]
fn test_remove_arc() {
    let mut graph = sample_graph();

    assert_eq!(graph.remove_arc(&'a', &'c'), Some(4.0));
    assert_eq!(graph.remove_arc(&'a', &'c'), None);
    assert_eq!(graph.arc_count(), 3);
}

#[test]
fn test_remove_node_drops_connected_arcs() {
    let mut graph = sample_graph();

    assert!(graph.remove_node(&'b'));
    assert!(!graph.remove_node(&'b'));

    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!['a', 'c', 'd']);
    assert!(graph.contains_node(&'d'));
    assert_eq!(graph.arc_weight(&'a', &'b'), None);
    assert_eq!(graph.arc_weight(&'b', &'c'), None);
    assert_eq!(graph.arc_count(), 2);

    // Positions stay consistent after removal
    assert!(graph.add_node('b'));
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!['a', 'c', 'd', 'b']);
}

#[test]
fn test_arcs_to_undeclared_nodes_are_stored() {
    let mut graph: DirectedGraph<u8, f64> = DirectedGraph::new();
    graph.add_node(1);
    graph.add_arc(1, 2, 1.0);
    graph.add_arc(3, 1, -1.0);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.arc_count(), 2);
    assert_eq!(graph.arc_weight(&3, &1), Some(-1.0));
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_from_arcs_declares_endpoints() {
    let graph: DirectedGraph<u8, f64> =
        vec![Arc::new(1, 2, 1.0), Arc::new(2, 3, 1.0), Arc::new(1, 2, 5.0)]
            .into_iter()
            .collect();

    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(graph.arc_count(), 2);
    assert_eq!(graph.arc_weight(&1, &2), Some(5.0));
    assert!(graph.validate_non_negative());
}

#[test]
fn test_path_weight() {
    let graph = sample_graph();

    assert_eq!(graph.path_weight(&['a', 'b', 'c', 'd']), Some(4.5));
    assert_eq!(graph.path_weight(&['a']), Some(0.0));
    assert_eq!(graph.path_weight(&['a', 'd']), None);
}

#[test]
fn test_generate_grid() {
    let graph = generate_grid(10, 10);

    assert_eq!(graph.node_count(), 100);
    // 360 straight arcs and 324 diagonal arcs
    assert_eq!(graph.arc_count(), 684);
    assert_eq!(graph.arc_weight(&0, &1), Some(OrderedFloat(1.0)));
    assert_eq!(graph.arc_weight(&0, &11), Some(OrderedFloat(1.4)));
    assert_eq!(graph.arc_weight(&9, &10), None);
}

#[test]
fn test_generate_random_is_reproducible() {
    let first = generate_random(500, 3.0, &mut StdRng::seed_from_u64(3));
    let second = generate_random(500, 3.0, &mut StdRng::seed_from_u64(3));

    assert_eq!(first.node_count(), 500);
    assert!(first.arc_count() > 0);
    assert!(first.arc_count() <= 1500);
    assert!(first.validate_non_negative());

    for node in first.nodes() {
        let a: Vec<_> = first.outgoing_arcs(&node).collect();
        let b: Vec<_> = second.outgoing_arcs(&node).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|(target, _)| *target != node));
    }
}

#[test]
fn test_graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DirectedGraph<u64, OrderedFloat<f64>>>();
    assert_send_sync::<DirectedGraph<String, f32>>();
}
