use remora::{Digraph, Error};

fn diamond() -> Digraph<&'static str, u32> {
    // 1 -> 2, 1 -> 3, 2 -> 4, 3 -> 4
    let mut g = Digraph::new();
    for (v, name) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
        g.add_vertex(v, name).unwrap();
    }
    g.add_edge(1, 2, 12).unwrap();
    g.add_edge(1, 3, 13).unwrap();
    g.add_edge(2, 4, 24).unwrap();
    g.add_edge(3, 4, 34).unwrap();
    g
}

#[test]
fn empty_graph_has_no_vertices_or_edges() {
    let g: Digraph<(), ()> = Digraph::new();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.vertices().is_empty());
    assert!(g.edges().is_empty());
}

#[test]
fn queries_reflect_structure() {
    let g = diamond();

    assert_eq!(g.vertices(), vec![1, 2, 3, 4]);
    assert_eq!(g.edges(), vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert_eq!(g.out_edges(1), Ok(vec![(1, 2), (1, 3)]));
    assert_eq!(g.out_edges(4), Ok(vec![]));
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.out_degree(1), Ok(2));
    assert_eq!(g.out_degree(4), Ok(0));
    assert_eq!(g.vertex(3), Ok(&"c"));
    assert_eq!(g.edge(2, 4), Ok(&24));
}

#[test]
fn duplicate_vertex_is_rejected_without_effect() {
    let mut g = diamond();
    assert_eq!(
        g.add_vertex(2, "again"),
        Err(Error::DuplicateVertex { vertex: 2 })
    );
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.vertex(2), Ok(&"b"));
}

#[test]
fn duplicate_edge_is_rejected_without_effect() {
    let mut g = diamond();
    assert_eq!(
        g.add_edge(1, 2, 99),
        Err(Error::DuplicateEdge { from: 1, to: 2 })
    );
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.edge(1, 2), Ok(&12));
}

#[test]
fn add_edge_with_missing_endpoint_is_rejected_without_effect() {
    let mut g = diamond();
    assert_eq!(g.add_edge(1, 9, 0), Err(Error::NoSuchVertex { vertex: 9 }));
    assert_eq!(g.add_edge(9, 1, 0), Err(Error::NoSuchVertex { vertex: 9 }));
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn remove_vertex_scrubs_incident_edges_in_both_directions() {
    let mut g = diamond();
    assert_eq!(g.remove_vertex(2), Ok("b"));

    assert_eq!(g.vertices(), vec![1, 3, 4]);
    assert!(g.edges().iter().all(|&(v, w)| v != 2 && w != 2));
    assert_eq!(g.edges(), vec![(1, 3), (3, 4)]);
    assert_eq!(g.vertex(2), Err(Error::NoSuchVertex { vertex: 2 }));
    assert_eq!(g.out_degree(2), Err(Error::NoSuchVertex { vertex: 2 }));
}

#[test]
fn remove_missing_vertex_is_rejected_without_effect() {
    let mut g = diamond();
    assert_eq!(g.remove_vertex(9), Err(Error::NoSuchVertex { vertex: 9 }));
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn remove_edge_removes_exactly_one_edge() {
    let mut g = diamond();
    assert_eq!(g.remove_edge(1, 3), Ok(13));

    assert_eq!(g.edges(), vec![(1, 2), (2, 4), (3, 4)]);
    assert_eq!(g.edge(1, 3), Err(Error::NoSuchEdge { from: 1, to: 3 }));
    // Endpoints survive.
    assert!(g.contains_vertex(1));
    assert!(g.contains_vertex(3));
}

#[test]
fn remove_missing_edge_is_rejected_without_effect() {
    let mut g = diamond();
    assert_eq!(
        g.remove_edge(4, 1),
        Err(Error::NoSuchEdge { from: 4, to: 1 })
    );
    assert_eq!(
        g.remove_edge(1, 9),
        Err(Error::NoSuchVertex { vertex: 9 })
    );
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn clone_is_a_deep_independent_copy() {
    let original = diamond();
    let mut copy = original.clone();

    copy.remove_vertex(1).unwrap();
    copy.add_vertex(5, "e").unwrap();
    copy.add_edge(5, 4, 54).unwrap();
    *copy.vertex_mut(3).unwrap() = "changed";

    assert_eq!(original.vertices(), vec![1, 2, 3, 4]);
    assert_eq!(original.edges(), vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert_eq!(original.vertex(3), Ok(&"c"));
    assert_eq!(copy.vertices(), vec![2, 3, 4, 5]);
}

#[test]
fn moved_graph_keeps_its_structure() {
    let g = diamond();
    let moved = g;
    assert_eq!(moved.vertex_count(), 4);
    assert_eq!(moved.edge_count(), 4);
}

#[test]
fn non_contiguous_ids_are_plain_keys() {
    let mut g: Digraph<(), ()> = Digraph::new();
    g.add_vertex(-5, ()).unwrap();
    g.add_vertex(1_000_000, ()).unwrap();
    g.add_edge(1_000_000, -5, ()).unwrap();

    assert_eq!(g.vertices(), vec![-5, 1_000_000]);
    assert_eq!(g.edges(), vec![(1_000_000, -5)]);
}

#[test]
fn self_loop_counts_once_and_is_removed_with_its_vertex() {
    let mut g: Digraph<(), ()> = Digraph::new();
    g.add_vertex(1, ()).unwrap();
    g.add_vertex(2, ()).unwrap();
    g.add_edge(1, 1, ()).unwrap();
    g.add_edge(1, 2, ()).unwrap();
    assert_eq!(g.edge_count(), 2);

    g.remove_vertex(1).unwrap();
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertices(), vec![2]);
}
