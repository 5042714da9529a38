use super::*;
use crate::{Archetype, GraphBuilder, Node};

#[test]
fn flow_scene_lays_out_without_fallback() {
    let graph = GraphBuilder::new(Archetype::Flow)
        .node("a", "A")
        .node("b", "B")
        .node("c", "C")
        .node("d", "D")
        .edge("a", "b")
        .edge("b", "c")
        .edge("c", "d")
        .build()
        .unwrap();
    let layout = layout_scene(&graph, &LayoutConfig::default()).unwrap();

    assert!(!layout.used_fallback);
    assert_eq!(layout.nodes.len(), 4);
    assert_eq!(layout.edges.len(), 3);
    for (i, n) in layout.nodes.iter().enumerate() {
        assert_eq!(n.x, 40.0 + (i as f64) * 200.0);
        assert_eq!(n.y, layout.nodes[0].y);
    }
    assert!(validate_layout(&layout).overlaps.is_empty());
    assert_eq!(layout.edges[0].points.len(), 2);
}

#[test]
fn dangling_edges_are_dropped_and_listed() {
    let mut graph = DiagramGraph::new(Archetype::Tree);
    graph.nodes = vec![Node::new("root", "Root"), Node::new("leaf", "Leaf")];
    graph.edges = vec![
        Edge::new("ok", "root", "leaf"),
        Edge::new("bad", "root", "nowhere"),
    ];
    let layout = layout_scene(&graph, &LayoutConfig::default()).unwrap();
    assert_eq!(layout.edges.len(), 1);
    assert_eq!(layout.edges[0].id(), "ok");
    assert_eq!(layout.dropped_edges, ["bad"]);
}

#[test]
fn overflowing_flow_falls_back_to_grid() {
    let mut graph = DiagramGraph::new(Archetype::Flow);
    graph.nodes = (0..20)
        .map(|i| Node::new(format!("n{i}"), "step"))
        .collect();
    graph.edges = (0..19)
        .map(|i| Edge::new(format!("e{i}"), format!("n{i}"), format!("n{}", i + 1)))
        .collect();

    let layout = layout_scene(&graph, &LayoutConfig::default()).unwrap();
    assert!(layout.used_fallback);
    assert!(validate_layout(&layout).valid);
    assert_eq!(layout.edges.len(), 19);
    // Edges are re-routed against the fallback boxes.
    let first = layout.node("n0").unwrap().rect();
    assert_eq!(layout.edges[0].points[0].x, first.x1);
}

#[test]
fn invalid_config_and_graph_are_rejected() {
    let graph = GraphBuilder::new(Archetype::Cycle)
        .node("a", "A")
        .build()
        .unwrap();
    let cfg = LayoutConfig {
        node_width: 0.0,
        ..LayoutConfig::default()
    };
    assert!(layout_scene(&graph, &cfg).is_err());

    let mut dup = graph.clone();
    dup.nodes.push(Node::new("a", "again"));
    assert!(layout_scene(&dup, &LayoutConfig::default()).is_err());
}

#[test]
fn parallel_layout_keeps_scene_order() {
    let graphs: Vec<DiagramGraph> = Archetype::ALL
        .iter()
        .map(|&a| {
            let mut g = DiagramGraph::new(a);
            g.nodes = (0..4).map(|i| Node::new(format!("n{i}"), "x")).collect();
            g
        })
        .collect();
    let cfg = LayoutConfig::default();
    let layouts = layout_scenes(&graphs, &cfg).unwrap();
    assert_eq!(layouts.len(), graphs.len());
    for (layout, graph) in layouts.iter().zip(&graphs) {
        assert_eq!(layout.archetype, graph.archetype);
        assert_eq!(*layout, layout_scene(graph, &cfg).unwrap());
    }
}

#[test]
fn empty_scene_yields_empty_layout() {
    let layout = layout_scene(&DiagramGraph::new(Archetype::Matrix), &LayoutConfig::default())
        .unwrap();
    assert!(layout.nodes.is_empty());
    assert!(layout.edges.is_empty());
    assert!(!layout.used_fallback);
}
