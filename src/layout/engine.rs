use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    diagram::model::{DiagramGraph, Edge},
    foundation::error::{MotionError, MotionResult},
    layout::{
        config::LayoutConfig,
        model::{LayoutEdge, LayoutResult, PositionedNode},
        positioner::position,
        router::route,
        validate::{fallback_grid, validate_layout},
    },
};

#[tracing::instrument(skip(graph, config), fields(archetype = %graph.archetype, nodes = graph.nodes.len()))]
/// Position, route and validate one scene.
///
/// Dangling edges are dropped (and listed in [`LayoutResult::dropped_edges`]). An
/// archetype layout that overlaps or leaves the canvas is replaced by
/// [`fallback_grid`]; the returned layout always validates.
pub fn layout_scene(graph: &DiagramGraph, config: &LayoutConfig) -> MotionResult<LayoutResult> {
    config.validate()?;
    graph.validate()?;

    let (edges, dangling) = graph.partition_edges();
    if !dangling.is_empty() {
        tracing::warn!(
            count = dangling.len(),
            "dropping edges with unknown endpoints before routing"
        );
    }

    let nodes = position(graph, config);
    let mut result = LayoutResult {
        archetype: graph.archetype,
        edges: route_all(graph, &edges, &nodes),
        nodes,
        canvas: config.canvas,
        used_fallback: false,
        dropped_edges: dangling.iter().map(|e| e.id.clone()).collect(),
    };

    let report = validate_layout(&result);
    if report.valid {
        return Ok(result);
    }

    tracing::warn!(
        overlaps = report.overlaps.len(),
        out_of_bounds = report.out_of_bounds.len(),
        "archetype layout invalid, substituting fallback grid"
    );
    result.nodes = fallback_grid(&graph.nodes, config);
    result.edges = route_all(graph, &edges, &result.nodes);
    result.used_fallback = true;

    let recheck = validate_layout(&result);
    if !recheck.valid {
        return Err(MotionError::layout(format!(
            "fallback grid failed validation ({} overlaps, {} out of bounds)",
            recheck.overlaps.len(),
            recheck.out_of_bounds.len()
        )));
    }
    Ok(result)
}

/// Lay out independent scenes in parallel; results keep input order.
pub fn layout_scenes(
    graphs: &[DiagramGraph],
    config: &LayoutConfig,
) -> MotionResult<Vec<LayoutResult>> {
    graphs
        .par_iter()
        .map(|graph| layout_scene(graph, config))
        .collect()
}

fn route_all(graph: &DiagramGraph, edges: &[&Edge], nodes: &[PositionedNode]) -> Vec<LayoutEdge> {
    let by_id: HashMap<&str, &PositionedNode> = nodes.iter().map(|n| (n.id(), n)).collect();
    edges
        .iter()
        .filter_map(|edge| {
            let from = by_id.get(edge.from.as_str())?;
            let to = by_id.get(edge.to.as_str())?;
            Some(route(graph.archetype, edge, from, to))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
