use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    diagram::model::{Archetype, DiagramGraph, Node},
    foundation::core::Point,
    layout::{config::LayoutConfig, model::PositionedNode},
};

/// Assign a box to every node of `graph` using its archetype rule.
///
/// Output order matches `graph.nodes`. Boxes from one call never overlap as long as the
/// node count stays within the archetype's capacity for the configured canvas; beyond
/// that, boxes may overlap or leave the canvas and [`crate::validate_layout`] reports it.
pub fn position(graph: &DiagramGraph, config: &LayoutConfig) -> Vec<PositionedNode> {
    position_nodes(graph.archetype, &graph.nodes, config)
}

/// Like [`position`], for a bare node slice.
pub fn position_nodes(
    archetype: Archetype,
    nodes: &[Node],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    if nodes.is_empty() {
        return Vec::new();
    }
    match archetype {
        Archetype::Flow => place_flow(nodes, config),
        Archetype::Tree => place_tree(nodes, config),
        Archetype::Timeline => place_timeline(nodes, config),
        Archetype::Cycle => place_cycle(nodes, config),
        Archetype::Matrix => place_matrix(nodes, config),
    }
}

fn place_flow(nodes: &[Node], cfg: &LayoutConfig) -> Vec<PositionedNode> {
    let y = cfg.canvas.height * 0.5 - cfg.node_height * 0.5;
    let pitch = cfg.node_width + cfg.gap;
    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let x = cfg.margin + (i as f64) * pitch;
            PositionedNode::new(n.clone(), x, y, cfg.node_width, cfg.node_height)
        })
        .collect()
}

fn place_tree(nodes: &[Node], cfg: &LayoutConfig) -> Vec<PositionedNode> {
    let (w, h) = (cfg.node_width, cfg.node_height);
    let root_x = cfg.canvas.width * 0.5 - w * 0.5;
    let child_y = cfg.tree_top + cfg.tree_level_gap;

    let children = &nodes[1..];
    let n = children.len() as f64;
    // Narrow the pitch so wide child rows stay inside the margins.
    let child_gap = if children.len() > 1 {
        let avail = cfg.canvas.width - 2.0 * cfg.margin - w;
        cfg.tree_child_gap.min(avail / (n - 1.0)).max(0.0)
    } else {
        cfg.tree_child_gap
    };

    let mut out = Vec::with_capacity(nodes.len());
    out.push(PositionedNode::new(
        nodes[0].clone(),
        root_x,
        cfg.tree_top,
        w,
        h,
    ));
    for (i, child) in children.iter().enumerate() {
        let x = root_x - (n - 1.0) * child_gap * 0.5 + (i as f64) * child_gap;
        out.push(PositionedNode::new(child.clone(), x, child_y, w, h));
    }
    out
}

fn place_timeline(nodes: &[Node], cfg: &LayoutConfig) -> Vec<PositionedNode> {
    let (w, h) = (cfg.node_width, cfg.node_height);
    let base_y = cfg.canvas.height * 0.5 - h * 0.5;
    // Neighbours sit on opposite sides of the axis, so the pitch may shrink down to
    // half a box width before same-side boxes collide.
    let pitch = if nodes.len() > 1 {
        let avail = cfg.canvas.width - 2.0 * cfg.margin - w;
        (w + cfg.gap).min(avail / (nodes.len() as f64 - 1.0)).max(0.0)
    } else {
        w + cfg.gap
    };

    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let x = cfg.margin + (i as f64) * pitch;
            let y = if i % 2 == 0 {
                base_y - cfg.timeline_offset
            } else {
                base_y + cfg.timeline_offset
            };
            PositionedNode::new(n.clone(), x, y, w, h)
        })
        .collect()
}

fn place_cycle(nodes: &[Node], cfg: &LayoutConfig) -> Vec<PositionedNode> {
    let (w, h) = (cfg.node_width, cfg.node_height);
    let center = cfg.canvas.center();
    let fit = ((cfg.canvas.width - w).min(cfg.canvas.height - h)) * 0.5 - cfg.margin;
    let r = cfg.cycle_radius.min(fit).max(0.0);
    let n = nodes.len() as f64;

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let angle = TAU * (i as f64) / n - FRAC_PI_2;
            let c = Point::new(center.x + r * angle.cos(), center.y + r * angle.sin());
            PositionedNode::centered(node.clone(), c, w, h)
        })
        .collect()
}

fn place_matrix(nodes: &[Node], cfg: &LayoutConfig) -> Vec<PositionedNode> {
    let (w, h) = (cfg.node_width, cfg.node_height);
    let rows = nodes.len().div_ceil(2) as f64;
    let start_x = (cfg.canvas.width - cfg.matrix_cell_width - w) * 0.5;
    let span_h = (rows - 1.0) * cfg.matrix_cell_height + h;
    let start_y = ((cfg.canvas.height - span_h) * 0.5).max(cfg.margin);

    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let row = (i / 2) as f64;
            let col = (i % 2) as f64;
            let x = start_x + col * cfg.matrix_cell_width;
            let y = start_y + row * cfg.matrix_cell_height;
            PositionedNode::new(n.clone(), x, y, w, h)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/positioner.rs"]
mod tests;
