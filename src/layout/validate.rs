use crate::{
    diagram::model::Node,
    foundation::geometry::{box_within, boxes_overlap},
    layout::{
        config::LayoutConfig,
        model::{LayoutResult, PositionedNode},
    },
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Outcome of [`validate_layout`].
pub struct LayoutReport {
    /// True when there are no overlaps and no out-of-bounds boxes.
    pub valid: bool,
    /// Overlapping node pairs, each ordered by input index, sorted.
    pub overlaps: Vec<(String, String)>,
    /// Nodes whose box leaves the canvas or has a non-positive size.
    pub out_of_bounds: Vec<String>,
}

/// Check a layout for box overlaps and out-of-canvas placement.
pub fn validate_layout(result: &LayoutResult) -> LayoutReport {
    let canvas = result.canvas.bounds();
    let out_of_bounds: Vec<String> = result
        .nodes
        .iter()
        .filter(|n| !box_is_sane(n) || !box_within(n.rect(), canvas))
        .map(|n| n.id().to_string())
        .collect();

    let overlaps = overlapping_pairs(&result.nodes)
        .into_iter()
        .map(|(i, j)| {
            (
                result.nodes[i].id().to_string(),
                result.nodes[j].id().to_string(),
            )
        })
        .collect::<Vec<_>>();

    LayoutReport {
        valid: overlaps.is_empty() && out_of_bounds.is_empty(),
        overlaps,
        out_of_bounds,
    }
}

fn box_is_sane(n: &PositionedNode) -> bool {
    [n.x, n.y, n.w, n.h].iter().all(|v| v.is_finite()) && n.w > 0.0 && n.h > 0.0
}

/// Sweep over boxes sorted by left edge; returns index pairs `(i, j)` with `i < j`.
fn overlapping_pairs(nodes: &[PositionedNode]) -> Vec<(usize, usize)> {
    let rects: Vec<_> = nodes.iter().map(PositionedNode::rect).collect();
    let mut order: Vec<usize> = (0..rects.len()).collect();
    order.sort_by(|&a, &b| rects[a].x0.total_cmp(&rects[b].x0).then(a.cmp(&b)));

    let mut pairs = Vec::new();
    for (k, &i) in order.iter().enumerate() {
        for &j in &order[k + 1..] {
            if rects[j].x0 >= rects[i].x1 {
                break;
            }
            if boxes_overlap(rects[i], rects[j]) {
                pairs.push((i.min(j), i.max(j)));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}

/// Row-major grid placement that validates for any node count on a valid canvas.
///
/// Uses the nominal `(node_width + gap) x (node_height + gap)` cell when all rows fit
/// inside the margins; otherwise cells shrink uniformly and boxes shrink to 80% of a cell.
pub fn fallback_grid(nodes: &[Node], config: &LayoutConfig) -> Vec<PositionedNode> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let canvas = config.canvas;
    let margin = config.margin.min(canvas.width * 0.25).min(canvas.height * 0.25);
    let avail_w = canvas.width - 2.0 * margin;
    let avail_h = canvas.height - 2.0 * margin;
    let count = nodes.len();

    let pitch_w = config.node_width + config.gap;
    let pitch_h = config.node_height + config.gap;
    let nominal_cols = ((avail_w + config.gap) / pitch_w).floor() as usize;
    if nominal_cols >= 1 {
        let rows = count.div_ceil(nominal_cols);
        let span_h = (rows as f64) * pitch_h - config.gap;
        if span_h <= avail_h {
            return grid_cells(
                nodes,
                nominal_cols,
                (margin, margin),
                (pitch_w, pitch_h),
                (config.node_width, config.node_height),
            );
        }
    }

    // Shrink: pick a column count that keeps cells close to the canvas aspect ratio.
    let aspect = avail_w / avail_h;
    let cols = ((count as f64 * aspect).sqrt().ceil() as usize).clamp(1, count);
    let rows = count.div_ceil(cols);
    let cell_w = avail_w / cols as f64;
    let cell_h = avail_h / rows as f64;
    let w = config.node_width.min(cell_w * 0.8);
    let h = config.node_height.min(cell_h * 0.8);
    let origin = (margin + (cell_w - w) * 0.5, margin + (cell_h - h) * 0.5);
    grid_cells(nodes, cols, origin, (cell_w, cell_h), (w, h))
}

fn grid_cells(
    nodes: &[Node],
    cols: usize,
    origin: (f64, f64),
    pitch: (f64, f64),
    size: (f64, f64),
) -> Vec<PositionedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let row = (i / cols) as f64;
            let col = (i % cols) as f64;
            PositionedNode::new(
                n.clone(),
                origin.0 + col * pitch.0,
                origin.1 + row * pitch.1,
                size.0,
                size.1,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/validate.rs"]
mod tests;
