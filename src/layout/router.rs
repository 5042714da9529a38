use crate::{
    diagram::model::{Archetype, Edge},
    foundation::{
        core::{Point, Rect},
        geometry::{Anchor, anchor_point},
    },
    layout::model::{LayoutEdge, PositionedNode},
};

/// Route `edge` between two positioned boxes.
///
/// Both endpoints must exist; dangling edges are filtered before routing.
/// - Flow / Timeline: right-center of the source to left-center of the target.
/// - Tree: bottom-center of the parent to top-center of the child.
/// - Cycle: center to center.
/// - Matrix: facing sides; straight within a row or column, otherwise one elbow.
pub fn route(
    archetype: Archetype,
    edge: &Edge,
    from: &PositionedNode,
    to: &PositionedNode,
) -> LayoutEdge {
    let (a, b) = (from.rect(), to.rect());
    let points = match archetype {
        Archetype::Flow | Archetype::Timeline => {
            vec![anchor_point(a, Anchor::Right), anchor_point(b, Anchor::Left)]
        }
        Archetype::Tree => vec![anchor_point(a, Anchor::Bottom), anchor_point(b, Anchor::Top)],
        Archetype::Cycle => vec![a.center(), b.center()],
        Archetype::Matrix => matrix_route(a, b),
    };
    LayoutEdge {
        edge: edge.clone(),
        points,
    }
}

fn matrix_route(a: Rect, b: Rect) -> Vec<Point> {
    let same_row = a.y0 < b.y1 && b.y0 < a.y1;
    let same_col = a.x0 < b.x1 && b.x0 < a.x1;
    let (ca, cb) = (a.center(), b.center());

    let horizontal = |src: Rect, dst: Rect| {
        if cb.x >= ca.x {
            (anchor_point(src, Anchor::Right), anchor_point(dst, Anchor::Left))
        } else {
            (anchor_point(src, Anchor::Left), anchor_point(dst, Anchor::Right))
        }
    };
    let vertical = |src: Rect, dst: Rect| {
        if cb.y >= ca.y {
            (anchor_point(src, Anchor::Bottom), anchor_point(dst, Anchor::Top))
        } else {
            (anchor_point(src, Anchor::Top), anchor_point(dst, Anchor::Bottom))
        }
    };

    if same_row {
        let (p0, p1) = horizontal(a, b);
        vec![p0, p1]
    } else if same_col {
        let (p0, p1) = vertical(a, b);
        vec![p0, p1]
    } else {
        let (start, _) = vertical(a, b);
        let (_, end) = horizontal(a, b);
        vec![start, Point::new(start.x, end.y), end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/router.rs"]
mod tests;
