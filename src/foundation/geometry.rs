//! Axis-aligned box predicates and anchor points used by layout and routing.

use crate::foundation::core::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A named point on a box: its center or the midpoint of one side.
pub enum Anchor {
    /// Box center.
    Center,
    /// Midpoint of the top side.
    Top,
    /// Midpoint of the bottom side.
    Bottom,
    /// Midpoint of the left side.
    Left,
    /// Midpoint of the right side.
    Right,
}

/// Resolve `anchor` on `rect`.
pub fn anchor_point(rect: Rect, anchor: Anchor) -> Point {
    let c = rect.center();
    match anchor {
        Anchor::Center => c,
        Anchor::Top => Point::new(c.x, rect.y0),
        Anchor::Bottom => Point::new(c.x, rect.y1),
        Anchor::Left => Point::new(rect.x0, c.y),
        Anchor::Right => Point::new(rect.x1, c.y),
    }
}

/// True when both the x- and y-intervals intersect with positive length.
///
/// Boxes that only share an edge or a corner do not overlap.
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    let dx = a.x1.min(b.x1) - a.x0.max(b.x0);
    let dy = a.y1.min(b.y1) - a.y0.max(b.y0);
    dx > 0.0 && dy > 0.0
}

/// True when `inner` lies inside `outer`, boundary included.
pub fn box_within(inner: Rect, outer: Rect) -> bool {
    let inner = inner.abs();
    let outer = outer.abs();
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
