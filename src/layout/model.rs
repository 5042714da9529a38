use crate::{
    diagram::model::{Archetype, Edge, Node},
    foundation::core::{Canvas, Point, Rect},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A node with its box on the canvas (`x`, `y` are the top-left corner).
pub struct PositionedNode {
    /// Source node.
    #[serde(flatten)]
    pub node: Node,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Box width.
    pub w: f64,
    /// Box height.
    pub h: f64,
}

impl PositionedNode {
    /// Place `node` with a top-left corner and size.
    pub fn new(node: Node, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { node, x, y, w, h }
    }

    /// Place `node` so its box is centered on `center`.
    pub fn centered(node: Node, center: Point, w: f64, h: f64) -> Self {
        Self::new(node, center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    /// Node id.
    pub fn id(&self) -> &str {
        &self.node.id
    }

    /// Box as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An edge with its routed polyline (at least two points).
pub struct LayoutEdge {
    /// Source edge.
    #[serde(flatten)]
    pub edge: Edge,
    /// Polyline from the source boundary to the target boundary.
    pub points: Vec<Point>,
}

impl LayoutEdge {
    /// Edge id.
    pub fn id(&self) -> &str {
        &self.edge.id
    }

    /// Total polyline length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Laid-out scene handed to the renderer and the sequencer.
pub struct LayoutResult {
    /// Archetype that drove placement and routing.
    pub archetype: Archetype,
    /// Positioned nodes in input order.
    pub nodes: Vec<PositionedNode>,
    /// Routed edges in input order, dangling references excluded.
    pub edges: Vec<LayoutEdge>,
    /// Canvas the boxes were validated against.
    pub canvas: Canvas,
    /// Whether the archetype layout was replaced by the fallback grid.
    #[serde(default)]
    pub used_fallback: bool,
    /// Ids of edges dropped because an endpoint was missing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_edges: Vec<String>,
}

impl LayoutResult {
    /// Positioned node by id.
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Routed edge by id.
    pub fn edge(&self, id: &str) -> Option<&LayoutEdge> {
        self.edges.iter().find(|e| e.id() == id)
    }
}
