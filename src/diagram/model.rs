use std::collections::HashSet;

use crate::foundation::error::{MotionError, MotionResult};

/// Topological category of a diagram; selects the positioning and routing rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Archetype {
    /// Left-to-right sequential steps.
    #[default]
    Flow,
    /// Root with one row of children.
    Tree,
    /// Left-to-right events at alternating heights.
    Timeline,
    /// Steps on a circle.
    Cycle,
    /// Two-column comparison grid.
    Matrix,
}

impl Archetype {
    /// All archetypes in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Flow,
        Self::Tree,
        Self::Timeline,
        Self::Cycle,
        Self::Matrix,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Tree => "tree",
            Self::Timeline => "timeline",
            Self::Cycle => "cycle",
            Self::Matrix => "matrix",
        }
    }

    /// Parse a classifier tag (case-insensitive, with common aliases).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flow" | "sequential" | "sequence" | "process" => Some(Self::Flow),
            "tree" | "hierarchy" => Some(Self::Tree),
            "timeline" => Some(Self::Timeline),
            "cycle" | "circular" => Some(Self::Cycle),
            "matrix" | "comparison" => Some(Self::Matrix),
            _ => None,
        }
    }

    /// Like [`Archetype::parse`], but unknown tags fall back to [`Archetype::Flow`].
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|| {
            tracing::warn!(tag, "unknown diagram archetype, using flow placement");
            Self::Flow
        })
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Archetype {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Archetype {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A labeled diagram node.
pub struct Node {
    /// Identifier, unique within its graph.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional emphasis weight in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
}

impl Node {
    /// Node without an importance weight.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            importance: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A directed relationship between two nodes of the same graph.
pub struct Edge {
    /// Edge identifier.
    pub id: String,
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    /// Unlabeled edge.
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Typed node/edge graph for one scene.
pub struct DiagramGraph {
    /// Diagram archetype.
    #[serde(rename = "type", default)]
    pub archetype: Archetype,
    /// Nodes in presentation order.
    pub nodes: Vec<Node>,
    /// Edges in presentation order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl DiagramGraph {
    /// Empty graph of the given archetype.
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Check id uniqueness and importance ranges.
    ///
    /// Dangling edge references are not rejected here; see [`DiagramGraph::partition_edges`].
    pub fn validate(&self) -> MotionResult<()> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.id.trim().is_empty() {
                return Err(MotionError::validation("node id must be non-empty"));
            }
            if !node_ids.insert(node.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
            if let Some(importance) = node.importance
                && !(importance.is_finite() && (0.0..=1.0).contains(&importance))
            {
                return Err(MotionError::validation(format!(
                    "node '{}' importance must be in [0, 1]",
                    node.id
                )));
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if edge.id.trim().is_empty() {
                return Err(MotionError::validation("edge id must be non-empty"));
            }
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate edge id '{}'",
                    edge.id
                )));
            }
        }
        Ok(())
    }

    /// Reject graphs without nodes, for callers whose contract requires content.
    pub fn ensure_non_empty(&self) -> MotionResult<()> {
        if self.nodes.is_empty() {
            return Err(MotionError::validation("diagram must contain at least one node"));
        }
        Ok(())
    }

    /// Reject graphs whose edges reference unknown node ids.
    pub fn ensure_edges_resolved(&self) -> MotionResult<()> {
        let (_, dangling) = self.partition_edges();
        match dangling.first() {
            None => Ok(()),
            Some(edge) => Err(MotionError::validation(format!(
                "edge '{}' references unknown node ('{}' -> '{}')",
                edge.id, edge.from, edge.to
            ))),
        }
    }

    /// Split edges into `(resolved, dangling)`, preserving input order in both.
    pub fn partition_edges(&self) -> (Vec<&Edge>, Vec<&Edge>) {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .partition(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()))
    }

    /// Index of the node with `id`, if present.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One scene as produced by the upstream classifier.
///
/// Only the graph drives layout and sequencing; the time window and text fields are
/// advisory and carried through for the caller.
pub struct SceneInput {
    /// Typed graph for this scene.
    #[serde(flatten)]
    pub graph: DiagramGraph,
    /// Advisory scene start in milliseconds.
    #[serde(default)]
    pub start_ms: f64,
    /// Advisory scene duration in milliseconds.
    #[serde(default)]
    pub duration_ms: f64,
    /// Short scene summary.
    #[serde(default)]
    pub summary: String,
    /// Key phrases extracted upstream.
    #[serde(default)]
    pub keyphrases: Vec<String>,
}

impl SceneInput {
    /// Scene input wrapping `graph` with empty advisory fields.
    pub fn from_graph(graph: DiagramGraph) -> Self {
        Self {
            graph,
            start_ms: 0.0,
            duration_ms: 0.0,
            summary: String::new(),
            keyphrases: Vec::new(),
        }
    }

    /// Graph for this scene.
    pub fn graph(&self) -> &DiagramGraph {
        &self.graph
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/model.rs"]
mod tests;
