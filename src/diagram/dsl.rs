use crate::{
    diagram::model::{Archetype, DiagramGraph, Edge, Node},
    foundation::error::{MotionError, MotionResult},
};

/// Builder for [`DiagramGraph`] values.
///
/// Edges may be declared before the nodes they reference; ids are only checked in
/// [`GraphBuilder::build`].
pub struct GraphBuilder {
    archetype: Archetype,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Start an empty graph of the given archetype.
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a node.
    pub fn node(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id, label));
        self
    }

    /// Append a node with an importance weight.
    pub fn node_with_importance(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        importance: f64,
    ) -> Self {
        self.nodes.push(Node {
            importance: Some(importance),
            ..Node::new(id, label)
        });
        self
    }

    /// Append an edge with a generated id (`e{index}`).
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let id = format!("e{}", self.edges.len());
        self.edges.push(Edge::new(id, from, to));
        self
    }

    /// Append a labeled edge with an explicit id.
    pub fn labeled_edge(
        mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.edges.push(Edge {
            label: Some(label.into()),
            ..Edge::new(id, from, to)
        });
        self
    }

    /// Finish the graph. Rejects duplicate ids and edges to unknown nodes.
    pub fn build(self) -> MotionResult<DiagramGraph> {
        let graph = DiagramGraph {
            archetype: self.archetype,
            nodes: self.nodes,
            edges: self.edges,
        };
        graph.validate()?;
        graph.ensure_edges_resolved()?;
        Ok(graph)
    }

    /// Like [`GraphBuilder::build`], additionally requiring at least one node.
    pub fn build_non_empty(self) -> MotionResult<DiagramGraph> {
        let graph = self.build()?;
        if graph.nodes.is_empty() {
            return Err(MotionError::validation(format!(
                "{} diagram must contain at least one node",
                graph.archetype
            )));
        }
        Ok(graph)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/dsl.rs"]
mod tests;
