//! Input graph model: archetypes, nodes, edges and per-scene classifier payloads.

pub(crate) mod dsl;
pub(crate) mod model;
