//! Scene layout: archetype positioners, edge routing, validation and the fallback grid.

pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod model;
pub(crate) mod positioner;
pub(crate) mod router;
pub(crate) mod validate;
