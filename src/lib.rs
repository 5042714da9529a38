//! Diagram layout and animation timeline composition.
//!
//! The engine turns typed diagram graphs (one per scene) into concrete, non-overlapping
//! box layouts and a frame-indexed animation schedule for a downstream renderer.
//!
//! # Pipeline overview
//!
//! 1. **Position**: `DiagramGraph -> Vec<PositionedNode>` using the graph's [`Archetype`] rule
//! 2. **Route**: edges become polylines between box anchors ([`route`])
//! 3. **Validate**: overlapping or out-of-canvas layouts are replaced by [`fallback_grid`]
//! 4. **Sequence**: `[LayoutResult] -> CompositionResult` with staggered appearances,
//!    highlights and scene transitions ([`compose`])
//! 5. **Check**: [`validate_timeline`] rejects schedules that leave `[0, total_frames]`
//!
//! [`compose_diagrams`] runs all five steps for a list of [`SceneInput`]s.
//!
//! Everything is pure and synchronous: identical inputs and configuration produce
//! identical outputs. Per-scene layout is independent and runs in parallel in
//! [`layout_scenes`]; frame offsets are accumulated scene by scene.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod diagram;
mod foundation;
mod layout;
mod pipeline;

pub use animation::ease::Ease;
pub use animation::sequence::{
    AnimationKind, AnimationSequence, CompositionResult, PropertyTransition, SceneWindow,
};
pub use animation::sequencer::compose;
pub use animation::timeline::{TimelineReport, validate_timeline};
pub use animation::timing::{FrameTimings, MAX_FRAMES, TimingConfig};
pub use diagram::dsl::GraphBuilder;
pub use diagram::model::{Archetype, DiagramGraph, Edge, Node, SceneInput};
pub use foundation::core::{Canvas, Fps, Point, Rect};
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::geometry::{Anchor, anchor_point, box_within, boxes_overlap};
pub use layout::config::LayoutConfig;
pub use layout::engine::{layout_scene, layout_scenes};
pub use layout::model::{LayoutEdge, LayoutResult, PositionedNode};
pub use layout::positioner::{position, position_nodes};
pub use layout::router::route;
pub use layout::validate::{LayoutReport, fallback_grid, validate_layout};
pub use pipeline::{ComposerConfig, DiagramComposition, compose_diagrams, compose_from_json};
