use std::collections::BTreeMap;

use crate::{animation::ease::Ease, foundation::core::Fps};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// What an animation sequence does to its target.
pub enum AnimationKind {
    /// A node box fades/scales in.
    NodeAppear,
    /// An edge path draws in.
    EdgeAppear,
    /// The canvas hands over from the previous scene.
    SceneTransition,
    /// An important node is emphasised.
    Highlight,
}

impl AnimationKind {
    /// Property transitions the renderer applies for this kind.
    pub fn default_properties(self, ease: Ease) -> BTreeMap<String, PropertyTransition> {
        let props: &[(&str, f64, f64)] = match self {
            Self::NodeAppear => &[("opacity", 0.0, 1.0), ("scale", 0.8, 1.0)],
            Self::EdgeAppear => &[("draw", 0.0, 1.0), ("opacity", 0.0, 1.0)],
            Self::SceneTransition => &[("opacity", 1.0, 0.0)],
            Self::Highlight => &[("glow", 0.0, 1.0), ("scale", 1.0, 1.1)],
        };
        props
            .iter()
            .map(|&(name, from, to)| (name.to_string(), PropertyTransition { from, to, ease }))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Animated property: interpolates `from` to `to` over the owning sequence.
pub struct PropertyTransition {
    /// Value at the first frame.
    pub from: f64,
    /// Value at the last frame.
    pub to: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl PropertyTransition {
    /// Value at linear progress `t` in `[0, 1]`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timed animation over `[start_frame, end_frame)`.
pub struct AnimationSequence {
    /// Unique id within a composition.
    pub id: String,
    /// Index of the scene that emitted this sequence.
    pub scene: usize,
    /// First frame (inclusive).
    pub start_frame: i64,
    /// End frame (exclusive); `start_frame <= end_frame`.
    pub end_frame: i64,
    /// Animation kind.
    pub kind: AnimationKind,
    /// Node id, edge id, or scene id (`scene-{index}`) the sequence applies to.
    pub target_id: String,
    /// Property transitions keyed by property name.
    pub properties: BTreeMap<String, PropertyTransition>,
}

impl AnimationSequence {
    /// Length in frames.
    pub fn duration_frames(&self) -> i64 {
        self.end_frame - self.start_frame
    }

    /// Whether `frame` falls inside `[start_frame, end_frame)`.
    pub fn is_active_at(&self, frame: i64) -> bool {
        self.start_frame <= frame && frame < self.end_frame
    }

    /// Linear progress of `frame` through the sequence, clamped to `[0, 1]`.
    pub fn progress_at(&self, frame: i64) -> f64 {
        let len = self.duration_frames();
        if len <= 0 {
            return if frame >= self.end_frame { 1.0 } else { 0.0 };
        }
        ((frame - self.start_frame) as f64 / len as f64).clamp(0.0, 1.0)
    }

    /// Property values at `frame`.
    pub fn sample(&self, frame: i64) -> BTreeMap<String, f64> {
        let t = self.progress_at(frame);
        self.properties
            .iter()
            .map(|(name, tr)| (name.clone(), tr.value_at(t)))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame window allocated to one scene.
pub struct SceneWindow {
    /// Scene index.
    pub index: usize,
    /// First frame of the scene (start of its transition, if any).
    pub start_frame: i64,
    /// First frame after the transition window.
    pub content_start: i64,
    /// End of the scene's frame budget (exclusive).
    pub end_frame: i64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Animation schedule for a whole multi-scene run.
pub struct CompositionResult {
    /// Sequences in emission order (scene by scene).
    pub sequences: Vec<AnimationSequence>,
    /// Total frames covered by the run.
    pub total_frames: i64,
    /// Frame rate of the schedule.
    pub fps: Fps,
    /// Number of scenes.
    pub scene_count: usize,
    /// Nodes across all scenes.
    pub node_count: usize,
    /// Routed edges across all scenes.
    pub edge_count: usize,
    /// Per-scene frame windows.
    pub scenes: Vec<SceneWindow>,
}

impl CompositionResult {
    /// Sequences active at `frame`.
    pub fn sequences_at(&self, frame: i64) -> impl Iterator<Item = &AnimationSequence> {
        self.sequences.iter().filter(move |s| s.is_active_at(frame))
    }

    /// Sequences targeting `target_id`.
    pub fn sequences_for<'a>(
        &'a self,
        target_id: &'a str,
    ) -> impl Iterator<Item = &'a AnimationSequence> {
        self.sequences.iter().filter(move |s| s.target_id == target_id)
    }
}
