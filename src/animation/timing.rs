use crate::{
    animation::ease::Ease,
    foundation::{
        core::Fps,
        error::{MotionError, MotionResult},
    },
};

/// Upper bound on any frame count or frame offset the sequencer accepts.
pub const MAX_FRAMES: i64 = 1 << 40;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Timing constants for the sequencer.
///
/// Durations are milliseconds (converted with the run's frame rate); staggers are frames.
pub struct TimingConfig {
    /// Scene transition window.
    pub transition_ms: f64,
    /// Duration of each node appearance.
    pub node_appear_ms: f64,
    /// Duration of each edge appearance.
    pub edge_appear_ms: f64,
    /// Frame offset between consecutive node appearances.
    pub node_stagger_frames: i64,
    /// Frame offset between consecutive edge appearances.
    pub edge_stagger_frames: i64,
    /// Nodes with importance strictly above this are highlighted.
    pub highlight_threshold: f64,
    /// Upper bound on a single highlight.
    pub highlight_max_frames: i64,
    /// Frame offset between consecutive highlights.
    pub highlight_spread_frames: i64,
    /// Curve attached to every emitted property transition.
    pub ease: Ease,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 800.0,
            node_appear_ms: 500.0,
            edge_appear_ms: 400.0,
            node_stagger_frames: 5,
            edge_stagger_frames: 3,
            highlight_threshold: 0.7,
            highlight_max_frames: 60,
            highlight_spread_frames: 30,
            ease: Ease::EaseInOut,
        }
    }
}

impl TimingConfig {
    /// Reject negative or non-finite constants and thresholds outside `[0, 1]`.
    pub fn validate(&self) -> MotionResult<()> {
        for (name, v) in [
            ("transition_ms", self.transition_ms),
            ("node_appear_ms", self.node_appear_ms),
            ("edge_appear_ms", self.edge_appear_ms),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MotionError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, v) in [
            ("node_stagger_frames", self.node_stagger_frames),
            ("edge_stagger_frames", self.edge_stagger_frames),
            ("highlight_max_frames", self.highlight_max_frames),
            ("highlight_spread_frames", self.highlight_spread_frames),
        ] {
            if !(0..=MAX_FRAMES).contains(&v) {
                return Err(MotionError::validation(format!(
                    "{name} must be in [0, {MAX_FRAMES}]"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.highlight_threshold) {
            return Err(MotionError::validation(
                "highlight_threshold must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Millisecond constants converted to frames at `fps`.
    pub fn frames(&self, fps: Fps) -> FrameTimings {
        FrameTimings {
            transition: fps.ms_to_frames(self.transition_ms),
            node_appear: fps.ms_to_frames(self.node_appear_ms),
            edge_appear: fps.ms_to_frames(self.edge_appear_ms),
        }
    }

    /// Like [`TimingConfig::frames`], rejecting durations longer than [`MAX_FRAMES`].
    pub(crate) fn checked_frames(&self, fps: Fps) -> MotionResult<FrameTimings> {
        let frames = self.frames(fps);
        for (name, v) in [
            ("transition_ms", frames.transition),
            ("node_appear_ms", frames.node_appear),
            ("edge_appear_ms", frames.edge_appear),
        ] {
            if v > MAX_FRAMES {
                return Err(MotionError::validation(format!(
                    "{name} spans {v} frames, more than {MAX_FRAMES}"
                )));
            }
        }
        Ok(frames)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// [`TimingConfig`] durations resolved to whole frames.
pub struct FrameTimings {
    /// Scene transition window.
    pub transition: i64,
    /// Node appearance duration.
    pub node_appear: i64,
    /// Edge appearance duration.
    pub edge_appear: i64,
}
