use crate::{
    animation::{
        sequence::CompositionResult,
        sequencer::compose,
        timeline::{TimelineReport, validate_timeline},
        timing::TimingConfig,
    },
    diagram::model::{DiagramGraph, SceneInput},
    foundation::{
        core::Fps,
        error::{MotionError, MotionResult},
    },
    layout::{config::LayoutConfig, engine::layout_scenes, model::LayoutResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Caller-held configuration for one composition run.
pub struct ComposerConfig {
    /// Placement constants and canvas.
    pub layout: LayoutConfig,
    /// Sequencer timing constants.
    pub timing: TimingConfig,
    /// Output frame rate.
    pub fps: Fps,
    /// Length of the whole run in milliseconds.
    pub total_duration_ms: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            fps: Fps::default(),
            total_duration_ms: 10_000.0,
        }
    }
}

impl ComposerConfig {
    /// Parse a JSON configuration document; missing fields take defaults.
    pub fn from_json(json: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate every section.
    pub fn validate(&self) -> MotionResult<()> {
        self.layout.validate()?;
        self.timing.validate()?;
        self.fps.validate()?;
        if !self.total_duration_ms.is_finite() || self.total_duration_ms < 0.0 {
            return Err(MotionError::validation(
                "total_duration_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Everything handed to the renderer for one run.
pub struct DiagramComposition {
    /// One layout per scene, in scene order.
    pub layouts: Vec<LayoutResult>,
    /// Animation schedule across all scenes.
    pub composition: CompositionResult,
    /// Timeline validation outcome (errors are always empty here).
    pub report: TimelineReport,
}

#[tracing::instrument(skip(inputs, config), fields(scenes = inputs.len()))]
/// Lay out every scene, sequence the run and validate the timeline.
///
/// Fails with [`MotionError::Timeline`] when the schedule violates frame ranges; the
/// caller decides whether to retry with other timing constants.
pub fn compose_diagrams(
    inputs: &[SceneInput],
    config: &ComposerConfig,
) -> MotionResult<DiagramComposition> {
    config.validate()?;
    let graphs: Vec<DiagramGraph> = inputs.iter().map(|s| s.graph().clone()).collect();
    let layouts = layout_scenes(&graphs, &config.layout)?;
    let composition = compose(
        &layouts,
        config.total_duration_ms,
        config.fps,
        &config.timing,
    )?;

    let report = validate_timeline(&composition);
    report.ensure_valid()?;
    if !report.warnings.is_empty() {
        tracing::debug!(
            warnings = report.warnings.len(),
            "timeline has overlapping sequences"
        );
    }

    Ok(DiagramComposition {
        layouts,
        composition,
        report,
    })
}

/// Parse a JSON array of [`SceneInput`] and run [`compose_diagrams`].
pub fn compose_from_json(json: &str, config: &ComposerConfig) -> MotionResult<DiagramComposition> {
    let inputs: Vec<SceneInput> = serde_json::from_str(json)?;
    compose_diagrams(&inputs, config)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
