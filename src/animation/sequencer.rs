use crate::{
    animation::{
        sequence::{AnimationKind, AnimationSequence, CompositionResult, SceneWindow},
        timing::{FrameTimings, MAX_FRAMES, TimingConfig},
    },
    foundation::{
        core::Fps,
        error::{MotionError, MotionResult},
    },
    layout::model::LayoutResult,
};

/// Frame budget shared by every scene of one run.
#[derive(Clone, Copy, Debug)]
struct ScenePlan {
    total_frames: i64,
    frames_per_scene: i64,
    scene_count: usize,
    frames: FrameTimings,
}

impl ScenePlan {
    /// Window for scene `index` starting where the previous scene ended.
    ///
    /// The last scene ends at `total_frames` and absorbs the division remainder.
    fn window(&self, index: usize, start_frame: i64) -> SceneWindow {
        let end_frame = if index + 1 == self.scene_count {
            self.total_frames
        } else {
            start_frame + self.frames_per_scene
        };
        let content_start = if index > 0 {
            start_frame + self.frames.transition
        } else {
            start_frame
        };
        SceneWindow {
            index,
            start_frame,
            content_start,
            end_frame,
        }
    }
}

#[tracing::instrument(skip(scenes, timing), fields(scenes = scenes.len()))]
/// Turn laid-out scenes into a frame-accurate animation schedule.
///
/// Sequences may run past a scene's budget (or past `total_frames`) when a scene holds
/// more content than fits; nothing is clamped. Run [`crate::validate_timeline`] on the
/// result before rendering.
pub fn compose(
    scenes: &[LayoutResult],
    total_duration_ms: f64,
    fps: Fps,
    timing: &TimingConfig,
) -> MotionResult<CompositionResult> {
    fps.validate()?;
    timing.validate()?;
    if scenes.is_empty() {
        return Err(MotionError::validation("composition needs at least one scene"));
    }
    if !total_duration_ms.is_finite() || total_duration_ms < 0.0 {
        return Err(MotionError::validation(
            "total duration must be finite and >= 0",
        ));
    }

    let total_frames = fps.ms_to_frames(total_duration_ms);
    if total_frames > MAX_FRAMES {
        return Err(MotionError::validation(format!(
            "total duration spans {total_frames} frames, more than {MAX_FRAMES}"
        )));
    }
    let plan = ScenePlan {
        total_frames,
        frames_per_scene: total_frames / scenes.len() as i64,
        scene_count: scenes.len(),
        frames: timing.checked_frames(fps)?,
    };

    let (windows, sequences) = scenes.iter().enumerate().fold(
        (
            Vec::<SceneWindow>::with_capacity(scenes.len()),
            Vec::<AnimationSequence>::new(),
        ),
        |(mut windows, mut sequences), (index, scene)| {
            let start = windows.last().map_or(0, |w| w.end_frame);
            let window = plan.window(index, start);
            tracing::debug!(
                scene = index,
                start = window.start_frame,
                end = window.end_frame,
                "scheduling scene"
            );
            sequences.extend(schedule_scene(&window, scene, &plan.frames, timing));
            windows.push(window);
            (windows, sequences)
        },
    );

    Ok(CompositionResult {
        sequences,
        total_frames,
        fps,
        scene_count: scenes.len(),
        node_count: scenes.iter().map(|s| s.nodes.len()).sum(),
        edge_count: scenes.iter().map(|s| s.edges.len()).sum(),
        scenes: windows,
    })
}

/// All sequences for one scene, in emission order: transition, nodes, edges, highlights.
fn schedule_scene(
    window: &SceneWindow,
    scene: &LayoutResult,
    frames: &FrameTimings,
    timing: &TimingConfig,
) -> Vec<AnimationSequence> {
    let i = window.index;
    let mut out = Vec::with_capacity(1 + scene.nodes.len() + scene.edges.len());
    let seq = |id: String, kind: AnimationKind, target: &str, start: i64, len: i64| {
        AnimationSequence {
            id,
            scene: i,
            start_frame: start,
            end_frame: start.saturating_add(len.max(0)),
            kind,
            target_id: target.to_string(),
            properties: kind.default_properties(timing.ease),
        }
    };

    if i > 0 {
        out.push(seq(
            format!("s{i}-transition"),
            AnimationKind::SceneTransition,
            &format!("scene-{i}"),
            window.start_frame,
            frames.transition,
        ));
    }

    let content = window.content_start;
    for (k, node) in scene.nodes.iter().enumerate() {
        out.push(seq(
            format!("s{i}-appear-{}", node.id()),
            AnimationKind::NodeAppear,
            node.id(),
            offset(content, k, timing.node_stagger_frames),
            frames.node_appear,
        ));
    }

    let node_block = frames
        .node_appear
        .max(offset(0, scene.nodes.len(), timing.node_stagger_frames));
    let edge_start = content.saturating_add(node_block);
    for (k, edge) in scene.edges.iter().enumerate() {
        out.push(seq(
            format!("s{i}-edge-{}", edge.id()),
            AnimationKind::EdgeAppear,
            edge.id(),
            offset(edge_start, k, timing.edge_stagger_frames),
            frames.edge_appear,
        ));
    }

    let edge_block = if scene.edges.is_empty() {
        0
    } else {
        frames
            .edge_appear
            .max(offset(0, scene.edges.len(), timing.edge_stagger_frames))
    };
    let highlight_start = edge_start.saturating_add(edge_block);
    let highlighted: Vec<_> = scene
        .nodes
        .iter()
        .filter(|n| {
            n.node
                .importance
                .is_some_and(|v| v > timing.highlight_threshold)
        })
        .collect();
    if highlighted.is_empty() {
        return out;
    }

    let remaining = window.end_frame - highlight_start;
    let duration = timing
        .highlight_max_frames
        .min(remaining / highlighted.len() as i64);
    if duration <= 0 {
        tracing::debug!(
            scene = i,
            remaining,
            count = highlighted.len(),
            "no frame budget left for highlights"
        );
        return out;
    }
    for (k, node) in highlighted.iter().enumerate() {
        out.push(seq(
            format!("s{i}-highlight-{}", node.id()),
            AnimationKind::Highlight,
            node.id(),
            offset(highlight_start, k, timing.highlight_spread_frames),
            duration,
        ));
    }
    out
}

/// `base + index * step`, saturating at `i64::MAX`.
fn offset(base: i64, index: usize, step: i64) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    base.saturating_add(index.saturating_mul(step))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
