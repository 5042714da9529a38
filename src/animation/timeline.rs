use std::collections::BTreeMap;

use crate::{
    animation::sequence::{AnimationKind, AnimationSequence, CompositionResult},
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Outcome of [`validate_timeline`].
pub struct TimelineReport {
    /// True when there are no errors (warnings are allowed).
    pub valid: bool,
    /// Same-target, same-kind sequences that overlap in time.
    pub warnings: Vec<String>,
    /// Frame-range violations; the schedule must not be rendered.
    pub errors: Vec<String>,
}

impl TimelineReport {
    /// Turn a report with errors into [`MotionError::Timeline`].
    pub fn ensure_valid(&self) -> MotionResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(MotionError::timeline(format!(
            "{} frame-range violation(s): {}",
            self.errors.len(),
            self.errors.join("; ")
        )))
    }
}

/// Check a schedule for frame-range errors and overlapping sequences.
///
/// Errors: `start_frame < 0`, `end_frame > total_frames`, or `start_frame > end_frame`.
/// Warnings: within each `(target_id, kind)` group sorted by start frame, a sequence that
/// ends after the next one starts. Nothing is repaired.
pub fn validate_timeline(result: &CompositionResult) -> TimelineReport {
    let mut errors = Vec::new();
    for s in &result.sequences {
        if s.start_frame < 0 {
            errors.push(format!(
                "sequence '{}' starts before frame 0 (start {})",
                s.id, s.start_frame
            ));
        }
        if s.end_frame > result.total_frames {
            errors.push(format!(
                "sequence '{}' ends at frame {} past total {}",
                s.id, s.end_frame, result.total_frames
            ));
        }
        if s.start_frame > s.end_frame {
            errors.push(format!(
                "sequence '{}' has start {} after end {}",
                s.id, s.start_frame, s.end_frame
            ));
        }
    }

    let mut groups: BTreeMap<(&str, AnimationKind), Vec<&AnimationSequence>> = BTreeMap::new();
    for s in &result.sequences {
        groups
            .entry((s.target_id.as_str(), s.kind))
            .or_default()
            .push(s);
    }

    let mut warnings = Vec::new();
    for ((target, kind), mut seqs) in groups {
        seqs.sort_by(|a, b| {
            (a.start_frame, a.end_frame, &a.id).cmp(&(b.start_frame, b.end_frame, &b.id))
        });
        for pair in seqs.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if prev.end_frame > next.start_frame {
                warnings.push(format!(
                    "{kind:?} sequences '{}' and '{}' on '{target}' overlap ({} > {})",
                    prev.id, next.id, prev.end_frame, next.start_frame
                ));
            }
        }
    }

    if !errors.is_empty() {
        tracing::warn!(errors = errors.len(), "timeline has frame-range errors");
    }

    TimelineReport {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
