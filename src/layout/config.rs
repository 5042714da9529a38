use crate::foundation::{
    core::Canvas,
    error::{MotionError, MotionResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Placement constants shared by every archetype positioner.
///
/// All values are in canvas units. Missing JSON fields take the [`Default`] value.
pub struct LayoutConfig {
    /// Canvas the scene is laid out on.
    pub canvas: Canvas,
    /// Node box width.
    pub node_width: f64,
    /// Node box height.
    pub node_height: f64,
    /// Spacing between neighbouring boxes (flow/timeline/fallback grid).
    pub gap: f64,
    /// Left margin for row layouts and outer inset for the fallback grid.
    pub margin: f64,
    /// Top edge of the tree root box.
    pub tree_top: f64,
    /// Vertical distance between the root row and the child row.
    pub tree_level_gap: f64,
    /// Preferred horizontal pitch between tree children.
    pub tree_child_gap: f64,
    /// Vertical offset above/below the timeline axis.
    pub timeline_offset: f64,
    /// Preferred radius of the cycle circle (box centers lie on it).
    pub cycle_radius: f64,
    /// Horizontal pitch of the two matrix columns.
    pub matrix_cell_width: f64,
    /// Vertical pitch of matrix rows.
    pub matrix_cell_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            node_width: 120.0,
            node_height: 60.0,
            gap: 80.0,
            margin: 40.0,
            tree_top: 80.0,
            tree_level_gap: 160.0,
            tree_child_gap: 200.0,
            timeline_offset: 80.0,
            cycle_radius: 300.0,
            matrix_cell_width: 400.0,
            matrix_cell_height: 200.0,
        }
    }
}

impl LayoutConfig {
    /// Default constants on a custom canvas.
    pub fn with_canvas(width: f64, height: f64) -> Self {
        Self {
            canvas: Canvas { width, height },
            ..Self::default()
        }
    }

    /// Reject non-finite values, non-positive box sizes and negative spacings.
    pub fn validate(&self) -> MotionResult<()> {
        self.canvas.validate()?;
        for (name, v) in [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(MotionError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("gap", self.gap),
            ("margin", self.margin),
            ("tree_top", self.tree_top),
            ("tree_level_gap", self.tree_level_gap),
            ("tree_child_gap", self.tree_child_gap),
            ("timeline_offset", self.timeline_offset),
            ("cycle_radius", self.cycle_radius),
            ("matrix_cell_width", self.matrix_cell_width),
            ("matrix_cell_height", self.matrix_cell_height),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MotionError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
