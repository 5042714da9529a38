use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate (`num / den` frames per second).
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero components.
    pub fn new(num: u32, den: u32) -> MotionResult<Self> {
        if den == 0 {
            return Err(MotionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert milliseconds to a frame count, rounding half away from zero.
    pub fn ms_to_frames(self, ms: f64) -> i64 {
        (ms * f64::from(self.num) / (1000.0 * f64::from(self.den))).round() as i64
    }

    /// Convert a frame count back to milliseconds.
    pub fn frames_to_ms(self, frames: i64) -> f64 {
        (frames as f64) * 1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    pub(crate) fn validate(self) -> MotionResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Drawing area in canvas units.
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Canvas {
    /// Full canvas rectangle anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    pub(crate) fn validate(self) -> MotionResult<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(MotionError::validation("canvas width/height must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MotionError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
