#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Easing curve attached to property transitions.
///
/// The sequencer only carries the curve through; renderers sample it with [`Ease::apply`].
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Parse a curve name such as `ease-in-out`, `easeInOut` or `ease_in_out`.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "linear" => Some(Self::Linear),
            "easein" | "in" => Some(Self::EaseIn),
            "easeout" | "out" => Some(Self::EaseOut),
            "easeinout" | "inout" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
