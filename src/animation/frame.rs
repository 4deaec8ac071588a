use crate::foundation::core::Vec3;
use serde::{Deserialize, Serialize};

/// Blended scene state for one progress sample.
///
/// A group is `Some` when either bounding keyframe defines it. `None` means "leave the entity as
/// it is", not "hide it".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// The queried progress value.
    pub progress: f64,
    /// Resolved sun.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<CelestialFrame>,
    /// Resolved moon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon: Option<CelestialFrame>,
    /// Resolved card transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardFrame>,
    /// Resolved backdrop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentFrame>,
    /// Resolved key light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<LightingFrame>,
}

impl AnimationFrame {
    /// Frame with no entity data.
    pub fn empty(progress: f64) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }

    /// Return `true` when no entity group is present.
    pub fn is_empty(&self) -> bool {
        self.sun.is_none()
            && self.moon.is_none()
            && self.card.is_none()
            && self.environment.is_none()
            && self.lighting.is_none()
    }
}

/// Resolved sun or moon state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialFrame {
    /// World position; a 2D key position gets `z = 0`.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]` for well-formed keys.
    pub opacity: f64,
    /// Halo strength.
    pub glow_intensity: f64,
    /// Color of the earlier key, or the later one when the earlier has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Resolved card transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardFrame {
    /// Vertical offset.
    pub y: f64,
    /// Lean angle in degrees.
    pub lean: f64,
    /// Rotation taken from the earlier key when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Interaction lock; earlier key wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
}

/// Resolved backdrop state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentFrame {
    /// Background color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Backdrop intensity.
    pub intensity: f64,
}

/// Resolved key light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightingFrame {
    /// Light intensity.
    pub intensity: f64,
    /// Light color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
