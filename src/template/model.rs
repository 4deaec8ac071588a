use crate::foundation::core::{Position, Vec3};
use serde::{Deserialize, Serialize};

/// Named cinematic template: a camera setup plus an ordered keyframe track.
///
/// Templates are plain data. They are checked once by [`Template::validate`] when registered and
/// are read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Registry key.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Camera placement before the first sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_camera: Option<CameraConfig>,
    /// Keyframes sorted by non-decreasing `progress`.
    pub keyframes: Vec<Keyframe>,
    /// Start playback as soon as the template is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_trigger: Option<bool>,
    /// Hand over to studio mode when playback completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_to_studio: Option<bool>,
    /// Playback may be restarted after completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replayable: Option<bool>,
    /// Status-line overlay shown under the scene.
    #[serde(
        default,
        rename = "footerHUD",
        skip_serializing_if = "Option::is_none"
    )]
    pub footer_hud: Option<FooterHud>,
}

/// Initial camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position.
    pub position: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Zoom factor (`> 0`).
    pub zoom: f64,
}

/// Footer overlay metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterHud {
    /// Lines of status text, top to bottom.
    #[serde(default)]
    pub status_lines: Vec<String>,
    /// Offer a replay control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_replay: Option<bool>,
    /// Offer a continue control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_continue: Option<bool>,
    /// Condensed layout for small surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,
}

/// One keyframe: a progress stamp and partial states for the animated entities.
///
/// Any group or field may be absent; the interpolator substitutes neutral defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized position on the template timeline, in `[0, 1]`.
    pub progress: f64,
    /// Sun state at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<CelestialState>,
    /// Moon state at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon: Option<CelestialState>,
    /// Card transform at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardState>,
    /// Backdrop at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentState>,
    /// Key light at this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<LightingState>,
}

impl Keyframe {
    /// Empty keyframe at `progress`; chain the `with_*` setters to fill groups.
    pub fn at(progress: f64) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }

    /// Set the sun group.
    pub fn with_sun(mut self, sun: CelestialState) -> Self {
        self.sun = Some(sun);
        self
    }

    /// Set the moon group.
    pub fn with_moon(mut self, moon: CelestialState) -> Self {
        self.moon = Some(moon);
        self
    }

    /// Set the card group.
    pub fn with_card(mut self, card: CardState) -> Self {
        self.card = Some(card);
        self
    }

    /// Set the environment group.
    pub fn with_environment(mut self, environment: EnvironmentState) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the lighting group.
    pub fn with_lighting(mut self, lighting: LightingState) -> Self {
        self.lighting = Some(lighting);
        self
    }
}

/// Partial state of a sun or moon.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialState {
    /// `[x, y]` or `[x, y, z]`; missing axes read as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Uniform scale (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Opacity (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Halo strength (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<f64>,
    /// CSS-style color string; never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial state of the card transform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Vertical offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Lean angle in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean: Option<f64>,
    /// Explicit 3-axis rotation; never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Pin the card against user interaction; never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
}

/// Partial state of the backdrop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    /// Background color string; never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Backdrop intensity (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

/// Partial state of the key light.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LightingState {
    /// Light intensity (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Light color string; never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
