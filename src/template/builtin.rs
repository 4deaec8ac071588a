//! Templates shipped with the crate.

use crate::foundation::core::{Position, Vec3};
use crate::template::model::{
    CameraConfig, CardState, CelestialState, EnvironmentState, FooterHud, Keyframe, LightingState,
    Template,
};

/// Id of the eclipse reveal sequence.
pub const COSMIC_REVEAL: &str = "cosmic-reveal";
/// Id of the studio turntable.
pub const STUDIO_SPOTLIGHT: &str = "studio-spotlight";
/// Id of the inline preview loop.
pub const PREVIEW_PULSE: &str = "preview-pulse";

pub(crate) fn templates() -> Vec<Template> {
    vec![cosmic_reveal(), studio_spotlight(), preview_pulse()]
}

fn celestial(pos: Position, scale: f64, opacity: f64, glow: f64, color: &str) -> CelestialState {
    CelestialState {
        position: Some(pos),
        scale: Some(scale),
        opacity: Some(opacity),
        glow_intensity: Some(glow),
        color: Some(color.to_owned()),
    }
}

fn card(y: f64, lean: f64) -> CardState {
    CardState {
        y: Some(y),
        lean: Some(lean),
        rotation: None,
        lock: None,
    }
}

fn environment(background: &str, intensity: f64) -> EnvironmentState {
    EnvironmentState {
        background: Some(background.to_owned()),
        intensity: Some(intensity),
    }
}

fn lighting(intensity: f64, color: &str) -> LightingState {
    LightingState {
        intensity: Some(intensity),
        color: Some(color.to_owned()),
    }
}

/// Sun sinks behind the moon while the card rises and leans back into frame.
fn cosmic_reveal() -> Template {
    Template {
        id: COSMIC_REVEAL.to_owned(),
        name: "Cosmic Reveal".to_owned(),
        initial_camera: Some(CameraConfig {
            position: Vec3::new(0.0, 1.5, 8.0),
            target: Vec3::new(0.0, 0.5, 0.0),
            zoom: 1.0,
        }),
        keyframes: vec![
            Keyframe::at(0.0)
                .with_sun(celestial(Position::xy(0.0, 3.0), 1.0, 1.0, 0.6, "#FFA500"))
                .with_moon(celestial(Position::xy(-6.0, 3.0), 0.9, 0.0, 0.0, "#C0C8FF"))
                .with_card(card(0.0, 0.0))
                .with_environment(environment("#1A0B2E", 0.3))
                .with_lighting(lighting(0.4, "#FFD9A0")),
            Keyframe::at(0.25)
                .with_sun(celestial(Position::xy(0.0, 2.0), 1.1, 1.0, 1.0, "#FFA500"))
                .with_moon(celestial(Position::xy(-3.0, 2.5), 0.95, 0.6, 0.2, "#C0C8FF"))
                .with_card(card(1.0, 20.0))
                .with_environment(environment("#1A0B2E", 0.5))
                .with_lighting(lighting(0.7, "#FFD9A0")),
            Keyframe::at(0.5)
                .with_sun(celestial(Position::xy(0.0, 1.5), 1.2, 1.0, 1.8, "#FF7A00"))
                .with_moon(celestial(Position::xy(0.0, 1.5), 1.0, 1.0, 0.8, "#E0E4FF"))
                .with_card(card(1.5, 45.0))
                .with_environment(environment("#05020C", 0.15))
                .with_lighting(lighting(0.25, "#9FB4FF")),
            Keyframe::at(0.75)
                .with_sun(celestial(Position::xy(0.0, 1.0), 1.2, 0.6, 2.4, "#FF7A00"))
                .with_moon(celestial(Position::xy(2.0, 1.8), 1.0, 0.8, 0.4, "#E0E4FF"))
                .with_card(card(1.2, 65.0))
                .with_environment(environment("#0B1030", 0.6))
                .with_lighting(lighting(0.9, "#FFFFFF")),
            Keyframe::at(1.0)
                .with_sun(celestial(Position::xy(0.0, 0.5), 1.0, 0.3, 1.0, "#FFFFFF"))
                .with_moon(celestial(Position::xy(5.0, 2.5), 0.9, 0.0, 0.0, "#E0E4FF"))
                .with_card(CardState {
                    lock: Some(true),
                    ..card(1.0, 80.0)
                })
                .with_environment(environment("#101830", 1.0))
                .with_lighting(lighting(1.2, "#FFFFFF")),
        ],
        auto_trigger: Some(true),
        transition_to_studio: Some(true),
        replayable: Some(true),
        footer_hud: Some(FooterHud {
            status_lines: vec![
                "ALIGNING ORBITS".to_owned(),
                "TOTALITY".to_owned(),
                "CARD MINTED".to_owned(),
            ],
            show_replay: Some(true),
            show_continue: Some(true),
            compact: None,
        }),
    }
}

fn studio_spotlight() -> Template {
    Template {
        id: STUDIO_SPOTLIGHT.to_owned(),
        name: "Studio Spotlight".to_owned(),
        initial_camera: Some(CameraConfig {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            zoom: 1.2,
        }),
        keyframes: vec![
            Keyframe::at(0.0)
                .with_card(CardState {
                    rotation: Some(Vec3::ZERO),
                    ..card(0.0, 0.0)
                })
                .with_environment(environment("#141414", 0.8))
                .with_lighting(lighting(1.0, "#FFFFFF")),
            Keyframe::at(0.5)
                .with_card(card(0.2, -12.0))
                .with_lighting(lighting(1.4, "#FFFFFF")),
            Keyframe::at(1.0)
                .with_card(card(0.0, 0.0))
                .with_environment(environment("#141414", 0.8))
                .with_lighting(lighting(1.0, "#FFFFFF")),
        ],
        auto_trigger: Some(false),
        transition_to_studio: None,
        replayable: Some(true),
        footer_hud: None,
    }
}

fn preview_pulse() -> Template {
    Template {
        id: PREVIEW_PULSE.to_owned(),
        name: "Preview Pulse".to_owned(),
        initial_camera: None,
        keyframes: vec![
            Keyframe::at(0.0).with_lighting(lighting(0.8, "#FFFFFF")),
            Keyframe::at(0.5).with_lighting(lighting(1.3, "#FFFFFF")),
            Keyframe::at(1.0).with_lighting(lighting(0.8, "#FFFFFF")),
        ],
        auto_trigger: Some(true),
        transition_to_studio: None,
        replayable: None,
        footer_hud: Some(FooterHud {
            status_lines: vec!["PREVIEW".to_owned()],
            compact: Some(true),
            ..FooterHud::default()
        }),
    }
}
