//! cardmotion drives the cinematic reveal of a trading card.
//!
//! A [`Template`] is a named, ordered list of [`Keyframe`]s over five animated entities: the sun,
//! the moon, the card transform, the environment and the key light. A rendering surface resolves
//! a template by id through a [`TemplateLoader`] and then samples it once per rendered frame with
//! [`interpolate_frame`], applying the returned [`AnimationFrame`] to its scene.
//!
//! # Pipeline
//!
//! 1. **Register**: build a [`TemplateRegistry`] once at startup (built-ins and/or JSON catalogs).
//!    Templates are validated here; duplicate ids are rejected.
//! 2. **Load**: `LoadConfig -> Option<&Template>`. Unknown ids are `None`, never an error.
//! 3. **Sample**: `(&[Keyframe], progress) -> AnimationFrame`, pure and total.
//!
//! [`Playback`] layers wall-clock timing, easing and the template's behaviour flags on top of
//! step 3 for callers that do not already own an animation clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod template;

pub use animation::ease::Ease;
pub use animation::frame::{
    AnimationFrame, CardFrame, CelestialFrame, EnvironmentFrame, LightingFrame,
};
pub use animation::interpolate::interpolate_frame;
pub use animation::playback::{Completion, Playback, PlaybackOpts};
pub use foundation::core::{Lerp, Position, Vec3, lerp};
pub use foundation::error::{CardMotionError, CardMotionResult};
pub use template::builtin::{COSMIC_REVEAL, PREVIEW_PULSE, STUDIO_SPOTLIGHT};
pub use template::loader::{LoadConfig, PlaybackMode, TemplateLoader, load_template};
pub use template::model::{
    CameraConfig, CardState, CelestialState, EnvironmentState, FooterHud, Keyframe,
    LightingState, Template,
};
pub use template::registry::{TemplateRegistry, TemplateRegistryBuilder};
