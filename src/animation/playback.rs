use crate::animation::ease::Ease;
use crate::animation::frame::AnimationFrame;
use crate::animation::interpolate::interpolate_frame;
use crate::foundation::error::{CardMotionError, CardMotionResult};
use crate::template::loader::LoadConfig;
use crate::template::model::Template;

/// Timing options for [`Playback`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackOpts {
    /// Wall-clock length of one pass over the template, in seconds (`> 0`).
    pub duration_secs: f64,
    /// Curve from normalized time to template progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            duration_secs: 4.0,
            ease: Ease::Linear,
        }
    }
}

/// What the surface should do once playback reaches the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Keep showing the final frame.
    Hold,
    /// Switch to studio mode.
    TransitionToStudio,
}

/// Maps elapsed time onto a template's progress.
///
/// Holds no clock of its own; the caller passes elapsed seconds on every query.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'t> {
    template: &'t Template,
    opts: PlaybackOpts,
}

impl<'t> Playback<'t> {
    /// Bind `template` to timing options. Fails on a non-positive or non-finite duration.
    pub fn new(template: &'t Template, opts: PlaybackOpts) -> CardMotionResult<Self> {
        if !(opts.duration_secs.is_finite() && opts.duration_secs > 0.0) {
            return Err(CardMotionError::validation(
                "playback duration_secs must be finite and > 0",
            ));
        }
        Ok(Self { template, opts })
    }

    /// Template being played.
    pub fn template(&self) -> &'t Template {
        self.template
    }

    /// Timing options.
    pub fn opts(&self) -> PlaybackOpts {
        self.opts
    }

    /// Eased template progress after `elapsed_secs`, clamped to `[0, 1]`.
    pub fn progress_at(&self, elapsed_secs: f64) -> f64 {
        if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return 0.0;
        }
        self.opts.ease.apply(elapsed_secs / self.opts.duration_secs)
    }

    fn sample_normalized(&self, t: f64) -> AnimationFrame {
        interpolate_frame(&self.template.keyframes, self.opts.ease.apply(t))
    }

    /// Frame shown after `elapsed_secs`.
    pub fn sample(&self, elapsed_secs: f64) -> AnimationFrame {
        interpolate_frame(&self.template.keyframes, self.progress_at(elapsed_secs))
    }

    /// `true` once `elapsed_secs` reaches the duration.
    pub fn is_complete(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.opts.duration_secs
    }

    /// Action after the last frame, from the template's `transitionToStudio` flag.
    pub fn completion(&self) -> Completion {
        if self.template.transition_to_studio.unwrap_or(false) {
            Completion::TransitionToStudio
        } else {
            Completion::Hold
        }
    }

    /// Template's `replayable` flag; absent reads as `false`.
    pub fn can_replay(&self) -> bool {
        self.template.replayable.unwrap_or(false)
    }

    /// Whether playback starts on load: the request's trigger overrides the template flag.
    pub fn starts_automatically(&self, config: &LoadConfig) -> bool {
        config
            .trigger_on_load
            .or(self.template.auto_trigger)
            .unwrap_or(false)
    }

    /// `count` frames at evenly spaced times from start to end inclusive.
    pub fn frames(&self, count: usize) -> impl Iterator<Item = AnimationFrame> + '_ {
        let last = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| self.sample_normalized(i as f64 / last))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
