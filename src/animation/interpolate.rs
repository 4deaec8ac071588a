use crate::animation::frame::{
    AnimationFrame, CardFrame, CelestialFrame, EnvironmentFrame, LightingFrame,
};
use crate::foundation::core::{Lerp, Vec3, lerp};
use crate::template::model::{
    CardState, CelestialState, EnvironmentState, Keyframe, LightingState,
};

/// Neutral value for positions, offsets and angles.
const NEUTRAL_OFFSET: f64 = 0.0;
/// Neutral value for scale, opacity and intensities.
const NEUTRAL_GAIN: f64 = 1.0;

/// Sample a keyframe track at `progress`.
///
/// - Empty track: a frame with no entity data.
/// - At or before the first key (or a single key): the first key, defaults applied.
/// - At or after the last key: the last key, defaults applied. No extrapolation or wrap.
/// - Otherwise the first adjacent pair with `lower <= progress < upper` found by a linear scan is
///   blended: numeric fields linearly, everything else taken from the earlier key unless it is
///   absent there.
///
/// Never panics. Ordering is not checked here; templates are validated on registration.
pub fn interpolate_frame(keyframes: &[Keyframe], progress: f64) -> AnimationFrame {
    let (Some(first), Some(last)) = (keyframes.first(), keyframes.last()) else {
        return AnimationFrame::empty(progress);
    };

    if keyframes.len() == 1 || progress.is_nan() || progress <= first.progress {
        return hold(first, progress);
    }
    if progress >= last.progress {
        return hold(last, progress);
    }

    let Some(pair) = keyframes
        .windows(2)
        .find(|w| w[0].progress <= progress && progress < w[1].progress)
    else {
        // Unsorted track with no bracketing pair.
        return hold(last, progress);
    };
    let (lower, upper) = (&pair[0], &pair[1]);

    let span = upper.progress - lower.progress;
    let t = if span > 0.0 {
        (progress - lower.progress) / span
    } else {
        0.0
    };
    blend(lower, upper, t, progress)
}

/// Resolve a single keyframe; blending a key with itself at `t = 0` applies the defaults.
fn hold(kf: &Keyframe, progress: f64) -> AnimationFrame {
    blend(kf, kf, 0.0, progress)
}

fn blend(a: &Keyframe, b: &Keyframe, t: f64, progress: f64) -> AnimationFrame {
    AnimationFrame {
        progress,
        sun: group(&a.sun, &b.sun, |a, b| celestial(a, b, t)),
        moon: group(&a.moon, &b.moon, |a, b| celestial(a, b, t)),
        card: group(&a.card, &b.card, |a, b| card(a, b, t)),
        environment: group(&a.environment, &b.environment, |a, b| environment(a, b, t)),
        lighting: group(&a.lighting, &b.lighting, |a, b| lighting(a, b, t)),
    }
}

/// Blend a group present on at least one side; the missing side reads as all-defaults.
fn group<S, F>(a: &Option<S>, b: &Option<S>, f: impl FnOnce(&S, &S) -> F) -> Option<F>
where
    S: Default,
{
    match (a, b) {
        (None, None) => None,
        (Some(a), Some(b)) => Some(f(a, b)),
        (Some(a), None) => Some(f(a, &S::default())),
        (None, Some(b)) => Some(f(&S::default(), b)),
    }
}

fn num(a: Option<f64>, b: Option<f64>, neutral: f64, t: f64) -> f64 {
    lerp(a.unwrap_or(neutral), b.unwrap_or(neutral), t)
}

/// Earlier value wins; the later one only fills a gap.
fn earlier<T: Clone>(a: &Option<T>, b: &Option<T>) -> Option<T> {
    a.as_ref().or(b.as_ref()).cloned()
}

fn celestial(a: &CelestialState, b: &CelestialState, t: f64) -> CelestialFrame {
    let pa = a.position.map_or(Vec3::ZERO, |p| p.to_vec3());
    let pb = b.position.map_or(Vec3::ZERO, |p| p.to_vec3());
    CelestialFrame {
        position: Vec3::lerp(&pa, &pb, t),
        scale: num(a.scale, b.scale, NEUTRAL_GAIN, t),
        opacity: num(a.opacity, b.opacity, NEUTRAL_GAIN, t),
        glow_intensity: num(a.glow_intensity, b.glow_intensity, NEUTRAL_GAIN, t),
        color: earlier(&a.color, &b.color),
    }
}

fn card(a: &CardState, b: &CardState, t: f64) -> CardFrame {
    CardFrame {
        y: num(a.y, b.y, NEUTRAL_OFFSET, t),
        lean: num(a.lean, b.lean, NEUTRAL_OFFSET, t),
        rotation: earlier(&a.rotation, &b.rotation),
        lock: earlier(&a.lock, &b.lock),
    }
}

fn environment(a: &EnvironmentState, b: &EnvironmentState, t: f64) -> EnvironmentFrame {
    EnvironmentFrame {
        background: earlier(&a.background, &b.background),
        intensity: num(a.intensity, b.intensity, NEUTRAL_GAIN, t),
    }
}

fn lighting(a: &LightingState, b: &LightingState, t: f64) -> LightingFrame {
    LightingFrame {
        intensity: num(a.intensity, b.intensity, NEUTRAL_GAIN, t),
        color: earlier(&a.color, &b.color),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
