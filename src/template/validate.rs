use crate::foundation::core::{Position, Vec3};
use crate::foundation::error::{CardMotionError, CardMotionResult};
use crate::template::model::{CelestialState, Keyframe, Template};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
struct Issue {
    path: Vec<PathElem>,
    message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.path {
            match *p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        write!(f, ": {}", self.message)
    }
}

#[derive(Default)]
struct Checker {
    path: Vec<PathElem>,
    issues: Vec<Issue>,
}

impl Checker {
    fn push(&mut self, message: impl Into<String>) {
        self.issues.push(Issue {
            path: self.path.clone(),
            message: message.into(),
        });
    }

    fn scoped(&mut self, elem: PathElem, f: impl FnOnce(&mut Self)) {
        self.path.push(elem);
        f(self);
        self.path.pop();
    }

    fn finite(&mut self, field: &'static str, v: Option<f64>) {
        if let Some(v) = v
            && !v.is_finite()
        {
            self.scoped(PathElem::Field(field), |c| c.push("must be finite"));
        }
    }

    fn finite_vec3(&mut self, field: &'static str, v: Option<Vec3>) {
        if let Some(v) = v
            && !v.is_finite()
        {
            self.scoped(PathElem::Field(field), |c| c.push("components must be finite"));
        }
    }

    fn position(&mut self, v: Option<Position>) {
        if let Some(p) = v {
            let z_ok = p.z.is_none_or(f64::is_finite);
            if !(p.x.is_finite() && p.y.is_finite() && z_ok) {
                self.scoped(PathElem::Field("position"), |c| {
                    c.push("components must be finite")
                });
            }
        }
    }
}

impl Template {
    /// Check the static invariants the interpolator relies on.
    ///
    /// Rejects an empty id, keyframe progress that is non-finite, outside `[0, 1]` or
    /// decreasing, non-finite numeric fields and a non-positive camera zoom. All problems are
    /// reported together, one `$.path: message` per line.
    pub fn validate(&self) -> CardMotionResult<()> {
        let mut c = Checker::default();

        if self.id.trim().is_empty() {
            c.scoped(PathElem::Field("id"), |c| c.push("must be non-empty"));
        }

        if let Some(cam) = &self.initial_camera {
            c.scoped(PathElem::Field("initialCamera"), |c| {
                c.finite_vec3("position", Some(cam.position));
                c.finite_vec3("target", Some(cam.target));
                if !(cam.zoom.is_finite() && cam.zoom > 0.0) {
                    c.scoped(PathElem::Field("zoom"), |c| c.push("must be > 0"));
                }
            });
        }

        c.scoped(PathElem::Field("keyframes"), |c| {
            let mut prev: Option<f64> = None;
            for (i, kf) in self.keyframes.iter().enumerate() {
                c.scoped(PathElem::Index(i), |c| {
                    check_keyframe(c, kf, prev);
                });
                if kf.progress.is_finite() {
                    prev = Some(kf.progress);
                }
            }
        });

        if c.issues.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = c.issues.iter().map(ToString::to_string).collect();
        Err(CardMotionError::validation(format!(
            "template '{}' is invalid:\n{}",
            self.id,
            lines.join("\n")
        )))
    }
}

fn check_keyframe(c: &mut Checker, kf: &Keyframe, prev: Option<f64>) {
    c.scoped(PathElem::Field("progress"), |c| {
        let p = kf.progress;
        if !p.is_finite() {
            c.push("must be finite");
        } else if !(0.0..=1.0).contains(&p) {
            c.push("must be within [0, 1]");
        } else if let Some(prev) = prev
            && p < prev
        {
            c.push(format!("must be >= previous keyframe progress ({prev})"));
        }
    });

    if let Some(sun) = &kf.sun {
        c.scoped(PathElem::Field("sun"), |c| check_celestial(c, sun));
    }
    if let Some(moon) = &kf.moon {
        c.scoped(PathElem::Field("moon"), |c| check_celestial(c, moon));
    }
    if let Some(card) = &kf.card {
        c.scoped(PathElem::Field("card"), |c| {
            c.finite("y", card.y);
            c.finite("lean", card.lean);
            c.finite_vec3("rotation", card.rotation);
        });
    }
    if let Some(env) = &kf.environment {
        c.scoped(PathElem::Field("environment"), |c| {
            c.finite("intensity", env.intensity)
        });
    }
    if let Some(light) = &kf.lighting {
        c.scoped(PathElem::Field("lighting"), |c| {
            c.finite("intensity", light.intensity)
        });
    }
}

fn check_celestial(c: &mut Checker, s: &CelestialState) {
    c.position(s.position);
    c.finite("scale", s.scale);
    c.finite("opacity", s.opacity);
    c.finite("glowIntensity", s.glow_intensity);
}

#[cfg(test)]
#[path = "../../tests/unit/template/validate.rs"]
mod tests;
