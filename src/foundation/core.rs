use serde::{Deserialize, Serialize};

/// Linear blend `a + (b - a) * t`.
///
/// `t` is not clamped; callers pass factors already bounded by their keyframe pair. `t == 0`
/// returns `a` and `t == 1` returns `b` exactly, even when `b - a` overflows.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let d = b - a;
    if d.is_finite() {
        a + d * t
    } else {
        a * (1.0 - t) + b * t
    }
}

/// Interpolation contract for numeric frame values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
    }
}

/// Three-component vector used for camera placement, celestial positions and card rotation.
///
/// Serialized as `[x, y, z]`; also accepts `{ "x": .., "y": .., "z": .. }` on input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// All-zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Return `true` when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Serialize for Vec3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.x, self.y, self.z].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vec3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 3]),
            Obj { x: f64, y: f64, z: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr(arr) => Ok(arr.into()),
            Repr::Obj { x, y, z } => Ok(Self { x, y, z }),
        }
    }
}

/// Keyframe position with an optional depth component.
///
/// Celestial bodies are usually authored on a 2D backdrop (`[x, y]`); a missing `z` reads as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Optional depth coordinate.
    pub z: Option<f64>,
}

impl Position {
    /// 2D position (`z` absent).
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// 3D position.
    pub const fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Resolve into a full vector, defaulting depth to 0.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z.unwrap_or(0.0))
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.z {
            Some(z) => [self.x, self.y, z].serialize(serializer),
            None => [self.x, self.y].serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Xyz([f64; 3]),
            Xy([f64; 2]),
            Obj {
                x: f64,
                y: f64,
                #[serde(default)]
                z: Option<f64>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Xyz([x, y, z]) => Ok(Self::xyz(x, y, z)),
            Repr::Xy([x, y]) => Ok(Self::xy(x, y)),
            Repr::Obj { x, y, z } => Ok(Self { x, y, z }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
