/// Convenience result type used across cardmotion.
pub type CardMotionResult<T> = Result<T, CardMotionError>;

/// Top-level error taxonomy for template construction and catalog loading.
///
/// Sampling never produces one of these: lookups return `Option` and interpolation is total.
#[derive(thiserror::Error, Debug)]
pub enum CardMotionError {
    /// Invalid template or keyframe data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Conflicting or malformed registry contents (for example a duplicate template id).
    #[error("registry error: {0}")]
    Registry(String),

    /// Errors when serializing or deserializing templates and frames.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardMotionError {
    /// Build a [`CardMotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardMotionError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`CardMotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
