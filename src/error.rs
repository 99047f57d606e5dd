//! Construction-time configuration errors
//!
//! Everything that can be wrong about an engine is caught here, before the first
//! tick. Nothing inside a tick returns an error.

/// Ways that engine settings or objects can be rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Mass must be finite and strictly positive; it divides every tick.
    #[error("object mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    /// A hitbox had a zero, negative or non-finite dimension.
    #[error("hitbox dimensions must be positive and finite, got {width}x{height}")]
    InvalidHitbox { width: f32, height: f32 },
    /// An object needs at least one hitbox to interact with walls or others.
    #[error("object has no hitboxes")]
    NoHitboxes,
    /// Hitbox slot replacement outside the object's hitbox list.
    #[error("hitbox slot {index} out of range (object has {len})")]
    HitboxIndex { index: usize, len: usize },
    #[error("rink dimensions must be positive and finite, got {width}x{height}")]
    InvalidRink { width: f32, height: f32 },
    #[error("friction coefficient must be in [0, 1), got {0}")]
    InvalidFriction(f32),
    #[error("movement coefficient must be positive, got {0}")]
    InvalidMovement(f32),
    #[error("max velocity must be positive, got {0}")]
    InvalidMaxVelocity(f32),
    #[error("total time must be non-negative, got {0}")]
    InvalidTotalTime(f32),
    /// More objects than the preallocated pair table can hold.
    #[error("too many objects: {count} (limit {limit})")]
    TooManyObjects { count: usize, limit: usize },
    /// Settings JSON could not be parsed.
    #[error("invalid settings json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
