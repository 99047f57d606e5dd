//! Engine settings
//!
//! Fixed for the lifetime of an engine. Loaded from JSON or taken from defaults
//! that match the standard rink tuning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_OBJECTS;
use crate::error::ConfigError;

/// Physics tuning for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fraction of velocity removed every tick (exponential decay)
    pub friction_coefficient: f32,
    /// Rink width and height (pixels)
    pub rink_dimensions: Vec2,
    /// Force magnitude applied per active input axis
    pub movement_coefficient: f32,
    /// Speed above which input acceleration and friction stop applying
    pub max_velocity: f32,
    /// Carried for the rendering layer; wall bounces use the wall-mass model
    pub bounce_coefficient: f32,
    /// Game length (seconds), for countdown displays
    pub total_time: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            friction_coefficient: 0.003,
            rink_dimensions: Vec2::new(1800.0, 800.0),
            // Units are px/s; a 20 kg player reaches ~17 px/s per tick of input
            movement_coefficient: 20_000.0,
            max_velocity: 500.0,
            bounce_coefficient: 0.6,
            total_time: 180.0,
        }
    }
}

impl EngineSettings {
    /// Parse settings from JSON (missing fields take defaults) and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: rink {}x{}, friction {}, max velocity {}",
            settings.rink_dimensions.x,
            settings.rink_dimensions.y,
            settings.friction_coefficient,
            settings.max_velocity
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the integrator can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Vec2 { x: w, y: h } = self.rink_dimensions;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidRink { width: w, height: h });
        }
        if !(0.0..1.0).contains(&self.friction_coefficient) {
            return Err(ConfigError::InvalidFriction(self.friction_coefficient));
        }
        if !(self.movement_coefficient.is_finite() && self.movement_coefficient > 0.0) {
            return Err(ConfigError::InvalidMovement(self.movement_coefficient));
        }
        if !(self.max_velocity.is_finite() && self.max_velocity > 0.0) {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity));
        }
        if !(self.total_time.is_finite() && self.total_time >= 0.0) {
            return Err(ConfigError::InvalidTotalTime(self.total_time));
        }
        Ok(())
    }

    /// Validate an object count against the preallocated pair table
    pub(crate) fn check_object_count(count: usize) -> Result<(), ConfigError> {
        if count > MAX_OBJECTS {
            return Err(ConfigError::TooManyObjects {
                count,
                limit: MAX_OBJECTS,
            });
        }
        Ok(())
    }
}
