//! Rink Physics - fixed-timestep simulation core for a small rink game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hitboxes, objects, collisions, engine)
//! - `settings`: Engine tuning, JSON loading and validation
//! - `error`: Configuration errors raised at construction time

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::EngineSettings;
pub use sim::{Engine, Hitbox, InputState, MoveableObject, ObjectKind};

/// Simulation constants
pub mod consts {
    /// Ticks per second the external scheduler is expected to run at
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const DT: f32 = 1.0 / TICK_RATE as f32;

    /// Mass used for the stationary wall in bounce resolution.
    /// Finite on purpose: a true infinite mass would give a perfect mirror.
    pub const WALL_MASS: f32 = 100.0;

    /// Standard puck
    pub const PUCK_MASS: f32 = 2.0;
    pub const PUCK_DIAMETER: f32 = 30.0;

    /// Standard player disc
    pub const PLAYER_MASS: f32 = 20.0;
    pub const PLAYER_DIAMETER: f32 = 70.0;

    /// Upper bound on objects per engine (sizes the resolved-pair table)
    pub const MAX_OBJECTS: usize = 32;
}

/// Fold an angle onto a contact line orientation in [-π/2, π/2).
///
/// A contact normal and its opposite describe the same line, and the elastic
/// response does not distinguish them. Values within a small tolerance of +π/2
/// fold to -π/2 so that float noise can't flip the result between the two ends.
#[inline]
pub fn normalize_line_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{FRAC_PI_2, PI};
    const EPS: f32 = 1e-5;
    if !angle.is_finite() {
        return angle;
    }
    while angle >= FRAC_PI_2 - EPS {
        angle -= PI;
    }
    while angle < -FRAC_PI_2 - EPS {
        angle += PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_normalize_line_angle() {
        assert!((normalize_line_angle(0.3) - 0.3).abs() < 1e-6);
        assert!((normalize_line_angle(-3.0 * FRAC_PI_4) - FRAC_PI_4).abs() < 1e-6);
        assert!((normalize_line_angle(FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_line_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_line_angle(2.0 * PI + 0.1) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_near_vertical_folds_to_one_end() {
        let a = normalize_line_angle(FRAC_PI_2 - 1e-7);
        let b = normalize_line_angle(-FRAC_PI_2 - 1e-7);
        assert!((a - b).abs() < 1e-5);
    }
}
