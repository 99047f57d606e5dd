//! Player input
//!
//! Turns the four directional flags into a force vector.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Directional keys held during a tick (screen coordinates: up is -y)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl InputState {
    /// Build from WASD-style key names; unknown keys are ignored
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut input = Self::default();
        for key in keys {
            match key {
                "w" | "up" => input.up = true,
                "a" | "left" => input.left = true,
                "s" | "down" => input.down = true,
                "d" | "right" => input.right = true,
                _ => {}
            }
        }
        input
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Split applied to diagonal input. The angle is 45 *radians*, which gives
/// ~0.525 on x and ~0.851 on y rather than a unit diagonal.
const DIAGONAL_SPLIT: f32 = 45.0;

/// Force for the given input: `movement_coefficient` on each active axis,
/// scaled by the diagonal split when both axes are active.
pub fn input_force(input: &InputState, movement_coefficient: f32) -> Vec2 {
    let mut force = Vec2::ZERO;
    if input.up {
        force.y -= movement_coefficient;
    }
    if input.left {
        force.x -= movement_coefficient;
    }
    if input.down {
        force.y += movement_coefficient;
    }
    if input.right {
        force.x += movement_coefficient;
    }

    if force.x != 0.0 && force.y != 0.0 {
        force.x *= DIAGONAL_SPLIT.cos();
        force.y *= DIAGONAL_SPLIT.sin();
    }
    force
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_axis() {
        let input = InputState {
            up: true,
            ..Default::default()
        };
        assert_eq!(input_force(&input, 10.0), Vec2::new(0.0, -10.0));

        let input = InputState {
            left: true,
            ..Default::default()
        };
        assert_eq!(input_force(&input, 10.0), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = InputState {
            up: true,
            down: true,
            right: true,
            ..Default::default()
        };
        // Vertical cancels, so no diagonal scaling on x
        assert_eq!(input_force(&input, 10.0), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_diagonal_uses_radian_split() {
        let input = InputState::from_keys(["s", "d"]);
        let force = input_force(&input, 100.0);
        assert!((force.x - 100.0 * 45.0f32.cos()).abs() < 1e-4);
        assert!((force.y - 100.0 * 45.0f32.sin()).abs() < 1e-4);
        assert!((force.x - 52.532).abs() < 1e-2);
        assert!((force.y - 85.090).abs() < 1e-2);
    }

    #[test]
    fn test_from_keys() {
        let input = InputState::from_keys(["w", "a", "x"]);
        assert!(input.up && input.left && !input.down && !input.right);
        assert!(InputState::from_keys([]).is_idle());
    }
}
