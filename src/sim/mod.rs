//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (object index)
//! - No allocation inside a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod hitbox;
pub mod object;
pub mod player;

pub use collision::{
    CollisionBody, Contact, calc_collision, circle_circle_collision, circle_rect_collision,
};
pub use engine::Engine;
pub use hitbox::{CircularHitbox, Hitbox, RectangularHitbox};
pub use object::{MoveableObject, ObjectKind};
pub use player::{InputState, input_force};
