//! Moveable objects: players and the puck
//!
//! Each object owns its kinematic state and hitboxes. The engine mutates them
//! once per tick: force, then velocity, then (after collisions) position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Contact;
use super::hitbox::Hitbox;
use super::player::{InputState, input_force};
use crate::consts::DT;
use crate::error::ConfigError;

/// What drives an object besides collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Accepts directional input when it is the controlled object
    Player,
    /// Passive; only collisions and friction change its motion
    Puck,
}

/// A rigid disc (or compound shape) sliding on the rink.
///
/// Serializable for snapshots; only constructed through the validating
/// constructors.
#[derive(Debug, Clone, Serialize)]
pub struct MoveableObject {
    kind: ObjectKind,
    position: Vec2,
    velocity: Vec2,
    force: Vec2,
    mass: f32,
    hitboxes: Vec<Hitbox>,
}

impl MoveableObject {
    /// Create an object at rest. Fails on a non-positive mass or bad hitboxes.
    pub fn new(
        kind: ObjectKind,
        position: Vec2,
        mass: f32,
        hitboxes: Vec<Hitbox>,
    ) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::InvalidMass(mass));
        }
        if hitboxes.is_empty() {
            return Err(ConfigError::NoHitboxes);
        }
        for hitbox in &hitboxes {
            hitbox.validate()?;
        }
        Ok(Self {
            kind,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            hitboxes,
        })
    }

    pub fn player(position: Vec2, mass: f32, hitboxes: Vec<Hitbox>) -> Result<Self, ConfigError> {
        Self::new(ObjectKind::Player, position, mass, hitboxes)
    }

    pub fn puck(position: Vec2, mass: f32, hitboxes: Vec<Hitbox>) -> Result<Self, ConfigError> {
        Self::new(ObjectKind::Puck, position, mass, hitboxes)
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_player(&self) -> bool {
        self.kind == ObjectKind::Player
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    /// Replace one hitbox slot
    pub fn set_hitbox(&mut self, index: usize, hitbox: Hitbox) -> Result<(), ConfigError> {
        hitbox.validate()?;
        let len = self.hitboxes.len();
        let slot = self
            .hitboxes
            .get_mut(index)
            .ok_or(ConfigError::HitboxIndex { index, len })?;
        *slot = hitbox;
        Ok(())
    }

    pub fn set_force(&mut self, force: Vec2) {
        self.force = force;
    }

    /// Drop any input force so only friction acts on the object
    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// Set force from directional input (players only; a puck ignores input)
    pub fn apply_input(&mut self, input: &InputState, movement_coefficient: f32) {
        if self.is_player() {
            self.force = input_force(input, movement_coefficient);
        }
    }

    /// Overwrite velocity, bypassing the speed cap (collision response)
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// v += F·dt/m, then v -= v·friction.
    ///
    /// Above `max_velocity` the velocity is left untouched (not clamped) until
    /// something else slows the object down.
    pub fn update_velocity(&mut self, max_velocity: f32, friction_coefficient: f32) {
        if self.velocity.length() > max_velocity {
            return;
        }
        self.velocity += self.force * DT / self.mass;
        self.velocity -= self.velocity * friction_coefficient;
    }

    /// p += v·dt
    pub fn update_position(&mut self) {
        self.position += self.velocity * DT;
    }

    /// Where the object will be after this tick if nothing changes its velocity
    #[inline]
    pub fn predicted_position(&self) -> Vec2 {
        self.position + self.velocity * DT
    }

    /// Test every hitbox pair between two objects at their predicted positions.
    ///
    /// Returns the first contact in hitbox order (self's hitboxes outer).
    pub fn test_hitboxes(&self, other: &MoveableObject) -> Option<Contact> {
        let predicted_self = self.predicted_position();
        let predicted_other = other.predicted_position();

        self.hitboxes.iter().find_map(|mine| {
            other
                .hitboxes
                .iter()
                .find_map(|theirs| mine.test_collision(theirs, predicted_self, predicted_other))
        })
    }
}
