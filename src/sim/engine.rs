//! Fixed timestep engine
//!
//! Owns the settings and every moveable object, and advances them one tick at a
//! time: forces, velocities, collisions, positions.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::collision::{CollisionBody, calc_collision};
use super::hitbox::Hitbox;
use super::object::{MoveableObject, ObjectKind};
use super::player::InputState;
use crate::consts::{DT, PUCK_DIAMETER, PUCK_MASS, WALL_MASS};
use crate::error::ConfigError;
use crate::settings::EngineSettings;

/// The rink simulation
#[derive(Debug, Clone)]
pub struct Engine {
    settings: EngineSettings,
    objects: Vec<MoveableObject>,
    /// Row-major `n × n` table of pairs already resolved this tick
    resolved: Vec<bool>,
    /// Pair resolutions performed during the last tick
    contacts: usize,
    elapsed_ticks: u64,
}

impl Engine {
    /// Create an engine over a fixed set of objects
    pub fn new(settings: EngineSettings, objects: Vec<MoveableObject>) -> Result<Self, ConfigError> {
        settings.validate()?;
        EngineSettings::check_object_count(objects.len())?;

        let n = objects.len();
        log::info!(
            "Engine created: {} objects ({} players), rink {}x{}",
            n,
            objects.iter().filter(|o| o.is_player()).count(),
            settings.rink_dimensions.x,
            settings.rink_dimensions.y
        );

        Ok(Self {
            settings,
            objects,
            resolved: vec![false; n * n],
            contacts: 0,
            elapsed_ticks: 0,
        })
    }

    /// Players plus the standard puck, placed near the rink center after them
    pub fn with_puck(
        settings: EngineSettings,
        mut players: Vec<MoveableObject>,
    ) -> Result<Self, ConfigError> {
        let rink = settings.rink_dimensions;
        let offset = PUCK_DIAMETER / 2.0;
        let puck = MoveableObject::puck(
            Vec2::new(rink.x / 2.0 - offset, rink.y / 2.0 - offset),
            PUCK_MASS,
            vec![Hitbox::circle(PUCK_DIAMETER, Vec2::ZERO)],
        )?;
        players.push(puck);
        Self::new(settings, players)
    }

    /// Advance the simulation by one tick.
    ///
    /// The player at `controlled_index` is driven by `input`; every other player
    /// coasts. Pucks never take input, even if `controlled_index` points at one.
    pub fn tick(&mut self, controlled_index: usize, input: &InputState) {
        let settings = &self.settings;
        for (i, object) in self.objects.iter_mut().enumerate() {
            if object.kind() == ObjectKind::Player {
                if i == controlled_index {
                    object.apply_input(input, settings.movement_coefficient);
                } else {
                    object.clear_force();
                }
            }
            object.update_velocity(settings.max_velocity, settings.friction_coefficient);
        }

        self.check_collisions();

        for object in &mut self.objects {
            object.update_position();
        }
        self.elapsed_ticks += 1;
    }

    /// Resolve wall bounces and object pairs at the predicted positions.
    ///
    /// Each unordered pair is resolved at most once per tick. Both orderings of a
    /// pair are tried so that a circle on either side can drive the test.
    fn check_collisions(&mut self) {
        let n = self.objects.len();
        self.resolved.fill(false);
        self.contacts = 0;

        for i in 0..n {
            self.bounce_off_walls(i);

            for j in 0..n {
                if i == j || self.resolved[i * n + j] {
                    continue;
                }
                let Some(contact) = self.objects[i].test_hitboxes(&self.objects[j]) else {
                    continue;
                };

                let (a, b) = (&self.objects[i], &self.objects[j]);
                let (va, vb) = calc_collision(
                    &CollisionBody::new(a.mass(), a.velocity(), contact.self_angle),
                    &CollisionBody::new(b.mass(), b.velocity(), contact.self_angle),
                );
                log::debug!(
                    "Contact {i}<->{j} at {:.3} rad: {} -> {}, {} -> {}",
                    contact.self_angle,
                    a.velocity(),
                    va,
                    b.velocity(),
                    vb
                );

                self.objects[i].set_velocity(finite_or_rest(i, va));
                self.objects[j].set_velocity(finite_or_rest(j, vb));
                self.resolved[i * n + j] = true;
                self.resolved[j * n + i] = true;
                self.contacts += 1;
            }
        }
    }

    /// Bounce object `i` off the side walls, then the end walls.
    ///
    /// Only the object's velocity changes; the wall is a stationary finite mass.
    /// A wall is hit when every hitbox's half extent crosses it.
    fn bounce_off_walls(&mut self, i: usize) {
        let rink = self.settings.rink_dimensions;
        let object = &mut self.objects[i];
        let predicted = object.predicted_position();

        let crosses = |p: f32, half: f32, limit: f32| p < half || p > limit - half;
        let hits_side = object
            .hitboxes()
            .iter()
            .all(|hb| crosses(predicted.x, hb.width() / 2.0, rink.x));
        let hits_end = object
            .hitboxes()
            .iter()
            .all(|hb| crosses(predicted.y, hb.height() / 2.0, rink.y));

        for (hit, normal) in [(hits_side, 0.0), (hits_end, FRAC_PI_2)] {
            if !hit {
                continue;
            }
            let (velocity, _) = calc_collision(
                &CollisionBody::new(object.mass(), object.velocity(), normal),
                &CollisionBody::stationary(WALL_MASS, normal),
            );
            log::debug!("Wall bounce {i}: {} -> {}", object.velocity(), velocity);
            object.set_velocity(finite_or_rest(i, velocity));
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn objects(&self) -> &[MoveableObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&MoveableObject> {
        self.objects.get(index)
    }

    /// Mutable access for setup between ticks (placement, hitbox swaps)
    pub fn object_mut(&mut self, index: usize) -> Option<&mut MoveableObject> {
        self.objects.get_mut(index)
    }

    pub fn players(&self) -> impl Iterator<Item = &MoveableObject> {
        self.objects.iter().filter(|o| o.is_player())
    }

    /// The first puck, if any
    pub fn puck(&self) -> Option<&MoveableObject> {
        self.objects.iter().find(|o| o.kind() == ObjectKind::Puck)
    }

    /// Object pairs resolved during the last tick
    pub fn last_tick_contacts(&self) -> usize {
        self.contacts
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_ticks as f32 * DT
    }

    /// Seconds left of `total_time`, never negative
    pub fn time_remaining(&self) -> f32 {
        (self.settings.total_time - self.elapsed_seconds()).max(0.0)
    }
}

/// Collision output that isn't finite would poison every later tick; stop the
/// object instead.
fn finite_or_rest(index: usize, velocity: Vec2) -> Vec2 {
    if velocity.is_finite() {
        velocity
    } else {
        log::warn!("Object {index} got non-finite velocity {velocity} from collision, stopping it");
        Vec2::ZERO
    }
}
