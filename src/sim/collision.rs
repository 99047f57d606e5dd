//! Collision detection and response
//!
//! Narrow phase is a circle against either a circle or an oriented rectangle
//! (separating axis test on the rectangle's two axes). Response is the
//! two-dimensional elastic collision with an explicit contact angle.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::hitbox::{CircularHitbox, RectangularHitbox};
use crate::normalize_line_angle;

/// Contact angles (radians) found by a narrow-phase test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Normal angle on the side that ran the test
    pub self_angle: f32,
    /// Normal angle on the other side (a face or vertex angle for rectangles)
    pub other_angle: f32,
}

impl Contact {
    pub fn new(self_angle: f32, other_angle: f32) -> Self {
        Self {
            self_angle,
            other_angle,
        }
    }

    /// Angles as a `(self, other)` pair
    pub fn angles(&self) -> (f32, f32) {
        (self.self_angle, self.other_angle)
    }
}

/// Circle against circle, with both centers already in world space.
///
/// Both sides get the same angle: the line between the centers is the normal
/// for either circle.
pub fn circle_circle_collision(
    a: &CircularHitbox,
    a_center: Vec2,
    b: &CircularHitbox,
    b_center: Vec2,
) -> Option<Contact> {
    let delta = a_center - b_center;
    // Negated so a NaN distance counts as a miss
    if !(delta.length() < (a.width + b.width) / 2.0) {
        return None;
    }

    let angle = delta.y.atan2(delta.x);
    Some(Contact::new(angle, angle))
}

/// Circle against an oriented rectangle, both centers in world space.
///
/// Overlap is tested on the rectangle's width and height axes only. The circle
/// angle points along the center-to-center line. The rectangle angle is a face
/// angle for edge contact and the vertex-to-circle direction for vertex contact.
/// Both are folded to contact lines in [-π/2, π/2).
pub fn circle_rect_collision(
    circle: &CircularHitbox,
    circle_center: Vec2,
    rect: &RectangularHitbox,
    rect_center: Vec2,
) -> Option<Contact> {
    let radius = circle.radius();
    let half = Vec2::new(rect.width, rect.height) / 2.0;
    let (u, v) = rect.axes();

    let depth_u = projected_overlap(circle_center.dot(u), radius, rect_center.dot(u), half.x);
    let depth_v = projected_overlap(circle_center.dot(v), radius, rect_center.dot(v), half.y);
    if !(depth_u > 0.0 && depth_v > 0.0) {
        return None;
    }

    let to_circle = circle_center - rect_center;
    let circle_angle = to_circle.y.atan2(to_circle.x);

    let rect_angle = if depth_u < radius && depth_v < radius {
        // Center lies outside both slabs: contact is on the nearest corner
        let corner = Vec2::new(
            half.x.copysign(to_circle.dot(u)),
            half.y.copysign(to_circle.dot(v)),
        );
        let from_vertex = to_circle - (u * corner.x + v * corner.y);
        from_vertex.y.atan2(from_vertex.x)
    } else if depth_u < depth_v {
        rect.rotation
    } else {
        rect.rotation + FRAC_PI_2
    };

    Some(Contact::new(
        normalize_line_angle(circle_angle),
        normalize_line_angle(rect_angle),
    ))
}

/// Overlap of two intervals given as center ± half extent; negative when apart
#[inline]
fn projected_overlap(a_center: f32, a_half: f32, b_center: f32, b_half: f32) -> f32 {
    let (a_min, a_max) = (a_center - a_half, a_center + a_half);
    let (b_min, b_max) = (b_center - b_half, b_center + b_half);
    (a_max - b_min).min(b_max - a_min)
}

/// One participant of an elastic collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBody {
    pub mass: f32,
    pub velocity: Vec2,
    /// Contact normal angle seen by this body; the *other* body resolves along it
    pub normal_angle: f32,
}

impl CollisionBody {
    pub fn new(mass: f32, velocity: Vec2, normal_angle: f32) -> Self {
        Self {
            mass,
            velocity,
            normal_angle,
        }
    }

    /// A motionless body, e.g. a rink wall
    pub fn stationary(mass: f32, normal_angle: f32) -> Self {
        Self::new(mass, Vec2::ZERO, normal_angle)
    }
}

/// Two-dimensional elastic collision with a contact angle.
///
/// See <https://en.wikipedia.org/wiki/Elastic_collision#Two-dimensional_collision_with_two_moving_objects>.
/// Body `a` is resolved along `b.normal_angle` and vice versa. Returns the final
/// velocities of `(a, b)`.
pub fn calc_collision(a: &CollisionBody, b: &CollisionBody) -> (Vec2, Vec2) {
    (
        elastic_response(a, b, b.normal_angle),
        elastic_response(b, a, a.normal_angle),
    )
}

fn elastic_response(body: &CollisionBody, other: &CollisionBody, contact_angle: f32) -> Vec2 {
    let (speed, heading) = speed_and_heading(body.velocity);
    let (other_speed, other_heading) = speed_and_heading(other.velocity);

    let along_normal = (speed * (heading - contact_angle).cos() * (body.mass - other.mass)
        + 2.0 * other.mass * other_speed * (other_heading - contact_angle).cos())
        / (body.mass + other.mass);
    let along_tangent = speed * (heading - contact_angle).sin();

    Vec2::from_angle(contact_angle) * along_normal
        + Vec2::from_angle(contact_angle + FRAC_PI_2) * along_tangent
}

/// Polar form of a velocity.
///
/// The speed is the vector length rather than `vx / cos(heading)`, which is the
/// same value but blows up for vertical headings.
#[inline]
fn speed_and_heading(velocity: Vec2) -> (f32, f32) {
    (velocity.length(), velocity.y.atan2(velocity.x))
}
