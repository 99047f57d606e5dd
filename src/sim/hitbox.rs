//! Hitbox shapes
//!
//! A hitbox is an immutable shape placed at an offset from its owning object's
//! center. Offsets are not rotated with the object; objects don't spin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, circle_circle_collision, circle_rect_collision};
use crate::error::ConfigError;

/// A circle, described by its diameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularHitbox {
    /// Diameter
    pub width: f32,
    /// Offset from the owning object's position
    pub offset: Vec2,
}

impl CircularHitbox {
    pub fn new(width: f32, offset: Vec2) -> Self {
        Self { width, offset }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }

    /// Narrow-phase test against any other hitbox at predicted object positions.
    ///
    /// Returns the contact angles for (self, other), or `None` when the shapes
    /// don't overlap.
    pub fn test_collision(
        &self,
        other: &Hitbox,
        predicted_self: Vec2,
        predicted_other: Vec2,
    ) -> Option<Contact> {
        let center = predicted_self + self.offset;
        let other_center = predicted_other + other.offset();

        match other {
            Hitbox::Circular(circle) => {
                circle_circle_collision(self, center, circle, other_center)
            }
            Hitbox::Rectangular(rect) => circle_rect_collision(self, center, rect, other_center),
        }
    }
}

/// An oriented rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularHitbox {
    /// Extent along the rotated X axis
    pub width: f32,
    /// Extent along the rotated Y axis
    pub height: f32,
    pub offset: Vec2,
    /// Radians, counter-clockwise from world X
    pub rotation: f32,
}

impl RectangularHitbox {
    pub fn new(width: f32, height: f32, offset: Vec2, rotation: f32) -> Self {
        Self {
            width,
            height,
            offset,
            rotation,
        }
    }

    /// Build with the rotation given in degrees
    pub fn from_degrees(width: f32, height: f32, offset: Vec2, degrees: f32) -> Self {
        Self::new(width, height, offset, degrees.to_radians())
    }

    /// Unit vectors of the rectangle's width and height axes
    #[inline]
    pub fn axes(&self) -> (Vec2, Vec2) {
        let u = Vec2::from_angle(self.rotation);
        (u, u.perp())
    }

    /// Rectangles never start a collision test.
    ///
    /// Narrow phase is driven from the circular side; the engine tries both
    /// orderings of an object pair, so circle/rectangle contacts are still found.
    /// Rectangle/rectangle contacts are not detected.
    pub fn test_collision(
        &self,
        _other: &Hitbox,
        _predicted_self: Vec2,
        _predicted_other: Vec2,
    ) -> Option<Contact> {
        None
    }
}

/// Any hitbox shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hitbox {
    Circular(CircularHitbox),
    Rectangular(RectangularHitbox),
}

impl Hitbox {
    pub fn circle(width: f32, offset: Vec2) -> Self {
        Hitbox::Circular(CircularHitbox::new(width, offset))
    }

    pub fn rect(width: f32, height: f32, offset: Vec2, rotation: f32) -> Self {
        Hitbox::Rectangular(RectangularHitbox::new(width, height, offset, rotation))
    }

    pub fn width(&self) -> f32 {
        match self {
            Hitbox::Circular(c) => c.width,
            Hitbox::Rectangular(r) => r.width,
        }
    }

    /// Height for rectangles, diameter for circles
    pub fn height(&self) -> f32 {
        match self {
            Hitbox::Circular(c) => c.width,
            Hitbox::Rectangular(r) => r.height,
        }
    }

    pub fn offset(&self) -> Vec2 {
        match self {
            Hitbox::Circular(c) => c.offset,
            Hitbox::Rectangular(r) => r.offset,
        }
    }

    /// Rotation in radians (always 0 for circles)
    pub fn rotation(&self) -> f32 {
        match self {
            Hitbox::Circular(_) => 0.0,
            Hitbox::Rectangular(r) => r.rotation,
        }
    }

    /// Pairwise narrow-phase test at predicted object positions
    pub fn test_collision(
        &self,
        other: &Hitbox,
        predicted_self: Vec2,
        predicted_other: Vec2,
    ) -> Option<Contact> {
        match self {
            Hitbox::Circular(c) => c.test_collision(other, predicted_self, predicted_other),
            Hitbox::Rectangular(r) => r.test_collision(other, predicted_self, predicted_other),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width(), self.height());
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(width) && ok(height) && self.offset().is_finite() && self.rotation().is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidHitbox { width, height })
        }
    }
}

impl From<CircularHitbox> for Hitbox {
    fn from(c: CircularHitbox) -> Self {
        Hitbox::Circular(c)
    }
}

impl From<RectangularHitbox> for Hitbox {
    fn from(r: RectangularHitbox) -> Self {
        Hitbox::Rectangular(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_shape_queries() {
        let circle = Hitbox::circle(30.0, Vec2::new(1.0, 2.0));
        assert_eq!(circle.width(), 30.0);
        assert_eq!(circle.height(), 30.0);
        assert_eq!(circle.rotation(), 0.0);
        assert_eq!(circle.offset(), Vec2::new(1.0, 2.0));

        let rect = Hitbox::rect(20.0, 40.0, Vec2::ZERO, 0.5);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.rotation(), 0.5);
    }

    #[test]
    fn test_degrees_constructor() {
        let rect = RectangularHitbox::from_degrees(10.0, 10.0, Vec2::ZERO, 90.0);
        assert!((rect.rotation - FRAC_PI_2).abs() < 1e-6);
        let (u, v) = rect.axes();
        assert!(u.x.abs() < 1e-6 && (u.y - 1.0).abs() < 1e-6);
        assert!((v.x + 1.0).abs() < 1e-6 && v.y.abs() < 1e-6);
    }

    #[test]
    fn test_rectangle_never_initiates() {
        let rect = Hitbox::rect(50.0, 50.0, Vec2::ZERO, 0.0);
        let circle = Hitbox::circle(50.0, Vec2::ZERO);
        // Fully overlapping, still no result from the rectangle side
        assert!(rect.test_collision(&circle, Vec2::ZERO, Vec2::ZERO).is_none());
        assert!(rect.test_collision(&rect, Vec2::ZERO, Vec2::ZERO).is_none());
        assert!(circle.test_collision(&rect, Vec2::ZERO, Vec2::ZERO).is_some());
    }

    #[test]
    fn test_offsets_shift_centers() {
        let a = Hitbox::circle(10.0, Vec2::new(-20.0, 0.0));
        let b = Hitbox::circle(10.0, Vec2::ZERO);
        // Object centers coincide but the offset hitbox sits 20 px away
        assert!(a.test_collision(&b, Vec2::ZERO, Vec2::ZERO).is_none());
        assert!(a.test_collision(&b, Vec2::new(15.0, 0.0), Vec2::ZERO).is_some());
    }

    #[test]
    fn test_validate() {
        assert!(Hitbox::circle(10.0, Vec2::ZERO).validate().is_ok());
        assert!(Hitbox::circle(0.0, Vec2::ZERO).validate().is_err());
        assert!(Hitbox::rect(10.0, -1.0, Vec2::ZERO, 0.0).validate().is_err());
        assert!(Hitbox::rect(10.0, 5.0, Vec2::ZERO, f32::NAN).validate().is_err());
    }
}
