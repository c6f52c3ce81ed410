use keel_core::math::{Quat, Vec3};

use crate::{Plane, Shape2d};

/// A positioned, oriented 2D surface: a plane, a shape, and a world
/// position.
///
/// The shape is recentred and extent-normalized on construction so its
/// vertices sit in a canonical local frame; the plane carries the
/// orientation and the position carries the translation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface2d {
    plane: Plane,
    shape: Shape2d,
    position: Vec3,
}

impl Surface2d {
    /// Creates a surface from a plane, a shape, and a position.
    pub fn new(plane: Plane, shape: Shape2d, position: Vec3) -> Self {
        Self {
            plane,
            shape: shape.recenter().normalize_extent(),
            position,
        }
    }

    /// The surface's plane.
    pub const fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The surface's shape in its canonical local frame.
    pub const fn shape(&self) -> &Shape2d {
        &self.shape
    }

    /// The surface's world position.
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// The shape's area.
    pub fn area(&self) -> f32 {
        self.shape.area()
    }

    /// The shape centroid lifted to 3D and offset by the surface
    /// position.
    ///
    /// The centroid `(cx, cy)` is embedded as `(cx, cy, 0)` before the
    /// position is added.
    pub fn center(&self) -> Vec3 {
        let c = self.shape.center();
        self.position.add(&Vec3::new(c.x(), c.y(), 0.0))
    }

    /// Rotates the surface's plane `angle` radians around `axis`.
    pub fn rotate_axis_angle(&mut self, axis: &Vec3, angle: f32) {
        self.plane.rotate_axis_angle(axis, angle);
    }

    /// Rotates the surface's plane by a quaternion.
    pub fn rotate_by(&mut self, rotation: &Quat) {
        self.plane.rotate_by(rotation);
    }
}

impl Default for Surface2d {
    /// A unit square on the XY plane at the origin.
    fn default() -> Self {
        Self::new(Plane::default(), Shape2d::rectangle(1.0, 1.0), Vec3::ZERO)
    }
}
