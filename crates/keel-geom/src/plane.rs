use keel_core::math::{Quat, Vec3, EPSILON};

/// An oriented plane defined by a reference point and a unit normal.
///
/// The stored normal is always unit length: construction and every
/// setter normalize it, and the rotation operations re-normalize after
/// updating it so floating-point drift never accumulates. A degenerate
/// input normal (length ≤ `EPSILON`) falls back to `+Z`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Creates a plane through `point` oriented by `normal`.
    ///
    /// The normal is normalized before it is stored; a non-unit input
    /// such as `(0, 0, 2)` is stored as `(0, 0, 1)`.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: unit_or_z(&normal),
        }
    }

    /// The plane's reference point.
    pub const fn point(&self) -> Vec3 {
        self.point
    }

    /// The plane's unit normal.
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Replaces the reference point.
    pub fn set_point(&mut self, point: Vec3) {
        self.point = point;
    }

    /// Replaces the normal, normalizing the input first.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = unit_or_z(&normal);
    }

    /// Signed distance from `p` to the plane along the normal.
    ///
    /// Positive on the side the normal points toward.
    pub fn signed_distance(&self, p: &Vec3) -> f32 {
        self.normal.dot(&p.sub(&self.point))
    }

    /// Absolute distance from `p` to the plane.
    pub fn distance_to_point(&self, p: &Vec3) -> f32 {
        self.signed_distance(p).abs()
    }

    /// Whether `p` lies on the plane, within `EPSILON`.
    ///
    /// Dot products of rotated normals are never exactly zero, so the
    /// comparison uses a tolerance rather than exact equality.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        self.distance_to_point(p) <= EPSILON
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project_point(&self, p: &Vec3) -> Vec3 {
        p.sub(&self.normal.scale(self.signed_distance(p)))
    }

    /// Rotates the plane's normal `angle` radians around `axis`.
    ///
    /// Delegates to [`Vec3::rotate_axis_angle`] and re-normalizes the
    /// result. The caller's axis is not mutated. A degenerate axis
    /// leaves the plane unchanged.
    pub fn rotate_axis_angle(&mut self, axis: &Vec3, angle: f32) {
        let rotated = self.normal.rotate_axis_angle(axis, angle);
        self.normal = unit_or_z(&rotated);
    }

    /// Rotates the plane's normal by a quaternion.
    ///
    /// Delegates to the sandwich product and re-normalizes the result.
    /// The quaternion is not mutated.
    pub fn rotate_by(&mut self, rotation: &Quat) {
        let rotated = self.normal.rotate_by(rotation);
        self.normal = unit_or_z(&rotated);
    }

    /// Applies to this plane the rotation another plane underwent.
    ///
    /// `before` and `after` are the other plane's orientation before
    /// and after its rotation; the quaternion carrying `before`'s
    /// normal onto `after`'s is applied to this plane's normal. If the
    /// two orientations are identical the plane is unchanged.
    pub fn rotate_with(&mut self, before: &Plane, after: &Plane) {
        let rotation = Quat::rotation_between(&before.normal, &after.normal);
        self.rotate_by(&rotation);
    }
}

impl Default for Plane {
    /// The XY plane through the origin, normal `+Z`.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::UNIT_Z)
    }
}

/// Normalizes `v`, falling back to `+Z` when the input is degenerate.
fn unit_or_z(v: &Vec3) -> Vec3 {
    let unit = v.normalize();
    if unit == Vec3::ZERO {
        return Vec3::UNIT_Z;
    }
    unit
}
