use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{Quat, EPSILON};

/// Deterministic 3D vector.
///
/// * Components may represent either points or directions depending on
///   the calling context.
/// * Arithmetic uses `f32` so results are reproducible across platforms.
/// * All operations return a new value; borrowed inputs are never
///   mutated. In particular the rotation operations normalize their
///   axis argument into a local copy rather than touching the caller's
///   vector.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Component-wise product with another vector.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }

    /// Linear interpolation toward `other`; `t = 0` yields `self`,
    /// `t = 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x() + (other.x() - self.x()) * t,
            self.y() + (other.y() - self.y()) * t,
            self.z() + (other.z() - self.z()) * t,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Distance to another point.
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Squared distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub(other).length_squared()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold: vectors at or below it are
    /// considered degenerate and normalized to zero so callers can
    /// detect them deterministically.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Returns the vector pointing in the opposite direction.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }

    /// Returns a unit vector perpendicular to `self`.
    ///
    /// The choice is deterministic: the cross product with whichever
    /// coordinate axis is least aligned with `self`. Returns `UNIT_X`
    /// when `self` is degenerate so callers always receive a unit
    /// vector.
    pub fn any_orthogonal(&self) -> Self {
        let basis = if self.x().abs() <= self.y().abs() && self.x().abs() <= self.z().abs() {
            Self::UNIT_X
        } else if self.y().abs() <= self.z().abs() {
            Self::UNIT_Y
        } else {
            Self::UNIT_Z
        };
        let ortho = self.cross(&basis).normalize();
        if ortho == Self::ZERO {
            return Self::UNIT_X;
        }
        ortho
    }

    /// Rotates this vector `angle` radians around `axis` using
    /// Rodrigues' rotation formula:
    ///
    /// `v' = v·cosθ + (k × v)·sinθ + k·(k · v)·(1 − cosθ)`
    ///
    /// where `k` is the normalized axis. The caller's `axis` value is
    /// left untouched; normalization happens on a local copy. A
    /// degenerate axis (length ≤ `EPSILON`) yields the identity
    /// rotation, i.e. `self` unchanged.
    ///
    /// The convention is right-handed: rotating `(1, 0, 0)` by `π/2`
    /// around `(0, 1, 0)` yields `(0, 0, −1)`.
    pub fn rotate_axis_angle(&self, axis: &Self, angle: f32) -> Self {
        let k = axis.normalize();
        if k == Self::ZERO {
            return *self;
        }
        let (sin, cos) = angle.sin_cos();
        self.scale(cos)
            .add(k.cross(self).scale(sin))
            .add(k.scale(k.dot(self) * (1.0 - cos)))
    }

    /// Rotates this vector by a quaternion via the sandwich product
    /// `q · v · q⁻¹`.
    ///
    /// Uses the true multiplicative inverse, so non-unit quaternions
    /// still produce a pure rotation. The quaternion is not mutated.
    pub fn rotate_by(&self, rotation: &Quat) -> Self {
        rotation.rotate_vector(self)
    }

    /// Rotates this vector onto the direction of `other`, preserving
    /// its own length.
    ///
    /// The rotation applied is [`Quat::rotation_between`], so the
    /// degenerate cases resolve the same way: parallel directions
    /// leave `self` unchanged, anti-parallel directions flip it
    /// through an arbitrary perpendicular axis.
    pub fn rotate_toward(&self, other: &Self) -> Self {
        self.rotate_by(&self.rotation_to(other))
    }

    /// Returns the quaternion that rotates this vector's direction
    /// onto `other`'s direction.
    pub fn rotation_to(&self, other: &Self) -> Quat {
        Quat::rotation_between(self, other)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use keel_core::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
