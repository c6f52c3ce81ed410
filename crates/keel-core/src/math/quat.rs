use core::f32::consts::PI;
use core::fmt;

use crate::math::{clamp, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with deterministic float32 rounding.
///
/// * All angles are expressed in radians.
/// * The default value is the identity rotation `(0, 0, 0, 1)`.
/// * Unit quaternions represent rotations; composition of two unit
///   quaternions stays unit up to floating-point drift (re-normalize
///   over long chains).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Squared 4-norm of the quaternion.
    pub fn length_squared(&self) -> f32 {
        let [x, y, z, w] = self.data;
        x * x + y * y + z * z + w * w
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized into a local copy; the caller's vector is
    /// untouched. Returns the identity quaternion when the axis length
    /// is ≤ `EPSILON` to avoid undefined orientations.
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let norm_axis = axis.normalize();
        if norm_axis == Vec3::ZERO {
            return Self::identity();
        }
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Returns the quaternion rotating the direction of `from` onto the
    /// direction of `to`.
    ///
    /// Both inputs are normalized locally; only their directions matter.
    /// The rotation axis is the cross product of the two directions and
    /// the angle is `acos` of their dot product, clamped to `[−1, 1]`
    /// so floating-point overshoot never leaves the arccos domain.
    ///
    /// Degenerate cases resolve deterministically:
    /// * either input degenerate (length ≤ `EPSILON`): identity;
    /// * parallel directions (cross ≈ 0, dot > 0): identity;
    /// * anti-parallel directions (cross ≈ 0, dot < 0): a π rotation
    ///   around an arbitrary axis perpendicular to `from`.
    pub fn rotation_between(from: &Vec3, to: &Vec3) -> Self {
        let f = from.normalize();
        let t = to.normalize();
        if f == Vec3::ZERO || t == Vec3::ZERO {
            return Self::identity();
        }
        let dot = clamp(f.dot(&t), -1.0, 1.0);
        let axis = f.cross(&t);
        if axis.length_squared() <= EPSILON * EPSILON {
            if dot >= 0.0 {
                return Self::identity();
            }
            return Self::from_axis_angle(&f.any_orthogonal(), PI);
        }
        Self::from_axis_angle(&axis, dot.acos())
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result composes the rotation
    /// represented by `self` followed by the rotation represented by
    /// `other`. Quaternion multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use keel_core::math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(
    ///     yaw.multiply(&pitch).to_array(),
    ///     pitch.multiply(&yaw).to_array(),
    /// );
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (
            self.component(0),
            self.component(1),
            self.component(2),
            self.component(3),
        );
        let (bx, by, bz, bw) = (
            other.component(0),
            other.component(1),
            other.component(2),
            other.component(3),
        );
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Normalises the quaternion; returns identity when the norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length_squared().sqrt();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Returns the true multiplicative inverse: the conjugate scaled by
    /// the inverse squared norm.
    ///
    /// For a unit quaternion this equals the conjugate, but the general
    /// form keeps the sandwich product correct for non-unit inputs.
    /// A degenerate quaternion (squared norm ≤ `EPSILON²`) inverts to
    /// the identity rather than producing non-finite components.
    pub fn invert(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len_sq;
        Self::new(
            -self.component(0) * inv,
            -self.component(1) * inv,
            -self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Rotates a vector by this quaternion via the sandwich product
    /// `q · v · q⁻¹`, where `v` is lifted to the pure quaternion
    /// `(v, 0)`.
    ///
    /// This is the single rotation entry point; [`Vec3::rotate_by`] and
    /// the plane rotations in keel-geom all delegate here. Neither
    /// operand is mutated.
    pub fn rotate_vector(&self, v: &Vec3) -> Vec3 {
        let pure = Self::new(v.x(), v.y(), v.z(), 0.0);
        let rotated = self.multiply(&pure).multiply(&self.invert());
        Vec3::new(
            rotated.component(0),
            rotated.component(1),
            rotated.component(2),
        )
    }

    /// Converts the quaternion to the equivalent 3×3 rotation matrix,
    /// returned as 9 entries in row-major order.
    ///
    /// The quaternion is normalized internally so non-unit inputs still
    /// yield a proper rotation matrix. Read-only; `self` is unchanged.
    pub fn to_rotation_matrix(&self) -> [f32; 9] {
        let q = self.normalize();
        let (x, y, z, w) = (
            q.component(0),
            q.component(1),
            q.component(2),
            q.component(3),
        );

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        [
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            2.0 * (xy + wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz - wx),
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (xx + yy),
        ]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; callers typically pass unit
/// quaternions for rotations, but normalization is not enforced by this
/// conversion.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.component(0),
            self.component(1),
            self.component(2),
            self.component(3)
        )
    }
}
