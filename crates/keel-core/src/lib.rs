//! keel-core: deterministic float32 geometry math.
//!
//! Provides the vector and quaternion primitives the rest of keel is
//! built on, plus the rotation operations (Rodrigues axis-angle,
//! quaternion sandwich product, vector-to-vector alignment).
//!
//! Design notes:
//! - Float32 throughout; operations favor clarity and reproducibility.
//! - Pure-functional calling convention: every operation returns a new
//!   value and never mutates a borrowed input.
//! - Degenerate inputs resolve to documented fallbacks (identity
//!   rotation, zero vector) instead of producing NaN or panicking.

pub mod math;

pub use math::{clamp, deg_to_rad, rad_to_deg, Quat, Vec2, Vec3, EPSILON};
