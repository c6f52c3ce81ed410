//! Geometry primitives for keel.
//!
//! This crate provides:
//! - Oriented planes with a reference point (`Plane`).
//! - Planar polygons with independent axis scales (`Shape2d`).
//! - Surfaces composing a plane, a shape, and a position (`Surface2d`).
//!
//! Design notes:
//! - Float32 throughout; operations favor clarity and reproducibility.
//! - Orientation state lives in the plane's unit normal; every rotation
//!   path re-normalizes it so drift never accumulates.
//! - Degenerate inputs fall back deterministically instead of panicking
//!   or producing non-finite values.

mod plane;
mod shape;
mod surface;

pub use plane::Plane;
pub use shape::Shape2d;
pub use surface::Surface2d;
