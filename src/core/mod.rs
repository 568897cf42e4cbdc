//! Core Primitives
//!
//! Geometry and timekeeping shared by the game modules.
//!
//! - `aabb`: Axis-aligned hit boxes with strict overlap
//! - `clock`: Elapsed play time and its `MM:SS` rendering

pub mod aabb;
pub mod clock;

pub use aabb::Aabb;
pub use clock::SessionClock;
