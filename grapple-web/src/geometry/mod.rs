//! Geometry module - 3D points and rigid reorientations
//!
//! Re-exports only. All logic in submodules.

mod vector;
mod reorientation;

pub use vector::{V3, distance_squared, mirror_x, yaw_rotate};
pub use reorientation::Reorientation;
