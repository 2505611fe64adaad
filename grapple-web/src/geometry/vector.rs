//! 3D point type and the few helpers the pose code needs
//!
//! Coordinates are meters, y is up (the mat is the xz plane).

use nalgebra::{Rotation3, Vector3};

/// A point or offset in meters
pub type V3 = Vector3<f64>;

/// Squared euclidean distance between two points
pub fn distance_squared(a: V3, b: V3) -> f64 {
    (a - b).norm_squared()
}

/// Rotate around the vertical (+Y) axis by `angle` radians
pub fn yaw_rotate(angle: f64, v: V3) -> V3 {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * v
}

/// Reflect through the yz plane
pub fn mirror_x(v: V3) -> V3 {
    V3::new(-v.x, v.y, v.z)
}
