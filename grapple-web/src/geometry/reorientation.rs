//! Rigid reorientation of the scene
//!
//! A reorientation mirrors (optionally), turns around the vertical axis and
//! then translates: `p ↦ R_y(angle) · M^mirror · p + offset`, where `M`
//! negates x. Gravity fixes "up", so only yaw is a meaningful rotation for
//! poses on the mat.

use super::vector::{mirror_x, yaw_rotate, V3};

/// Mirror + yaw + translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reorientation {
    /// Translation applied last (meters)
    pub offset: V3,
    /// Rotation around +Y (radians)
    pub angle: f64,
    /// Reflect x before rotating
    pub mirror: bool,
}

impl Reorientation {
    pub fn new(offset: V3, angle: f64, mirror: bool) -> Self {
        Self { offset, angle, mirror }
    }

    /// No mirror, no turn, no translation
    pub fn identity() -> Self {
        Self::new(V3::zeros(), 0.0, false)
    }

    pub fn translation(offset: V3) -> Self {
        Self::new(offset, 0.0, false)
    }

    pub fn rotation(angle: f64) -> Self {
        Self::new(V3::zeros(), angle, false)
    }

    /// Mirror and rotate, without translating
    fn linear(&self, v: V3) -> V3 {
        let v = if self.mirror { mirror_x(v) } else { v };
        yaw_rotate(self.angle, v)
    }

    /// Map a point through this reorientation
    pub fn apply(&self, p: V3) -> V3 {
        self.linear(p) + self.offset
    }

    /// Undo this reorientation
    ///
    /// `M · R(-θ) = R(θ) · M`, so a mirrored reorientation is its own linear
    /// inverse and only the offset changes.
    pub fn inverse(&self) -> Self {
        let angle = if self.mirror { self.angle } else { -self.angle };
        let linear = Self::new(V3::zeros(), angle, self.mirror);
        Self::new(-linear.linear(self.offset), angle, self.mirror)
    }

    /// First `self`, then `then`
    pub fn compose(&self, then: &Self) -> Self {
        let angle = if then.mirror {
            then.angle - self.angle
        } else {
            then.angle + self.angle
        };
        Self::new(then.apply(self.offset), angle, self.mirror != then.mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_v3_eq(a: V3, b: V3) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_leaves_points_alone() {
        let p = V3::new(0.4, 1.1, -0.2);
        assert_eq!(Reorientation::identity().apply(p), p);
    }

    #[test]
    fn test_translation() {
        let r = Reorientation::translation(V3::new(1.0, 0.0, -2.0));
        assert_v3_eq(r.apply(V3::new(0.5, 0.5, 0.5)), V3::new(1.5, 0.5, -1.5));
    }

    #[test]
    fn test_mirror_then_rotate_then_translate() {
        let r = Reorientation::new(V3::new(0.0, 0.0, 1.0), FRAC_PI_2, true);
        // mirror: (1,0,0) -> (-1,0,0); quarter turn: -> (0,0,1); shift: -> (0,0,2)
        assert_v3_eq(r.apply(V3::new(1.0, 0.0, 0.0)), V3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        for mirror in [false, true] {
            let r = Reorientation::new(V3::new(0.3, -0.1, 2.0), 0.7, mirror);
            let p = V3::new(-1.0, 0.9, 0.25);
            assert_v3_eq(r.inverse().apply(r.apply(p)), p);
            assert_v3_eq(r.apply(r.inverse().apply(p)), p);
        }
    }

    #[test]
    fn test_compose_applies_first_then_second() {
        let a = Reorientation::new(V3::new(1.0, 0.0, 0.0), PI / 3.0, true);
        let b = Reorientation::new(V3::new(0.0, 0.2, -0.5), -1.1, false);
        let p = V3::new(0.2, 1.4, -0.6);
        assert_v3_eq(a.compose(&b).apply(p), b.apply(a.apply(p)));
        assert_v3_eq(b.compose(&a).apply(p), a.apply(b.apply(p)));
    }

    #[test]
    fn test_two_mirrors_cancel() {
        let m = Reorientation::new(V3::zeros(), 0.0, true);
        let twice = m.compose(&m);
        assert!(!twice.mirror);
        assert_eq!(twice.angle, 0.0);
    }

    #[test]
    fn test_compose_with_identity_is_exact() {
        let r = Reorientation::new(V3::new(0.5, 0.0, -0.25), 2.0, true);
        assert_eq!(Reorientation::identity().compose(&r), r);
        assert_eq!(r.compose(&Reorientation::identity()), r);
    }
}
