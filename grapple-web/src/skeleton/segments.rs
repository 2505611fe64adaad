//! Bone table - the length constraints between joints of one body
//!
//! Lengths are rest lengths in meters. The invisible entries (wrist-fingers,
//! shoulder-shoulder, hip-hip) are not drawn but still hold the hand and the
//! torso in shape.

use super::joint::Joint::{self, *};

/// A length constraint between two joints of the same player
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub ends: [Joint; 2],
    /// Rest length (meters)
    pub length: f64,
    /// Thickness at the middle of the bone, rendering only
    pub midpoint_radius: f64,
    /// Rendering only
    pub visible: bool,
}

const fn seg(a: Joint, b: Joint, length: f64, midpoint_radius: f64, visible: bool) -> Segment {
    Segment { ends: [a, b], length, midpoint_radius, visible }
}

pub const SEGMENT_COUNT: usize = 29;

/// Solver processes these in order
pub const SEGMENTS: [Segment; SEGMENT_COUNT] = [
    seg(LeftToe, LeftHeel, 0.23, 0.025, true),
    seg(LeftToe, LeftAnkle, 0.18, 0.025, true),
    seg(LeftHeel, LeftAnkle, 0.09, 0.025, true),
    seg(LeftAnkle, LeftKnee, 0.42, 0.055, true),
    seg(LeftKnee, LeftHip, 0.44, 0.085, true),
    seg(LeftHip, Core, 0.27, 0.1, true),
    seg(Core, LeftShoulder, 0.37, 0.075, true),
    seg(LeftShoulder, LeftElbow, 0.29, 0.06, true),
    seg(LeftElbow, LeftWrist, 0.26, 0.03, true),
    seg(LeftWrist, LeftHand, 0.08, 0.02, true),
    seg(LeftHand, LeftFingers, 0.08, 0.02, true),
    seg(LeftWrist, LeftFingers, 0.14, 0.02, false),

    seg(RightToe, RightHeel, 0.23, 0.025, true),
    seg(RightToe, RightAnkle, 0.18, 0.025, true),
    seg(RightHeel, RightAnkle, 0.09, 0.025, true),
    seg(RightAnkle, RightKnee, 0.42, 0.055, true),
    seg(RightKnee, RightHip, 0.44, 0.085, true),
    seg(RightHip, Core, 0.27, 0.1, true),
    seg(Core, RightShoulder, 0.37, 0.075, true),
    seg(RightShoulder, RightElbow, 0.29, 0.06, true),
    seg(RightElbow, RightWrist, 0.27, 0.03, true),
    seg(RightWrist, RightHand, 0.08, 0.02, true),
    seg(RightHand, RightFingers, 0.08, 0.02, true),
    seg(RightWrist, RightFingers, 0.14, 0.02, false),

    seg(LeftShoulder, RightShoulder, 0.34, 0.1, false),
    seg(LeftHip, RightHip, 0.22, 0.1, false),

    seg(LeftShoulder, Neck, 0.175, 0.065, true),
    seg(RightShoulder, Neck, 0.175, 0.065, true),
    seg(Neck, Head, 0.165, 0.05, true),
];

/// Segments touching `joint`
pub fn segments_of(joint: Joint) -> impl Iterator<Item = &'static Segment> {
    SEGMENTS.iter().filter(move |s| s.ends.contains(&joint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::joint::JOINTS;

    #[test]
    fn test_table_shape() {
        assert_eq!(SEGMENTS.len(), 29);
        assert_eq!(SEGMENTS.iter().filter(|s| !s.visible).count(), 4);
        for s in SEGMENTS.iter() {
            assert!(s.length > 0.0);
            assert_ne!(s.ends[0], s.ends[1]);
        }
    }

    #[test]
    fn test_every_joint_is_constrained() {
        for joint in JOINTS {
            assert!(segments_of(joint).count() > 0, "{} has no segment", joint);
        }
    }

    #[test]
    fn test_triangles_are_satisfiable() {
        // foot, hand, pelvis and shoulder girdle triangles
        let triangles = [
            (0, 1, 2),
            (9, 10, 11),
            (5, 17, 25),
            (6, 18, 24),
            (24, 26, 27),
        ];
        for (a, b, c) in triangles {
            let (a, b, c) = (SEGMENTS[a].length, SEGMENTS[b].length, SEGMENTS[c].length);
            assert!(a < b + c && b < a + c && c < a + b);
        }
    }
}
