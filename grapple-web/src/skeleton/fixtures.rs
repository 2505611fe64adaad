//! Hand-placed test poses, relaxed onto the bone table

use proptest::prelude::*;

use crate::geometry::{Reorientation, V3};
use crate::physics::spring;
use super::joint::{Joint::*, JOINTS};
use super::player::PLAYER_JOINTS;
use super::position::{Player, Position};

/// Upright body at the origin facing +z, left side at +x. Roughly placed;
/// not yet on the bone lengths.
pub(crate) fn rough_standing() -> Player {
    let mut p = Player::default();
    let sides = [
        (1.0, LeftToe, LeftHeel, LeftAnkle, LeftKnee, LeftHip),
        (-1.0, RightToe, RightHeel, RightAnkle, RightKnee, RightHip),
    ];
    for (s, toe, heel, ankle, knee, hip) in sides {
        p.set(toe, V3::new(0.11 * s, 0.0, 0.159));
        p.set(heel, V3::new(0.11 * s, 0.0, -0.071));
        p.set(ankle, V3::new(0.11 * s, 0.055, 0.0));
        p.set(knee, V3::new(0.11 * s, 0.475, 0.02));
        p.set(hip, V3::new(0.11 * s, 0.915, 0.0));
    }
    let arms = [
        (1.0, 0.94, LeftShoulder, LeftElbow, LeftWrist, LeftHand, LeftFingers),
        (-1.0, 0.93, RightShoulder, RightElbow, RightWrist, RightHand, RightFingers),
    ];
    for (s, wrist_y, shoulder, elbow, wrist, hand, fingers) in arms {
        p.set(shoulder, V3::new(0.17 * s, 1.49, 0.0));
        p.set(elbow, V3::new(0.17 * s, 1.20, 0.0));
        p.set(wrist, V3::new(0.17 * s, wrist_y, 0.0));
        p.set(hand, V3::new(0.17 * s, wrist_y - 0.08, 0.0));
        p.set(fingers, V3::new(0.17 * s, wrist_y - 0.14, 0.03));
    }
    p.set(Core, V3::new(0.0, 1.16, 0.0));
    p.set(Neck, V3::new(0.0, 1.535, 0.0));
    p.set(Head, V3::new(0.0, 1.70, 0.0));
    p
}

/// Player 0 reaching forward with the left arm; player 1 a metre away,
/// turned a quarter, right knee lifted. No symmetry maps one onto the other.
pub(crate) fn reference_position() -> Position {
    let mut reaching = rough_standing();
    reaching.set(LeftElbow, V3::new(0.17, 1.49, 0.29));
    reaching.set(LeftWrist, V3::new(0.17, 1.49, 0.55));
    reaching.set(LeftHand, V3::new(0.17, 1.49, 0.63));
    reaching.set(LeftFingers, V3::new(0.17, 1.47, 0.69));

    let mut lifted = rough_standing();
    lifted.set(RightKnee, V3::new(-0.11, 0.6, 0.3));
    lifted.set(RightAnkle, V3::new(-0.11, 0.25, 0.45));
    lifted.set(RightHeel, V3::new(-0.11, 0.17, 0.42));
    lifted.set(RightToe, V3::new(-0.11, 0.24, 0.62));

    let mut lifted = spring(&lifted, None);
    let place = Reorientation::new(V3::new(1.0, 0.0, 0.6), std::f64::consts::FRAC_PI_2, false);
    for joint in JOINTS {
        lifted.set(joint, place.apply(lifted.get(joint)));
    }

    Position::new([spring(&reaching, None), lifted])
}

/// Arbitrary coordinates in a 4 m cube, no skeleton constraints
pub(crate) fn any_position() -> impl Strategy<Value = Position> {
    prop::collection::vec(-2.0..2.0f64, 3 * PLAYER_JOINTS.len()).prop_map(|coords| {
        let mut p = Position::default();
        for (pj, xyz) in PLAYER_JOINTS.iter().zip(coords.chunks_exact(3)) {
            p.set(*pj, V3::new(xyz[0], xyz[1], xyz[2]));
        }
        p
    })
}
