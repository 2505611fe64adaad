//! Equivalence detection - is one position a reoriented copy of another?
//!
//! For each hypothesis (swap or not, mirror or not) the yaw and translation
//! are solved in closed form from a few torso landmarks of both players,
//! then the result is checked against all 46 joints with `basically_same`.
//!
//! Hypotheses are tried in a fixed order, so the answer is deterministic:
//! unswapped before swapped, unmirrored before mirrored.

use crate::geometry::{mirror_x, yaw_rotate, Reorientation, V3};
use crate::skeleton::{basically_same, Joint, PlayerJoint, Position, PLAYERS};
use super::position_reorientation::PositionReorientation;

/// Joints used to solve for the transform (per player)
pub const LANDMARKS: [Joint; 7] = [
    Joint::Core,
    Joint::Neck,
    Joint::Head,
    Joint::LeftHip,
    Joint::RightHip,
    Joint::LeftShoulder,
    Joint::RightShoulder,
];

const LANDMARK_COUNT: usize = 2 * LANDMARKS.len();

/// (swap_players, mirror), in order of preference
const HYPOTHESES: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

/// Find a reorientation taking `reference` to `candidate`, if one exists
///
/// When several fit (symmetric poses), the first of `HYPOTHESES` wins. A
/// returned `r` always satisfies
/// `basically_same(&r.apply(reference), candidate)`.
pub fn is_reoriented(reference: &Position, candidate: &Position) -> Option<PositionReorientation> {
    HYPOTHESES.iter().find_map(|&(swap, mirror)| {
        let r = fit(reference, candidate, swap, mirror);
        basically_same(&r.apply(reference), candidate).then_some(r)
    })
}

/// Least-squares yaw + translation over the landmarks for one hypothesis
fn fit(reference: &Position, candidate: &Position, swap: bool, mirror: bool) -> PositionReorientation {
    // Pairs (reference point after mirroring, candidate point); with a swap,
    // candidate player p is matched against reference player 1 - p.
    let mut pairs = [(V3::zeros(), V3::zeros()); LANDMARK_COUNT];
    let keys = PLAYERS
        .iter()
        .flat_map(|&p| LANDMARKS.iter().map(move |&j| PlayerJoint::new(p, j)));
    for (pair, target) in pairs.iter_mut().zip(keys) {
        let source = if swap { target.opposite() } else { target };
        let from = reference.get(source);
        *pair = (if mirror { mirror_x(from) } else { from }, candidate.get(target));
    }

    let n = LANDMARK_COUNT as f64;
    let from_center = pairs.iter().fold(V3::zeros(), |acc, (f, _)| acc + f) / n;
    let to_center = pairs.iter().fold(V3::zeros(), |acc, (_, t)| acc + t) / n;

    // Maximise Σ v·R(θ)u in the xz plane: θ = atan2(Σ vx·uz − vz·ux, Σ vx·ux + vz·uz)
    let (mut sin_sum, mut cos_sum) = (0.0_f64, 0.0_f64);
    for (f, t) in pairs.iter() {
        let u = f - from_center;
        let v = t - to_center;
        sin_sum += v.x * u.z - v.z * u.x;
        cos_sum += v.x * u.x + v.z * u.z;
    }
    let angle = sin_sum.atan2(cos_sum);

    let offset = to_center - yaw_rotate(angle, from_center);

    PositionReorientation::new(Reorientation::new(offset, angle, mirror), swap)
}
