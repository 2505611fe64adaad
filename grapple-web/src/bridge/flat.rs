//! Flat buffer layouts shared with JavaScript
//!
//! A position is 138 f64: player 0 then player 1, each joint in ordinal
//! order, x/y/z per joint. A position reorientation is 6 f64:
//! `[offset.x, offset.y, offset.z, angle, mirror, swap]` with the flags as 0/1.

use crate::error::PoseError;
use crate::geometry::{Reorientation, V3};
use crate::skeleton::{Joint, PlayerJoint, Position, PLAYER_COUNT, PLAYER_JOINTS};
use crate::symmetry::PositionReorientation;

pub const POSITION_LEN: usize = PLAYER_JOINTS.len() * 3;
pub const REORIENTATION_LEN: usize = 6;

pub fn position_from_flat(data: &[f64]) -> Result<Position, PoseError> {
    if data.len() != POSITION_LEN {
        return Err(PoseError::InvalidLength {
            what: "position",
            got: data.len(),
            expected: POSITION_LEN,
        });
    }
    if let Some(i) = data.iter().position(|c| !c.is_finite()) {
        return Err(PoseError::NonFinite(i));
    }

    let mut p = Position::default();
    for (pj, xyz) in PLAYER_JOINTS.iter().zip(data.chunks_exact(3)) {
        p.set(*pj, V3::new(xyz[0], xyz[1], xyz[2]));
    }
    Ok(p)
}

pub fn position_to_flat(position: &Position) -> Vec<f64> {
    let mut out = Vec::with_capacity(POSITION_LEN);
    for (_, v) in position.iter() {
        out.extend_from_slice(&[v.x, v.y, v.z]);
    }
    out
}

pub fn reorientation_from_flat(data: &[f64]) -> Result<PositionReorientation, PoseError> {
    if data.len() != REORIENTATION_LEN {
        return Err(PoseError::InvalidLength {
            what: "reorientation",
            got: data.len(),
            expected: REORIENTATION_LEN,
        });
    }
    if let Some(i) = data.iter().position(|c| !c.is_finite()) {
        return Err(PoseError::NonFinite(i));
    }

    let offset = V3::new(data[0], data[1], data[2]);
    Ok(PositionReorientation::new(
        Reorientation::new(offset, data[3], data[4] != 0.0),
        data[5] != 0.0,
    ))
}

pub fn reorientation_to_flat(r: &PositionReorientation) -> Vec<f64> {
    let o = r.reorientation.offset;
    vec![
        o.x,
        o.y,
        o.z,
        r.reorientation.angle,
        if r.reorientation.mirror { 1.0 } else { 0.0 },
        if r.swap_players { 1.0 } else { 0.0 },
    ]
}

/// Both halves of the pin must be given together
pub fn fixed_joint_from_indices(
    player: Option<u32>,
    joint: Option<u32>,
) -> Result<Option<PlayerJoint>, PoseError> {
    match (player, joint) {
        (None, None) => Ok(None),
        (Some(p), Some(j)) => {
            let p = p as usize;
            if p >= PLAYER_COUNT {
                return Err(PoseError::UnknownPlayer(p));
            }
            let joint = Joint::from_index(j as usize).ok_or(PoseError::UnknownJoint(j as usize))?;
            Ok(Some(PlayerJoint::new(p, joint)))
        }
        _ => Err(PoseError::IncompleteFixedJoint),
    }
}
