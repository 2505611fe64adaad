//! Player numbering and the (player, joint) key

use super::joint::{Joint, JOINTS, JOINT_COUNT};

/// 0 or 1
pub type PlayerNum = usize;

pub const PLAYER_COUNT: usize = 2;

pub const PLAYERS: [PlayerNum; PLAYER_COUNT] = [0, 1];

/// The other player
pub fn opponent(p: PlayerNum) -> PlayerNum {
    debug_assert!(p < PLAYER_COUNT, "player {} out of range", p);
    1 - p
}

/// Composite key into per-player-per-joint data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerJoint {
    pub player: PlayerNum,
    pub joint: Joint,
}

impl PlayerJoint {
    pub const fn new(player: PlayerNum, joint: Joint) -> Self {
        Self { player, joint }
    }

    /// Same joint on the other body
    pub fn opposite(self) -> Self {
        Self::new(opponent(self.player), self.joint)
    }
}

/// All 46 keys, player-major
pub const PLAYER_JOINTS: [PlayerJoint; PLAYER_COUNT * JOINT_COUNT] = {
    let mut out = [PlayerJoint::new(0, Joint::LeftToe); PLAYER_COUNT * JOINT_COUNT];
    let mut i = 0;
    while i < out.len() {
        out[i] = PlayerJoint::new(i / JOINT_COUNT, JOINTS[i % JOINT_COUNT]);
        i += 1;
    }
    out
};

/// Per-player display metadata
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerDef {
    /// RGB in [0, 1]
    pub color: [f64; 3],
}

pub const PLAYER_DEFS: [PlayerDef; PLAYER_COUNT] = [
    PlayerDef { color: [1.0, 0.0, 0.0] },
    PlayerDef { color: [0.0, 0.0, 1.0] },
];
