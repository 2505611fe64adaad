//! Pose containers - one body (`Player`) and both bodies (`Position`)

use std::ops::{Add, Sub};

use crate::geometry::{distance_squared, V3};
use super::joint::{Joint, JOINT_COUNT};
use super::player::{PlayerJoint, PlayerNum, PLAYER_COUNT, PLAYER_JOINTS};

/// Sum of squared joint distances below which two positions count as the same
pub const BASICALLY_SAME_EPSILON: f64 = 0.03;

/// Joint coordinates of a single body, indexed by joint ordinal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    joints: [V3; JOINT_COUNT],
}

impl Player {
    pub fn new(joints: [V3; JOINT_COUNT]) -> Self {
        Self { joints }
    }

    pub fn get(&self, joint: Joint) -> V3 {
        self.joints[joint.index()]
    }

    pub fn set(&mut self, joint: Joint, v: V3) {
        self.joints[joint.index()] = v;
    }

    pub fn joints(&self) -> &[V3; JOINT_COUNT] {
        &self.joints
    }

    pub fn joints_mut(&mut self) -> &mut [V3; JOINT_COUNT] {
        &mut self.joints
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new([V3::zeros(); JOINT_COUNT])
    }
}

/// Both bodies at one instant
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    players: [Player; PLAYER_COUNT],
}

impl Position {
    pub fn new(players: [Player; PLAYER_COUNT]) -> Self {
        Self { players }
    }

    pub fn get(&self, pj: PlayerJoint) -> V3 {
        self.players[pj.player].get(pj.joint)
    }

    pub fn set(&mut self, pj: PlayerJoint, v: V3) {
        self.players[pj.player].set(pj.joint, v);
    }

    pub fn player(&self, p: PlayerNum) -> &Player {
        &self.players[p]
    }

    pub fn player_mut(&mut self, p: PlayerNum) -> &mut Player {
        &mut self.players[p]
    }

    /// Same coordinates with the two bodies exchanged
    pub fn swapped(mut self) -> Self {
        self.players.swap(0, 1);
        self
    }

    /// Coordinates as (key, point) pairs, player-major
    pub fn iter(&self) -> impl Iterator<Item = (PlayerJoint, V3)> + '_ {
        PLAYER_JOINTS.iter().map(move |&pj| (pj, self.get(pj)))
    }
}

impl Add<V3> for Position {
    type Output = Position;

    fn add(mut self, off: V3) -> Position {
        for pj in PLAYER_JOINTS {
            self.set(pj, self.get(pj) + off);
        }
        self
    }
}

impl Sub<V3> for Position {
    type Output = Position;

    fn sub(self, off: V3) -> Position {
        self + -off
    }
}

/// Linear blend, `s = 0` gives `a`, `s = 1` gives `b`
pub fn between(a: &Position, b: &Position, s: f64) -> Position {
    let mut r = *a;
    for pj in PLAYER_JOINTS {
        r.set(pj, a.get(pj) + (b.get(pj) - a.get(pj)) * s);
    }
    r
}

/// Sum of squared per-joint distances over all 46 joints
pub fn total_distance_squared(a: &Position, b: &Position) -> f64 {
    PLAYER_JOINTS
        .iter()
        .map(|&pj| distance_squared(a.get(pj), b.get(pj)))
        .sum()
}

/// Equal up to `BASICALLY_SAME_EPSILON`
pub fn basically_same(a: &Position, b: &Position) -> bool {
    total_distance_squared(a, b) < BASICALLY_SAME_EPSILON
}
