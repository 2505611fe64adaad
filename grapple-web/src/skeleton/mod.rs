//! Skeleton module - joints, players, bone table and pose containers
//!
//! Re-exports only. All logic in submodules.

mod joint;
mod player;
mod segments;
mod position;

#[cfg(test)]
pub(crate) mod fixtures;

pub use joint::{Joint, JointDef, JOINTS, JOINT_COUNT, JOINT_DEFS};
pub use player::{
    opponent, PlayerDef, PlayerJoint, PlayerNum,
    PLAYERS, PLAYER_COUNT, PLAYER_DEFS, PLAYER_JOINTS,
};
pub use segments::{segments_of, Segment, SEGMENTS, SEGMENT_COUNT};
pub use position::{
    basically_same, between, total_distance_squared,
    Player, Position, BASICALLY_SAME_EPSILON,
};
