//! Reorientation of a whole two-player position
//!
//! The spatial part moves every joint; the swap bit additionally exchanges
//! which body is player 0. Swapping commutes with the spatial part, so the
//! two compose independently.

use crate::geometry::{Reorientation, V3};
use crate::skeleton::{Position, PlayerJoint, PLAYER_JOINTS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionReorientation {
    pub reorientation: Reorientation,
    pub swap_players: bool,
}

impl PositionReorientation {
    pub fn new(reorientation: Reorientation, swap_players: bool) -> Self {
        Self { reorientation, swap_players }
    }

    /// Leaves every position as it is
    pub fn identity() -> Self {
        Self::new(Reorientation::identity(), false)
    }

    /// Exchanges the players and nothing else
    pub fn swap() -> Self {
        Self::new(Reorientation::identity(), true)
    }

    pub fn apply(&self, position: &Position) -> Position {
        let mut r = *position;
        for pj in PLAYER_JOINTS {
            r.set(pj, self.reorientation.apply(position.get(pj)));
        }
        if self.swap_players {
            r = r.swapped();
        }
        r
    }

    /// Where `pj` ends up after `apply`, without building the whole position
    pub fn apply_joint(&self, position: &Position, pj: PlayerJoint) -> V3 {
        let source = if self.swap_players { pj.opposite() } else { pj };
        self.reorientation.apply(position.get(source))
    }

    /// Swapping is its own inverse, so only the spatial part is inverted
    pub fn inverse(&self) -> Self {
        Self::new(self.reorientation.inverse(), self.swap_players)
    }

    /// First `self`, then `then`
    pub fn compose(&self, then: &Self) -> Self {
        Self::new(
            self.reorientation.compose(&then.reorientation),
            self.swap_players != then.swap_players,
        )
    }
}
