//! Sequences of positions, as handed over by the storage layer

use std::fmt;

use crate::error::PoseError;
use crate::skeleton::Position;

pub type SeqNum = usize;
pub type PosNum = usize;

/// A described movement: at least a start and an end position
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    description: String,
    positions: Vec<Position>,
}

impl Sequence {
    pub fn new(description: impl Into<String>, positions: Vec<Position>) -> Result<Self, PoseError> {
        if positions.len() < 2 {
            return Err(PoseError::SequenceTooShort(positions.len()));
        }
        Ok(Self { description: description.into(), positions })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position(&self, pos: PosNum) -> Option<&Position> {
        self.positions.get(pos)
    }

    /// Mutable access to one frame; the frame count cannot change this way
    pub fn position_mut(&mut self, pos: PosNum) -> Option<&mut Position> {
        self.positions.get_mut(pos)
    }

    /// One past the last position number
    pub fn end(&self) -> PosNum {
        self.positions.len()
    }
}

/// Address of one frame in a sequence collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionInSequence {
    pub sequence: SeqNum,
    pub position: PosNum,
}

impl fmt::Display for PositionInSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.sequence, self.position)
    }
}
