//! Symmetry module - position reorientations and equivalence detection
//!
//! Re-exports only. All logic in submodules.

mod position_reorientation;
mod detector;

pub use position_reorientation::PositionReorientation;
pub use detector::{is_reoriented, LANDMARKS};
