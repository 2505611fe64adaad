//! Physics module - bone-length relaxation
//!
//! Re-exports only. All logic in submodules.

mod spring;

pub use spring::{
    spring, spring_position, max_segment_error,
    SpringConfig, SpringReport, SpringSolver,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, DEGENERATE_LENGTH,
};
