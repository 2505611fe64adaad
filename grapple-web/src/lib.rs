//! Grapple Web - two-player pose core for the grappling position editor
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The numeric core (`physics::spring`, `symmetry::is_reoriented`) is plain
//! Rust over `Copy` values and is usable without the JS bridge.

pub mod geometry;
pub mod skeleton;
pub mod sequence;
pub mod physics;
pub mod symmetry;
pub mod error;
mod bridge;

use wasm_bindgen::prelude::*;

pub use geometry::{Reorientation, V3};
pub use skeleton::{
    basically_same, between, opponent, Joint, Player, PlayerJoint, PlayerNum, Position, Segment,
    SEGMENTS,
};
pub use sequence::{PositionInSequence, Sequence};
pub use physics::{spring, spring_position, SpringConfig, SpringSolver};
pub use symmetry::{is_reoriented, PositionReorientation};
pub use error::PoseError;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    spring_flat, is_reoriented_flat, apply_reorientation_flat,
    inverse_reorientation_flat, compose_reorientations_flat, set_spring_params,
    joint_name, segment_table, joint_table, player_color,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Report the loaded skeleton to the console
#[wasm_bindgen]
pub fn init() {
    console_log!(
        "✅ Pose core ready: {} joints per player, {} segments",
        skeleton::JOINT_COUNT,
        SEGMENTS.len()
    );
}
