//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod flat;
mod pose_api;
mod tables;

pub use pose_api::{
    set_spring_params,
    spring_flat,
    is_reoriented_flat,
    apply_reorientation_flat,
    inverse_reorientation_flat,
    compose_reorientations_flat,
};

pub use tables::{joint_name, segment_table, joint_table, player_color};
