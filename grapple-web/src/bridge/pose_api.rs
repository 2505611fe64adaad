//! Solver and detector entry points for the editor
//!
//! The editor calls `spring_flat` on every drag update and
//! `is_reoriented_flat` when deduplicating frames. Solver tuning lives in a
//! thread-local so JS can adjust it without passing it on every call.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::physics::{SpringConfig, SpringSolver};
use crate::symmetry::is_reoriented;
use super::flat::{
    fixed_joint_from_indices, position_from_flat, position_to_flat,
    reorientation_from_flat, reorientation_to_flat,
};

thread_local! {
    static SPRING_CONFIG: RefCell<SpringConfig> = RefCell::new(SpringConfig::default());
}

/// Current solver tuning
pub fn spring_config() -> SpringConfig {
    SPRING_CONFIG.with(|cell| *cell.borrow())
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Tune the relaxation solver (pass count and accepted bone error in meters)
#[wasm_bindgen]
pub fn set_spring_params(max_iterations: u32, tolerance: f64) {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        web_sys::console::warn_1(&format!("Ignoring spring tolerance {}", tolerance).into());
        return;
    }
    SPRING_CONFIG.with(|cell| {
        *cell.borrow_mut() = SpringConfig::new(max_iterations, tolerance);
    });
    web_sys::console::log_1(
        &format!("🦴 Spring: {} passes, tolerance {:.4} m", max_iterations, tolerance).into(),
    );
}

/// Relax a flat position (138 f64), optionally pinning one joint
///
/// Returns the corrected position in the same layout.
#[wasm_bindgen]
pub fn spring_flat(
    data: &[f64],
    fixed_player: Option<u32>,
    fixed_joint: Option<u32>,
) -> Result<Vec<f64>, JsValue> {
    let mut position = position_from_flat(data)?;
    let fixed = fixed_joint_from_indices(fixed_player, fixed_joint)?;

    let report = SpringSolver::new(spring_config()).solve_position(&mut position, fixed);
    if !report.converged {
        web_sys::console::warn_1(
            &format!(
                "Spring stopped after {} passes, max bone error {:.4} m",
                report.iterations, report.max_error
            )
            .into(),
        );
    }
    Ok(position_to_flat(&position))
}

/// Reorientation `[ox, oy, oz, angle, mirror, swap]` taking `reference` to
/// `candidate`, or `undefined` if they are different positions
#[wasm_bindgen]
pub fn is_reoriented_flat(reference: &[f64], candidate: &[f64]) -> Result<Option<Vec<f64>>, JsValue> {
    let reference = position_from_flat(reference)?;
    let candidate = position_from_flat(candidate)?;
    Ok(is_reoriented(&reference, &candidate).map(|r| reorientation_to_flat(&r)))
}

/// Apply a flat reorientation to a flat position
#[wasm_bindgen]
pub fn apply_reorientation_flat(reorientation: &[f64], data: &[f64]) -> Result<Vec<f64>, JsValue> {
    let r = reorientation_from_flat(reorientation)?;
    let position = position_from_flat(data)?;
    Ok(position_to_flat(&r.apply(&position)))
}

/// Inverse of a flat reorientation
#[wasm_bindgen]
pub fn inverse_reorientation_flat(reorientation: &[f64]) -> Result<Vec<f64>, JsValue> {
    let r = reorientation_from_flat(reorientation)?;
    Ok(reorientation_to_flat(&r.inverse()))
}

/// `first` then `then`, as one flat reorientation
#[wasm_bindgen]
pub fn compose_reorientations_flat(first: &[f64], then: &[f64]) -> Result<Vec<f64>, JsValue> {
    let a = reorientation_from_flat(first)?;
    let b = reorientation_from_flat(then)?;
    Ok(reorientation_to_flat(&a.compose(&b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::DEFAULT_MAX_ITERATIONS;

    #[test]
    fn test_default_config_until_tuned() {
        assert_eq!(spring_config().max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
