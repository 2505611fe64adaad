//! Errors raised at the data boundary (flat buffers from JS, sequence input)
//!
//! The numeric core never fails; everything here is input validation.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    #[error("invalid {what} data length: {got} (expected {expected})")]
    InvalidLength {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("non-finite coordinate at index {0}")]
    NonFinite(usize),

    #[error("unknown joint index {0}")]
    UnknownJoint(usize),

    #[error("unknown player {0}")]
    UnknownPlayer(usize),

    #[error("fixed joint given without a player (or the reverse)")]
    IncompleteFixedJoint,

    #[error("a sequence needs at least 2 positions, got {0}")]
    SequenceTooShort(usize),
}

impl From<PoseError> for JsValue {
    fn from(err: PoseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
