//! Read-only skeleton tables for the renderer and editor

use wasm_bindgen::prelude::*;

use crate::skeleton::{Joint, JOINT_DEFS, PLAYER_DEFS, SEGMENTS};

/// Label of joint `index`, e.g. "LeftKnee"
#[wasm_bindgen]
pub fn joint_name(index: u32) -> Option<String> {
    Joint::from_index(index as usize).map(|j| j.name().to_string())
}

/// 5 f64 per segment: `[end_a, end_b, length, midpoint_radius, visible]`
#[wasm_bindgen]
pub fn segment_table() -> Vec<f64> {
    SEGMENTS
        .iter()
        .flat_map(|s| {
            [
                s.ends[0].index() as f64,
                s.ends[1].index() as f64,
                s.length,
                s.midpoint_radius,
                if s.visible { 1.0 } else { 0.0 },
            ]
        })
        .collect()
}

/// 2 f64 per joint: `[radius, draggable]`
#[wasm_bindgen]
pub fn joint_table() -> Vec<f64> {
    JOINT_DEFS
        .iter()
        .flat_map(|d| [d.radius, if d.draggable { 1.0 } else { 0.0 }])
        .collect()
}

/// RGB of `player`, components in [0, 1]
#[wasm_bindgen]
pub fn player_color(player: u32) -> Option<Vec<f64>> {
    PLAYER_DEFS.get(player as usize).map(|d| d.color.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_table_layout() {
        let t = segment_table();
        assert_eq!(t.len(), SEGMENTS.len() * 5);
        // neck-head is last
        assert_eq!(&t[t.len() - 5..], &[21.0, 22.0, 0.165, 0.05, 1.0]);
    }

    #[test]
    fn test_joint_lookup() {
        assert_eq!(joint_name(6).as_deref(), Some("LeftKnee"));
        assert_eq!(joint_name(23), None);
        assert_eq!(joint_table().len(), 46);
    }

    #[test]
    fn test_player_colors() {
        assert_eq!(player_color(0), Some(vec![1.0, 0.0, 0.0]));
        assert_eq!(player_color(2), None);
    }
}
