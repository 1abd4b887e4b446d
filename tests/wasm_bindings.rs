//! Browser-side smoke tests for the wasm exports.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use wasm_bindgen_test::*;

use gridfill::resolve_fill_targets;

wasm_bindgen_test_configure!(run_in_browser);

fn range_js(from_row: u32, to_row: u32, from_cell: u32, to_cell: u32) -> wasm_bindgen::JsValue {
    serde_wasm_bindgen::to_value(&gridfill::types::CellRange::new(
        from_row, to_row, from_cell, to_cell,
    ))
    .unwrap()
}

#[wasm_bindgen_test]
fn resolve_targets_round_trips_through_js() {
    let result = resolve_fill_targets(range_js(1, 1, 1, 1), range_js(1, 3, 1, 1)).unwrap();
    let targets: gridfill::fill::FillTargets = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(
        targets.vertical,
        Some(gridfill::types::CellRange::new(2, 3, 1, 1))
    );
    assert!(targets.horizontal.is_none());
    assert!(targets.corner.is_none());
}

#[wasm_bindgen_test]
fn inverted_range_errors_across_the_boundary() {
    let result = resolve_fill_targets(range_js(1, 1, 1, 1), range_js(3, 1, 1, 1));
    // Inverted coordinates surface as a JS error string
    assert!(result.is_err());
}
