//! gridfill - cell range selection and copy/paste/fill for browser data grids
//!
//! Implements the data side of a spreadsheet-like grid's selection features
//! via WebAssembly:
//! - Rectangular range selection with non-contiguous range merge
//! - Drag-fill with vertical/horizontal/corner target resolution
//! - Value replication that tiles a source range across a larger target
//! - TSV clipboard copy/paste with Excel-style quoting
//!
//! Rendering, virtualization, and DOM event wiring stay in the embedding
//! grid; this crate only computes ranges and writes records.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridFill } from 'gridfill';
//! await init();
//! const engine = new GridFill(columns);
//! engine.load_rows(rows);
//! engine.set_selection({ fromRow: 1, toRow: 1, fromCell: 1, toCell: 1 });
//! engine.grab_fill_handle();
//! engine.drag_to(3, 1);
//! engine.end_drag();
//! ```

pub mod clipboard;
pub mod engine;
pub mod error;
pub mod fill;
pub mod gesture;
pub mod grid;
pub mod types;

use wasm_bindgen::prelude::*;

// Re-export the main engine struct
pub use engine::GridFill;

pub use error::GridfillError;
pub use types::*;

/// Resolve the drag-fill target ranges for a selection extension.
///
/// Takes the previous and extended selected ranges as
/// `{fromRow, toRow, fromCell, toCell}` objects and returns
/// `{vertical, horizontal, corner}` with a range or `null` per axis.
///
/// # Errors
/// Returns an error if either range has inverted coordinates.
#[wasm_bindgen]
pub fn resolve_fill_targets(previous: JsValue, selected: JsValue) -> Result<JsValue, JsValue> {
    let previous: CellRange =
        serde_wasm_bindgen::from_value(previous).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let selected: CellRange =
        serde_wasm_bindgen::from_value(selected).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let targets = fill::resolve_targets(&previous, &selected)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&targets)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
