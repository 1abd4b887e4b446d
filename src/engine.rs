//! The embeddable grid-fill component.
//!
//! `GridFill` owns the dataset, the selection, and the drag gesture state,
//! and is the struct exported to JavaScript. The host wires pointer events
//! to `grab_fill_handle` / `drag_to` / `end_drag` and places `copy` output
//! on the clipboard; a registered render callback fires once per mutation
//! batch, never per cell.

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;

use crate::clipboard::{self, ClipboardOptions};
use crate::fill::{self, FillReport};
use crate::gesture::{self, DragInput, DragState};
use crate::grid::{GridData, MemoryGrid};
use crate::types::{CellRange, Column, Record, SelectionModel};

/// Selection and drag-fill engine over an in-memory row dataset.
#[wasm_bindgen]
pub struct GridFill {
    grid: MemoryGrid,
    selection: SelectionModel,
    drag: DragState,
    options: ClipboardOptions,
    #[cfg(target_arch = "wasm32")]
    render_callback: Option<Function>,
}

// ============================================================================
// Shared implementation (native library API; wrapped by the wasm exports)
// ============================================================================

impl GridFill {
    /// Create an engine with the given column set and no rows.
    ///
    /// # Errors
    /// Returns [`crate::GridfillError::NoColumns`] for an empty column set.
    pub fn from_columns(columns: Vec<Column>) -> crate::error::Result<Self> {
        Ok(Self {
            grid: MemoryGrid::new(columns)?,
            selection: SelectionModel::new(),
            drag: DragState::Idle,
            options: ClipboardOptions::default(),
            #[cfg(target_arch = "wasm32")]
            render_callback: None,
        })
    }

    /// Replace the dataset. Clears selection and any in-flight gesture.
    pub fn load_records(&mut self, rows: Vec<Record>) {
        self.grid.set_rows(rows);
        self.selection.clear();
        self.drag = DragState::Idle;
    }

    /// The backing grid.
    #[must_use]
    pub fn grid(&self) -> &MemoryGrid {
        &self.grid
    }

    /// The record at `row`, if any.
    #[must_use]
    pub fn record(&self, row: u32) -> Option<&Record> {
        self.grid.data_item(row)
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Replace the selection with a single range.
    pub fn select(&mut self, range: CellRange) {
        self.selection.set_range(range);
    }

    /// Add a range to the selection, coalescing where possible.
    pub fn add_selection_range(&mut self, range: CellRange) {
        self.selection.add_range(range);
    }

    /// Deselect everything.
    pub fn clear_selection_ranges(&mut self) {
        self.selection.clear();
    }

    /// Override copy/paste behavior.
    pub fn set_clipboard_options(&mut self, options: ClipboardOptions) {
        self.options = options;
    }

    /// Grab the fill handle on the active selected range.
    ///
    /// Returns `false` (and stays idle) when nothing is selected.
    pub fn begin_fill_drag(&mut self) -> bool {
        let Some(origin) = self.selection.active_range().copied() else {
            return false;
        };
        self.drag = gesture::step(self.drag, DragInput::Grab { origin }).state;
        true
    }

    /// Extend the in-flight drag toward the pointer cell.
    pub fn extend_fill_drag(&mut self, row: u32, cell: u32) {
        self.drag = gesture::step(self.drag, DragInput::Move { row, cell }).state;
    }

    /// Release the drag: classify the extension, replicate the source range
    /// into the targets, and select the extended range.
    ///
    /// A drag that never left the origin is a no-op and returns an empty
    /// report.
    ///
    /// # Errors
    /// Propagates replication errors; the gesture returns to idle either way.
    pub fn finish_fill_drag(&mut self) -> crate::error::Result<FillReport> {
        let step = gesture::step(self.drag, DragInput::Release);
        self.drag = step.state;
        let Some(request) = step.fill else {
            return Ok(FillReport::default());
        };
        let report = fill::apply(&mut self.grid, &request.source, &request.target)?;
        self.selection.set_range(request.target);
        Ok(report)
    }

    /// Abort the drag, discarding gesture state without touching the data.
    pub fn cancel_fill_drag(&mut self) {
        self.drag = gesture::step(self.drag, DragInput::Abort).state;
    }

    /// Whether a drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The extended range of the in-flight drag (for visual feedback).
    #[must_use]
    pub fn drag_range(&self) -> Option<CellRange> {
        match self.drag {
            DragState::Dragging { current, .. } => Some(current),
            DragState::Idle => None,
        }
    }

    /// Serialize the active selected range as TSV for the host clipboard.
    ///
    /// Returns an empty string when nothing is selected.
    ///
    /// # Errors
    /// Propagates range guard failures.
    pub fn copy_active_range(&self) -> crate::error::Result<String> {
        match self.selection.active_range() {
            Some(range) => clipboard::copy_tsv(&self.grid, range, &self.options),
            None => Ok(String::new()),
        }
    }

    /// Paste TSV text into the active selected range.
    ///
    /// # Errors
    /// Propagates clipboard parse and range guard failures.
    pub fn paste_into_active_range(&mut self, text: &str) -> crate::error::Result<FillReport> {
        let Some(range) = self.selection.active_range().copied() else {
            return Ok(FillReport::default());
        };
        clipboard::paste_tsv(&mut self.grid, text, &range, &self.options)
    }
}

// ============================================================================
// WASM32 exports
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridFill {
    /// Create an engine from a JS array of column definitions
    /// (`[{id, field, name}]`).
    #[wasm_bindgen(constructor)]
    pub fn new(columns: JsValue) -> Result<GridFill, JsValue> {
        console_error_panic_hook::set_once();
        let columns: Vec<Column> =
            serde_wasm_bindgen::from_value(columns).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_columns(columns)?)
    }

    /// Replace the dataset with a JS array of row records.
    #[wasm_bindgen]
    pub fn load_rows(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<Record> =
            serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.load_records(rows);
        Ok(())
    }

    /// Replace the selection with the given range.
    #[wasm_bindgen]
    pub fn set_selection(&mut self, range: JsValue) -> Result<(), JsValue> {
        self.select(range_from_js(range)?);
        Ok(())
    }

    /// Add a range to the selection.
    #[wasm_bindgen]
    pub fn add_selection(&mut self, range: JsValue) -> Result<(), JsValue> {
        self.add_selection_range(range_from_js(range)?);
        Ok(())
    }

    /// Selected ranges as a JS array.
    #[wasm_bindgen]
    pub fn get_selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.selection.ranges())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deselect everything.
    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.clear_selection_ranges();
    }

    /// Grab the fill handle on the active selected range.
    #[wasm_bindgen]
    pub fn grab_fill_handle(&mut self) -> bool {
        self.begin_fill_drag()
    }

    /// Extend the drag toward the pointer cell.
    #[wasm_bindgen]
    pub fn drag_to(&mut self, row: u32, cell: u32) {
        self.extend_fill_drag(row, cell);
    }

    /// Release the drag and apply the fill. Returns the fill report.
    #[wasm_bindgen]
    pub fn end_drag(&mut self) -> Result<JsValue, JsValue> {
        let report = self.finish_fill_drag()?;
        if report.rows_written > 0 {
            self.notify_render();
        }
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Abort the drag without filling.
    #[wasm_bindgen]
    pub fn abort_drag(&mut self) {
        self.cancel_fill_drag();
    }

    /// The extended drag range, for overlay feedback, or `undefined`.
    #[wasm_bindgen]
    pub fn get_drag_range(&self) -> Result<JsValue, JsValue> {
        match self.drag_range() {
            Some(range) => serde_wasm_bindgen::to_value(&range)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// TSV for the active selected range, for the host to place on the
    /// clipboard.
    #[wasm_bindgen]
    pub fn copy(&self) -> Result<String, JsValue> {
        Ok(self.copy_active_range()?)
    }

    /// Paste TSV text into the active selected range. Returns the fill
    /// report.
    #[wasm_bindgen]
    pub fn paste(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let report = self.paste_into_active_range(text)?;
        if report.rows_written > 0 {
            self.notify_render();
        }
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The record at `row` as a JS object, or `undefined`.
    #[wasm_bindgen]
    pub fn data_item(&self, row: u32) -> Result<JsValue, JsValue> {
        match self.record(row) {
            Some(record) => serde_wasm_bindgen::to_value(record)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Number of rows loaded.
    #[wasm_bindgen]
    pub fn row_count(&self) -> u32 {
        self.grid.row_count()
    }

    /// Register a callback invoked once after each mutation batch.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.render_callback = callback;
    }
}

#[cfg(target_arch = "wasm32")]
impl GridFill {
    fn notify_render(&self) {
        if let Some(callback) = &self.render_callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn range_from_js(range: JsValue) -> Result<CellRange, JsValue> {
    serde_wasm_bindgen::from_value(range).map_err(|e| JsValue::from_str(&e.to_string()))
}
