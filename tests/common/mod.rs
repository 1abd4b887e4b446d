//! Common test utilities for the gridfill integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use serde_json::{json, Value};

use gridfill::grid::{GridData, MemoryGrid};
use gridfill::types::{Column, Record};

/// Columns `c0..cN`, each mapping to the record field of the same name.
#[must_use]
pub fn columns(count: u32) -> Vec<Column> {
    (0..count).map(|i| Column::new(&format!("c{i}"))).collect()
}

/// A grid where cell `(row, col)` holds the number `row * 100 + col`.
#[must_use]
pub fn numbered_grid(rows: u32, cols: u32) -> MemoryGrid {
    let mut grid = MemoryGrid::new(columns(cols)).expect("columns should be non-empty");
    for row in 0..rows {
        let mut record = Record::new();
        for col in 0..cols {
            record.insert(format!("c{col}"), json!(i64::from(row * 100 + col)));
        }
        grid.push_row(record);
    }
    grid
}

/// A grid of `rows` empty records under `cols` columns.
#[must_use]
pub fn empty_grid(rows: u32, cols: u32) -> MemoryGrid {
    let mut grid = MemoryGrid::new(columns(cols)).expect("columns should be non-empty");
    for _ in 0..rows {
        grid.push_row(Record::new());
    }
    grid
}

/// The value at `(row, cell)` resolved through the column mapping.
#[must_use]
pub fn cell_value(grid: &MemoryGrid, row: u32, cell: u32) -> Option<Value> {
    let field = grid.field_for_cell(cell)?.to_string();
    grid.data_item(row)?.get(&field).cloned()
}

/// The integer value at `(row, cell)`, panicking on a non-number.
#[must_use]
pub fn cell_i64(grid: &MemoryGrid, row: u32, cell: u32) -> Option<i64> {
    cell_value(grid, row, cell).map(|v| v.as_i64().expect("cell should hold an integer"))
}

/// Write an integer into `(row, cell)` directly.
pub fn set_cell_i64(grid: &mut MemoryGrid, row: u32, cell: u32, value: i64) {
    let field = grid
        .field_for_cell(cell)
        .expect("cell should map to a field")
        .to_string();
    let mut record = grid.data_item(row).expect("row should exist").clone();
    record.insert(field, json!(value));
    grid.set_data_item(row, record).expect("row should exist");
}
