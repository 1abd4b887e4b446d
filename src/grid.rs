//! Grid data access.
//!
//! The fill and clipboard engines never own row data; they work through the
//! [`GridData`] capability owned by the embedding grid component. The trait
//! mirrors the embedding grid's surface: one record per row index, a
//! column-to-field mapping, and a batched render invalidation.

use crate::error::{GridfillError, Result};
use crate::types::{Column, Record};

/// Capability exposed by the embedding grid: row record access, column
/// mapping, and render invalidation.
pub trait GridData {
    /// Column definitions, indexed by grid column index.
    fn columns(&self) -> &[Column];

    /// Number of rows in the dataset.
    fn row_count(&self) -> u32;

    /// The record at `row`, or `None` when the index is outside the dataset.
    fn data_item(&self, row: u32) -> Option<&Record>;

    /// Replace the record at `row`.
    ///
    /// # Errors
    /// Returns [`GridfillError::RowOutOfBounds`] when `row` is outside the
    /// dataset.
    fn set_data_item(&mut self, row: u32, record: Record) -> Result<()>;

    /// Notify the grid that `rows` changed and need re-rendering.
    ///
    /// Engines call this once per operation after all writes complete,
    /// never per cell.
    fn invalidate_rows(&mut self, rows: &[u32]);

    /// Record field mapped to grid column index `cell`, if any.
    fn field_for_cell(&self, cell: u32) -> Option<&str> {
        self.columns()
            .get(cell as usize)
            .map(|c| c.field.as_str())
    }
}

/// In-memory [`GridData`] implementation.
///
/// Backs the wasm component's dataset and the native test path. Invalidation
/// batches are recorded so callers (and tests) can observe render
/// notification batching.
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    columns: Vec<Column>,
    rows: Vec<Record>,
    invalidations: Vec<Vec<u32>>,
}

impl MemoryGrid {
    /// Create an empty grid with the given column set.
    ///
    /// # Errors
    /// Returns [`GridfillError::NoColumns`] for an empty column set; nothing
    /// downstream can map cell indices to record fields without one.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(GridfillError::NoColumns);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            invalidations: Vec::new(),
        })
    }

    /// Append a row record.
    pub fn push_row(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// Replace all rows.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.invalidations.clear();
    }

    /// All row records.
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Invalidation batches recorded since the last `set_rows`, oldest first.
    #[must_use]
    pub fn invalidation_batches(&self) -> &[Vec<u32>] {
        &self.invalidations
    }
}

impl GridData for MemoryGrid {
    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn row_count(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }

    fn data_item(&self, row: u32) -> Option<&Record> {
        self.rows.get(row as usize)
    }

    fn set_data_item(&mut self, row: u32, record: Record) -> Result<()> {
        match self.rows.get_mut(row as usize) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(GridfillError::RowOutOfBounds(row)),
        }
    }

    fn invalidate_rows(&mut self, rows: &[u32]) {
        self.invalidations.push(rows.to_vec());
    }
}
