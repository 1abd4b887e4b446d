//! Cell value replication with wraparound tiling.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{GridfillError, Result};
use crate::grid::GridData;
use crate::types::CellRange;

/// Outcome of a replication pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillReport {
    /// Rows whose record was rewritten.
    pub rows_written: u32,
    /// Target cells written (field set or cleared).
    pub cells_written: u64,
    /// Target rows outside the dataset, skipped with a warning.
    pub skipped_rows: Vec<u32>,
}

impl FillReport {
    /// Fold another report into this one.
    pub(crate) fn merge(&mut self, other: FillReport) {
        self.rows_written += other.rows_written;
        self.cells_written += other.cells_written;
        self.skipped_rows.extend(other.skipped_rows);
    }
}

/// Source-range snapshot, taken before any write so an overlapping target
/// replicates from pre-fill values.
struct SourceBlock {
    values: Vec<Vec<Option<Value>>>,
    height: u32,
    width: u32,
}

impl SourceBlock {
    fn capture<G: GridData>(grid: &G, source: &CellRange) -> Self {
        let mut values = Vec::with_capacity(source.height() as usize);
        for row in source.from_row..=source.to_row {
            let record = grid.data_item(row);
            let mut row_values = Vec::with_capacity(source.width() as usize);
            for cell in source.from_cell..=source.to_cell {
                let value = record.and_then(|rec| {
                    grid.field_for_cell(cell)
                        .and_then(|field| rec.get(field).cloned())
                });
                row_values.push(value);
            }
            values.push(row_values);
        }
        Self {
            values,
            height: source.height(),
            width: source.width(),
        }
    }

    /// Value for a target cell offset, wrapping by source dimensions.
    fn value_at(&self, row_offset: u32, cell_offset: u32) -> Option<Value> {
        let r = (row_offset % self.height) as usize;
        let c = (cell_offset % self.width) as usize;
        self.values.get(r).and_then(|row| row.get(c)).cloned().flatten()
    }
}

/// Replicate `source` into `target`, tiling by modulo addressing, and fire
/// one batched invalidation for the rows written.
///
/// For every target cell `(r, c)` the source cell used is
/// `(source.from_row + (r - target.from_row) % source.height(),
///   source.from_cell + (c - target.from_cell) % source.width())`,
/// so a smaller source tiles across a larger target.
///
/// Rows outside the dataset and columns without a field mapping are logged
/// and skipped; the rest of the target still fills. A source field absent
/// from its record clears the corresponding target field.
///
/// # Errors
/// Returns [`GridfillError::MalformedRange`] when either range has inverted
/// coordinates.
pub fn replicate<G: GridData>(
    grid: &mut G,
    source: &CellRange,
    target: &CellRange,
) -> Result<FillReport> {
    let (report, written) = replicate_unbatched(grid, source, target)?;
    if !written.is_empty() {
        grid.invalidate_rows(&written);
    }
    Ok(report)
}

/// Replication without the trailing invalidation, for callers that batch
/// several targets into one render notification.
pub(crate) fn replicate_unbatched<G: GridData>(
    grid: &mut G,
    source: &CellRange,
    target: &CellRange,
) -> Result<(FillReport, Vec<u32>)> {
    for range in [source, target] {
        if !range.is_well_formed() {
            return Err(GridfillError::MalformedRange(*range));
        }
    }

    let block = SourceBlock::capture(grid, source);

    // Resolve target fields once, not per row.
    let fields: Vec<Option<String>> = (target.from_cell..=target.to_cell)
        .map(|cell| {
            let field = grid.field_for_cell(cell).map(str::to_string);
            if field.is_none() {
                warn!(cell, "column has no field mapping; skipping");
            }
            field
        })
        .collect();

    let mut report = FillReport::default();
    let mut written = Vec::new();

    for row in target.from_row..=target.to_row {
        let Some(record) = grid.data_item(row) else {
            warn!(row, "target row outside dataset; skipping");
            report.skipped_rows.push(row);
            continue;
        };
        let mut record = record.clone();

        for (cell, field) in (target.from_cell..=target.to_cell).zip(fields.iter()) {
            let Some(field) = field else { continue };
            match block.value_at(row - target.from_row, cell - target.from_cell) {
                Some(value) => {
                    record.insert(field.clone(), value);
                }
                None => {
                    record.remove(field);
                }
            }
            report.cells_written += 1;
        }

        match grid.set_data_item(row, record) {
            Ok(()) => {
                report.rows_written += 1;
                written.push(row);
            }
            Err(e) => {
                warn!(row, error = %e, "row write failed; skipping");
                report.skipped_rows.push(row);
            }
        }
    }

    Ok((report, written))
}
