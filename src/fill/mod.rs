//! Drag-fill: range geometry and cell value replication.
//!
//! A completed drag-fill gesture carries the range selected before the drag
//! and the extended range at release. [`resolve_targets`] splits the
//! extension into up to three disjoint target strips; [`replicate`] tiles
//! the source values into a target; [`apply`] runs the whole operation with
//! a single batched render invalidation.

mod geometry;
mod replicate;

pub use geometry::{resolve_targets, FillTargets};
pub use replicate::{replicate, FillReport};

use crate::error::Result;
use crate::grid::GridData;
use crate::types::CellRange;

/// Apply a drag-fill: resolve the extension's targets and replicate the
/// previous range into each, then invalidate all written rows in one batch.
///
/// A no-op extension (`selected == previous`) returns an empty report and
/// fires no invalidation.
///
/// # Errors
/// Returns [`crate::GridfillError::MalformedRange`] when either range has
/// inverted coordinates.
pub fn apply<G: GridData>(
    grid: &mut G,
    previous: &CellRange,
    selected: &CellRange,
) -> Result<FillReport> {
    let targets = resolve_targets(previous, selected)?;

    let mut report = FillReport::default();
    let mut written = Vec::new();
    for target in targets.ranges() {
        let (part, rows) = replicate::replicate_unbatched(grid, previous, &target)?;
        report.merge(part);
        written.extend(rows);
    }

    written.sort_unstable();
    written.dedup();
    if !written.is_empty() {
        grid.invalidate_rows(&written);
    }
    Ok(report)
}
