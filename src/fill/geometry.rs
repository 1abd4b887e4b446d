//! Drag-fill geometry: classifying a range extension into target strips.

use serde::{Deserialize, Serialize};

use crate::error::{GridfillError, Result};
use crate::types::CellRange;

/// The up-to-three disjoint sub-ranges a drag-fill extension populates.
///
/// Each target is computed independently and covers only cells the others
/// do not: the vertical strip is restricted to the previous range's
/// columns, the horizontal strip to its rows, and the corner to the
/// rectangle added on both axes at once. Their union is exactly
/// `selected` minus `previous` when `previous` is contained in `selected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillTargets {
    /// Rows added by the extension, spanning the previous range's columns.
    pub vertical: Option<CellRange>,
    /// Columns added by the extension, spanning the previous range's rows.
    pub horizontal: Option<CellRange>,
    /// The added-rows by added-columns rectangle.
    pub corner: Option<CellRange>,
}

impl FillTargets {
    /// Whether the extension produced no target at all (no-op drag).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none() && self.corner.is_none()
    }

    /// The non-null targets, in vertical / horizontal / corner order.
    #[must_use]
    pub fn ranges(&self) -> Vec<CellRange> {
        [self.vertical, self.horizontal, self.corner]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// The rows or columns one axis of the extension added, as an inclusive
/// `(from, to)` span. `None` when the axis did not grow; equality on an
/// axis deliberately contributes nothing, so the targets never
/// double-count cells.
fn grown_span(prev_from: u32, prev_to: u32, sel_from: u32, sel_to: u32) -> Option<(u32, u32)> {
    if sel_to > prev_to {
        // Grew below/right. When both sides grew this side wins; the drag
        // gesture only ever grows one side per axis.
        Some((prev_to + 1, sel_to))
    } else if sel_from < prev_from {
        Some((sel_from, prev_from - 1))
    } else {
        None
    }
}

/// Classify a drag-fill extension and compute its target sub-ranges.
///
/// `previous` is the range selected before the drag began; `selected` is
/// the extended range at release. Both must be well-formed.
///
/// # Errors
/// Returns [`GridfillError::MalformedRange`] for a range with inverted
/// coordinates; that is a caller contract violation, not a recoverable
/// condition.
pub fn resolve_targets(previous: &CellRange, selected: &CellRange) -> Result<FillTargets> {
    for range in [previous, selected] {
        if !range.is_well_formed() {
            return Err(GridfillError::MalformedRange(*range));
        }
    }

    let rows = grown_span(
        previous.from_row,
        previous.to_row,
        selected.from_row,
        selected.to_row,
    );
    let cells = grown_span(
        previous.from_cell,
        previous.to_cell,
        selected.from_cell,
        selected.to_cell,
    );

    let vertical = rows.map(|(from_row, to_row)| {
        CellRange::new(from_row, to_row, previous.from_cell, previous.to_cell)
    });
    let horizontal = cells.map(|(from_cell, to_cell)| {
        CellRange::new(previous.from_row, previous.to_row, from_cell, to_cell)
    });
    let corner = match (rows, cells) {
        (Some((from_row, to_row)), Some((from_cell, to_cell))) => {
            Some(CellRange::new(from_row, to_row, from_cell, to_cell))
        }
        _ => None,
    };

    Ok(FillTargets {
        vertical,
        horizontal,
        corner,
    })
}
