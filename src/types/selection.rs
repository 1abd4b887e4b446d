//! Selection state: one or more rectangular cell ranges.
//!
//! The model is owned by the grid component and passed explicitly to the
//! fill and clipboard engines; nothing here is looked up from ambient
//! context.

use serde::{Deserialize, Serialize};

use super::range::CellRange;

/// Ordered set of selected ranges.
///
/// Adding a range coalesces it with existing ranges whenever their union is
/// itself a rectangle (containment, or overlap/adjacency on a shared row or
/// column span), so a selection built from touching drags collapses to the
/// fewest ranges that cover it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionModel {
    ranges: Vec<CellRange>,
}

impl SelectionModel {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected ranges, in insertion order after coalescing.
    #[must_use]
    pub fn ranges(&self) -> &[CellRange] {
        &self.ranges
    }

    /// The most recently added range, if any.
    #[must_use]
    pub fn active_range(&self) -> Option<&CellRange> {
        self.ranges.last()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Replace the whole selection with a single range.
    pub fn set_range(&mut self, range: CellRange) {
        self.ranges.clear();
        self.ranges.push(range);
    }

    /// Add a range, merging with existing ranges where the union stays
    /// rectangular. Merging repeats until no further pair coalesces.
    pub fn add_range(&mut self, range: CellRange) {
        let mut pending = range;
        loop {
            let merged = self
                .ranges
                .iter()
                .position(|existing| coalesce(existing, &pending).is_some());
            match merged {
                Some(idx) => {
                    let existing = self.ranges.remove(idx);
                    // coalesce() is Some by the position() check above
                    if let Some(union) = coalesce(&existing, &pending) {
                        pending = union;
                    }
                }
                None => break,
            }
        }
        self.ranges.push(pending);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Whether `(row, cell)` is covered by any selected range.
    #[must_use]
    pub fn contains(&self, row: u32, cell: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(row, cell))
    }
}

/// Union of two ranges when that union is exactly a rectangle.
fn coalesce(a: &CellRange, b: &CellRange) -> Option<CellRange> {
    if a.contains_range(b) {
        return Some(*a);
    }
    if b.contains_range(a) {
        return Some(*b);
    }

    let same_cols = a.from_cell == b.from_cell && a.to_cell == b.to_cell;
    let same_rows = a.from_row == b.from_row && a.to_row == b.to_row;

    // Same column span, row spans overlap or touch
    if same_cols && spans_touch(a.from_row, a.to_row, b.from_row, b.to_row) {
        return Some(CellRange::new(
            a.from_row.min(b.from_row),
            a.to_row.max(b.to_row),
            a.from_cell,
            a.to_cell,
        ));
    }

    // Same row span, column spans overlap or touch
    if same_rows && spans_touch(a.from_cell, a.to_cell, b.from_cell, b.to_cell) {
        return Some(CellRange::new(
            a.from_row,
            a.to_row,
            a.from_cell.min(b.from_cell),
            a.to_cell.max(b.to_cell),
        ));
    }

    None
}

/// Whether two inclusive 1-D spans overlap or are immediately adjacent.
const fn spans_touch(a_from: u32, a_to: u32, b_from: u32, b_to: u32) -> bool {
    a_from <= b_to.saturating_add(1) && b_from <= a_to.saturating_add(1)
}
