//! Inclusive rectangular cell ranges.

use serde::{Deserialize, Serialize};

/// An inclusive rectangular region of grid coordinates.
///
/// Well-formed ranges satisfy `from_row <= to_row` and `from_cell <= to_cell`.
/// Engine entry points guard this invariant and reject inverted ranges;
/// use [`CellRange::from_corners`] to build a normalized range from two
/// arbitrary corner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    #[serde(rename = "fromRow")]
    pub from_row: u32,
    #[serde(rename = "toRow")]
    pub to_row: u32,
    #[serde(rename = "fromCell")]
    pub from_cell: u32,
    #[serde(rename = "toCell")]
    pub to_cell: u32,
}

impl CellRange {
    /// Create a range from already-ordered bounds.
    #[must_use]
    pub const fn new(from_row: u32, to_row: u32, from_cell: u32, to_cell: u32) -> Self {
        Self {
            from_row,
            to_row,
            from_cell,
            to_cell,
        }
    }

    /// Create a single-cell range.
    #[must_use]
    pub const fn single(row: u32, cell: u32) -> Self {
        Self::new(row, row, cell, cell)
    }

    /// Create a normalized range from two corner cells in any order.
    #[must_use]
    pub const fn from_corners(a_row: u32, a_cell: u32, b_row: u32, b_cell: u32) -> Self {
        let from_row = if a_row <= b_row { a_row } else { b_row };
        let to_row = if a_row <= b_row { b_row } else { a_row };
        let from_cell = if a_cell <= b_cell { a_cell } else { b_cell };
        let to_cell = if a_cell <= b_cell { b_cell } else { a_cell };
        Self::new(from_row, to_row, from_cell, to_cell)
    }

    /// Whether the invariant `from <= to` holds on both axes.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.from_row <= self.to_row && self.from_cell <= self.to_cell
    }

    /// Number of rows spanned (inclusive).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.to_row - self.from_row + 1
    }

    /// Number of columns spanned (inclusive).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.to_cell - self.from_cell + 1
    }

    /// Total number of cells covered.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.height() as u64 * self.width() as u64
    }

    /// Whether the range covers exactly one cell.
    #[must_use]
    pub const fn is_single_cell(&self) -> bool {
        self.from_row == self.to_row && self.from_cell == self.to_cell
    }

    /// Whether `(row, cell)` lies within this range.
    #[must_use]
    pub const fn contains(&self, row: u32, cell: u32) -> bool {
        row >= self.from_row && row <= self.to_row && cell >= self.from_cell && cell <= self.to_cell
    }

    /// Whether `other` is fully contained within this range.
    #[must_use]
    pub const fn contains_range(&self, other: &CellRange) -> bool {
        self.from_row <= other.from_row
            && self.to_row >= other.to_row
            && self.from_cell <= other.from_cell
            && self.to_cell >= other.to_cell
    }

    /// Whether this range shares at least one cell with `other`.
    #[must_use]
    pub const fn intersects(&self, other: &CellRange) -> bool {
        self.from_row <= other.to_row
            && other.from_row <= self.to_row
            && self.from_cell <= other.to_cell
            && other.from_cell <= self.to_cell
    }

    /// Smallest range containing both this range and the cell `(row, cell)`.
    ///
    /// This is the bounding-box growth used while a fill handle is dragged:
    /// each axis grows on at most one side of the origin.
    #[must_use]
    pub fn extended_to(&self, row: u32, cell: u32) -> Self {
        Self::new(
            self.from_row.min(row),
            self.to_row.max(row),
            self.from_cell.min(cell),
            self.to_cell.max(cell),
        )
    }
}

impl std::fmt::Display for CellRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(R{}:R{}, C{}:C{})",
            self.from_row, self.to_row, self.from_cell, self.to_cell
        )
    }
}
