//! Tests for drag-fill target resolution.

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use gridfill::fill::{resolve_targets, FillTargets};
    use gridfill::types::CellRange;
    use gridfill::GridfillError;

    /// Every cell of `range`, for disjointness/coverage checks.
    fn cells(range: &CellRange) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for row in range.from_row..=range.to_row {
            for cell in range.from_cell..=range.to_cell {
                out.push((row, cell));
            }
        }
        out
    }

    fn all_target_cells(targets: &FillTargets) -> Vec<(u32, u32)> {
        targets.ranges().iter().flat_map(cells).collect()
    }

    // ================================================================
    // Classification
    // ================================================================

    #[test]
    fn no_extension_yields_no_targets() {
        let r = CellRange::new(2, 4, 1, 3);
        let targets = resolve_targets(&r, &r).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn vertical_extension_single_column() {
        // previousRange {1,1,1,1}, selectedRange {1..3, 1} per the drag-fill
        // contract: vertical target is rows 2-3 at column 1, nothing else.
        let prev = CellRange::new(1, 1, 1, 1);
        let sel = CellRange::new(1, 3, 1, 1);
        let targets = resolve_targets(&prev, &sel).unwrap();
        assert_eq!(targets.vertical, Some(CellRange::new(2, 3, 1, 1)));
        assert!(targets.horizontal.is_none());
        assert!(targets.corner.is_none());
    }

    #[test]
    fn horizontal_extension_single_row() {
        let prev = CellRange::new(2, 2, 1, 1);
        let sel = CellRange::new(2, 2, 1, 5);
        let targets = resolve_targets(&prev, &sel).unwrap();
        assert_eq!(targets.horizontal, Some(CellRange::new(2, 2, 2, 5)));
        assert!(targets.vertical.is_none());
        assert!(targets.corner.is_none());
    }

    #[test]
    fn corner_extension_produces_all_three() {
        // previousRange {1,1,1,1}, selectedRange {1..3, 1..3}
        let prev = CellRange::new(1, 1, 1, 1);
        let sel = CellRange::new(1, 3, 1, 3);
        let targets = resolve_targets(&prev, &sel).unwrap();
        assert_eq!(targets.vertical, Some(CellRange::new(2, 3, 1, 1)));
        assert_eq!(targets.horizontal, Some(CellRange::new(1, 1, 2, 3)));
        assert_eq!(targets.corner, Some(CellRange::new(2, 3, 2, 3)));
    }

    #[test]
    fn extension_above_and_left() {
        let prev = CellRange::new(4, 5, 4, 5);
        let sel = CellRange::new(2, 5, 1, 5);
        let targets = resolve_targets(&prev, &sel).unwrap();
        assert_eq!(targets.vertical, Some(CellRange::new(2, 3, 4, 5)));
        assert_eq!(targets.horizontal, Some(CellRange::new(4, 5, 1, 3)));
        assert_eq!(targets.corner, Some(CellRange::new(2, 3, 1, 3)));
    }

    #[test]
    fn multi_cell_previous_keeps_its_bounds() {
        let prev = CellRange::new(1, 2, 1, 4);
        let sel = CellRange::new(1, 6, 1, 4);
        let targets = resolve_targets(&prev, &sel).unwrap();
        let vertical = targets.vertical.unwrap();
        assert_eq!(vertical, CellRange::new(3, 6, 1, 4));
        assert_eq!(vertical.from_cell, prev.from_cell);
        assert_eq!(vertical.to_cell, prev.to_cell);
        assert!(targets.horizontal.is_none());
    }

    // ================================================================
    // Disjointness and coverage
    // ================================================================

    #[test]
    fn targets_are_pairwise_disjoint() {
        let cases = [
            (CellRange::new(1, 1, 1, 1), CellRange::new(1, 3, 1, 3)),
            (CellRange::new(0, 2, 0, 2), CellRange::new(0, 5, 0, 6)),
            (CellRange::new(3, 4, 3, 4), CellRange::new(0, 4, 1, 4)),
            (CellRange::new(2, 2, 2, 2), CellRange::new(2, 2, 2, 9)),
        ];
        for (prev, sel) in cases {
            let targets = resolve_targets(&prev, &sel).unwrap();
            let mut seen = std::collections::HashSet::new();
            for cell in all_target_cells(&targets) {
                assert!(seen.insert(cell), "cell {cell:?} covered twice for {prev} -> {sel}");
            }
        }
    }

    #[test]
    fn targets_cover_exactly_selected_minus_previous() {
        let prev = CellRange::new(1, 1, 1, 1);
        let sel = CellRange::new(1, 3, 1, 3);
        let targets = resolve_targets(&prev, &sel).unwrap();

        let mut covered = all_target_cells(&targets);
        covered.sort_unstable();

        let mut expected: Vec<(u32, u32)> = cells(&sel)
            .into_iter()
            .filter(|&(r, c)| !prev.contains(r, c))
            .collect();
        expected.sort_unstable();

        assert_eq!(covered, expected);
    }

    // ================================================================
    // Contract violations
    // ================================================================

    #[test]
    fn inverted_previous_range_is_rejected() {
        let bad = CellRange::new(5, 1, 0, 0);
        let ok = CellRange::new(0, 0, 0, 0);
        assert!(matches!(
            resolve_targets(&bad, &ok),
            Err(GridfillError::MalformedRange(_))
        ));
    }

    #[test]
    fn inverted_selected_range_is_rejected() {
        let ok = CellRange::new(0, 0, 0, 0);
        let bad = CellRange::new(0, 0, 4, 2);
        assert!(matches!(
            resolve_targets(&ok, &bad),
            Err(GridfillError::MalformedRange(_))
        ));
    }
}
