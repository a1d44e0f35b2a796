#![deny(unsafe_code)]

//! Pattern signature construction for a single data column.

use varigrid_model::{ColumnRef, Grid, PatternSignature, Selection};

use crate::extract::FeatureLayout;

/// Cell value (trimmed, case-insensitive) that marks an item as applied.
pub const APPLY_MARK: &str = "O";
/// Mark emitted for a not-applied or unresolvable position.
pub const ABSENT_MARK: &str = "-";
/// Separator between marks in a pattern signature.
pub const MARK_DELIMITER: &str = "|";

/// Builds the canonical pattern for `column` under `selection`.
///
/// One mark per selected (feature, item) pair, in selection order. A pair
/// that matches no layout row contributes an [`ABSENT_MARK`], never an
/// error. Deterministic: identical inputs yield byte-identical signatures.
pub fn build_pattern(
    grid: &Grid,
    layout: &FeatureLayout,
    column: ColumnRef,
    selection: &Selection,
) -> PatternSignature {
    let mut marks = Vec::with_capacity(selection.mark_count());
    for entry in &selection.entries {
        for item in &entry.items {
            let applied = layout
                .item_row(&entry.feature, item)
                .is_some_and(|row| cell_applied(grid, row, column));
            marks.push(if applied { APPLY_MARK } else { ABSENT_MARK });
        }
    }
    PatternSignature::new(marks.join(MARK_DELIMITER))
}

fn cell_applied(grid: &Grid, row: usize, column: ColumnRef) -> bool {
    grid.trimmed(row, column.index())
        .is_some_and(|value| value.eq_ignore_ascii_case(APPLY_MARK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use varigrid_model::{AnalysisConfig, CellValue};

    fn fixture() -> (Grid, FeatureLayout, AnalysisConfig) {
        let grid = Grid::from_rows(vec![
            vec!["Display", "LCD", "O", "-"],
            vec!["", "OLED", "o", ""],
            vec!["Radio", "BT", ".", "O"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(CellValue::text).collect())
        .collect());
        let config = AnalysisConfig::new(
            ColumnRef::from_index(0),
            None,
            0,
            ColumnRef::from_index(2),
        );
        let layout = FeatureLayout::scan(&grid, &config);
        (grid, layout, config)
    }

    fn selection() -> Selection {
        let mut selection = Selection::new("default");
        selection.push("Display", vec!["LCD".to_string(), "OLED".to_string()]);
        selection.push("Radio", vec!["BT".to_string()]);
        selection
    }

    #[test]
    fn marks_follow_selection_order() {
        let (grid, layout, _) = fixture();
        let pattern = build_pattern(&grid, &layout, ColumnRef::from_index(2), &selection());
        assert_eq!(pattern.as_str(), "O|O|-");
        let pattern = build_pattern(&grid, &layout, ColumnRef::from_index(3), &selection());
        assert_eq!(pattern.as_str(), "-|-|O");
    }

    #[test]
    fn apply_mark_is_case_insensitive_and_exact() {
        let (grid, layout, _) = fixture();
        // Row 1 column C holds "o"; row 2 holds "." which is not applied.
        let pattern = build_pattern(&grid, &layout, ColumnRef::from_index(2), &selection());
        assert_eq!(pattern.as_str(), "O|O|-");
    }

    #[test]
    fn unknown_feature_or_item_contributes_absent_marks() {
        let (grid, layout, _) = fixture();
        let mut missing = Selection::new("missing");
        missing.push("Display", vec!["LCD".to_string()]);
        missing.push("NoSuchFeature", vec!["X".to_string(), "Y".to_string()]);
        let pattern = build_pattern(&grid, &layout, ColumnRef::from_index(2), &missing);
        assert_eq!(pattern.as_str(), "O|-|-");
    }

    #[test]
    fn column_past_grid_width_is_all_absent() {
        let (grid, layout, _) = fixture();
        let pattern = build_pattern(&grid, &layout, ColumnRef::from_index(9), &selection());
        assert_eq!(pattern.as_str(), "-|-|-");
    }

    #[test]
    fn builder_is_deterministic() {
        let (grid, layout, _) = fixture();
        let first = build_pattern(&grid, &layout, ColumnRef::from_index(2), &selection());
        let second = build_pattern(&grid, &layout, ColumnRef::from_index(2), &selection());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_selection_yields_empty_signature() {
        let (grid, layout, _) = fixture();
        let pattern = build_pattern(
            &grid,
            &layout,
            ColumnRef::from_index(2),
            &Selection::new("empty"),
        );
        assert_eq!(pattern.as_str(), "");
    }
}
