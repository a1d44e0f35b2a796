#![deny(unsafe_code)]

use varigrid_model::{AnalysisConfig, CellValue, ColumnRef, Grid, VariationAnalysis};

/// Projects an analysis back onto the grid: the original rows plus one
/// appended row per axis carrying each column's group id.
///
/// The appended row holds the selection name in the feature column and the
/// group id at every mapped data column; everything else stays blank. The
/// input grid is not touched.
pub fn append_group_rows(
    grid: &Grid,
    analysis: &VariationAnalysis,
    config: &AnalysisConfig,
) -> Grid {
    let mut out = grid.clone();
    let label_col = config.feature_column.index();
    for axis in &analysis.axes {
        let last_mapped = axis.column_groups.keys().next_back().map(ColumnRef::index);
        let width = last_mapped.unwrap_or(0).max(label_col) + 1;
        let mut row = vec![CellValue::Blank; width];
        row[label_col] = CellValue::Text(axis.selection.clone());
        for (column, id) in &axis.column_groups {
            row[column.index()] = CellValue::Text(id.to_string());
        }
        out.push_row(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use varigrid_engine::{AnalyzeOptions, analyze};
    use varigrid_model::{ColumnRef, Selection};

    fn fixture() -> (Grid, AnalysisConfig, VariationAnalysis) {
        let grid = Grid::from_rows(
            vec![
                vec!["T", "X", "O", "-"],
                vec!["", "Y", "O", "O"],
            ]
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::text).collect())
            .collect(),
        );
        let config = AnalysisConfig::new(
            ColumnRef::from_index(0),
            None,
            0,
            ColumnRef::from_index(2),
        );
        let mut selection = Selection::new("default");
        selection.push("T", vec!["X".to_string(), "Y".to_string()]);
        let analysis = analyze(&grid, &config, &[selection], &AnalyzeOptions::default());
        (grid, config, analysis)
    }

    #[test]
    fn appends_one_row_per_axis_with_group_ids() {
        let (grid, config, analysis) = fixture();
        let exported = append_group_rows(&grid, &analysis, &config);

        assert_eq!(exported.row_count(), grid.row_count() + 1);
        let appended = &exported.rows()[2];
        assert_eq!(appended[0], CellValue::text("default"));
        assert_eq!(appended[2], CellValue::text("A"));
        assert_eq!(appended[3], CellValue::text("B"));
        assert!(appended[1].is_blank());
    }

    #[test]
    fn input_grid_is_untouched() {
        let (grid, config, analysis) = fixture();
        let snapshot = grid.clone();
        let _ = append_group_rows(&grid, &analysis, &config);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn empty_axis_appends_a_label_only_row() {
        let (grid, config, mut analysis) = fixture();
        analysis.axes[0].groups.clear();
        analysis.axes[0].column_groups.clear();
        let exported = append_group_rows(&grid, &analysis, &config);

        let appended = &exported.rows()[2];
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0], CellValue::text("default"));
    }
}
