#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;

use varigrid_model::{CellValue, Grid};

/// Reads a positional (headerless) CSV file into a [`Grid`].
///
/// Cells are trimmed and BOM-stripped; empty cells become `Blank`,
/// numeric-looking cells become `Number`, everything else stays `Text`.
pub fn read_grid_csv(path: &Path) -> anyhow::Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open grid csv {}", path.display()))?;

    let mut grid = Grid::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read grid csv {}", path.display()))?;
        grid.push_row(record.iter().map(parse_cell).collect());
    }
    tracing::debug!(
        path = %path.display(),
        rows = grid.row_count(),
        "grid loaded"
    );
    Ok(grid)
}

fn parse_cell(raw: &str) -> CellValue {
    let value = raw.trim().trim_matches('\u{feff}').trim();
    if value.is_empty() {
        CellValue::Blank
    } else if let Ok(number) = value.parse::<f64>() {
        CellValue::Number(number)
    } else {
        CellValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_cells_with_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Display,LCD,O,-").unwrap();
        writeln!(file, ",OLED,3.5,").unwrap();
        let grid = read_grid_csv(file.path()).unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell(0, 0), Some(&CellValue::text("Display")));
        assert_eq!(grid.cell(1, 0), Some(&CellValue::Blank));
        assert_eq!(grid.cell(1, 2), Some(&CellValue::Number(3.5)));
        assert_eq!(grid.cell(0, 3), Some(&CellValue::text("-")));
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "d").unwrap();
        let grid = read_grid_csv(file.path()).unwrap();
        assert_eq!(grid.rows()[0].len(), 3);
        assert_eq!(grid.rows()[1].len(), 1);
    }

    #[test]
    fn missing_file_carries_context() {
        let error = read_grid_csv(Path::new("/nonexistent/grid.csv")).unwrap_err();
        assert!(error.to_string().contains("open grid csv"));
    }
}
