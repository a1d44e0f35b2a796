#![deny(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;

use varigrid_model::{Grid, VariationAnalysis};

/// Writes a grid as positional CSV, one record per row.
pub fn write_grid_csv(path: &Path, grid: &Grid) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create grid csv {}", path.display()))?;
    for row in grid.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.render()).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write grid csv {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush grid csv {}", path.display()))?;
    Ok(())
}

/// Writes an analysis as pretty JSON.
pub fn write_analysis_json(path: &Path, analysis: &VariationAnalysis) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("create analysis {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), analysis)
        .with_context(|| format!("write analysis {}", path.display()))?;
    Ok(())
}

/// Reads an analysis written by [`write_analysis_json`].
pub fn read_analysis_json(path: &Path) -> anyhow::Result<VariationAnalysis> {
    let file = File::open(path).with_context(|| format!("open analysis {}", path.display()))?;
    let analysis = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse analysis {}", path.display()))?;
    Ok(analysis)
}
