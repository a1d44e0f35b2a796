use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, info_span};

use varigrid_cli::rename::parse_renames;
use varigrid_engine::{AnalyzeOptions, analyze, extract_features, relabel};
use varigrid_ingest::{read_config, read_grid_csv, read_selections};
use varigrid_model::{Feature, Selection, VariationAnalysis};
use varigrid_report::{
    append_group_rows, read_analysis_json, write_analysis_json, write_grid_csv,
};

use crate::cli::{AnalyzeArgs, FeaturesArgs, RelabelArgs};
use crate::types::AnalyzeResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("analyze", grid = %args.grid.display());
    let _guard = span.enter();

    let config = read_config(&args.config)?;

    let ingest_start = Instant::now();
    let grid = read_grid_csv(&args.grid)?;
    info!(
        rows = grid.row_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "grid loaded"
    );

    let selections = match &args.selections {
        Some(path) => {
            let selections = read_selections(path)?;
            if selections.is_empty() {
                bail!("selections file {} names no selections", path.display());
            }
            selections
        }
        None => {
            let features = extract_features(&grid, &config);
            vec![Selection::from_features("default", &features)]
        }
    };

    let options = AnalyzeOptions {
        labeling: args.labels.into(),
    };
    let analysis = analyze(&grid, &config, &selections, &options);

    let mut outputs = Vec::new();
    if let Some(path) = &args.out_grid {
        let exported = append_group_rows(&grid, &analysis, &config);
        write_grid_csv(path, &exported)?;
        outputs.push(path.clone());
    }
    if let Some(path) = &args.out_analysis {
        write_analysis_json(path, &analysis)?;
        outputs.push(path.clone());
    }

    Ok(AnalyzeResult {
        grid_path: args.grid.clone(),
        analysis,
        outputs,
    })
}

pub fn run_features(args: &FeaturesArgs) -> Result<Vec<Feature>> {
    let config = read_config(&args.config)?;
    let grid = read_grid_csv(&args.grid)?;
    Ok(extract_features(&grid, &config))
}

pub fn run_relabel(args: &RelabelArgs) -> Result<VariationAnalysis> {
    let analysis = read_analysis_json(&args.analysis)?;
    let renames = parse_renames(&args.renames)?;
    let renamed = relabel(&analysis, &renames);
    if let Some(path) = &args.out {
        write_analysis_json(path, &renamed)?;
    }
    Ok(renamed)
}
