use std::path::PathBuf;

use varigrid_model::VariationAnalysis;

#[derive(Debug)]
pub struct AnalyzeResult {
    pub grid_path: PathBuf,
    pub analysis: VariationAnalysis,
    pub outputs: Vec<PathBuf>,
}
