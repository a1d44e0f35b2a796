#![deny(unsafe_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use varigrid_model::{AnalysisConfig, RawConfig, Selection};

/// Loads and validates an analysis configuration file (JSON [`RawConfig`]).
pub fn read_config(path: &Path) -> anyhow::Result<AnalysisConfig> {
    let file = File::open(path).with_context(|| format!("open config {}", path.display()))?;
    let raw: RawConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse config {}", path.display()))?;
    let config = AnalysisConfig::resolve(&raw)
        .with_context(|| format!("resolve config {}", path.display()))?;
    Ok(config)
}

/// Loads named selections (JSON list), preserving file order.
pub fn read_selections(path: &Path) -> anyhow::Result<Vec<Selection>> {
    let file = File::open(path).with_context(|| format!("open selections {}", path.display()))?;
    let selections: Vec<Selection> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse selections {}", path.display()))?;
    Ok(selections)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn config_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feature_column": "A", "start_row": 1, "data_start_column": "C"}}"#
        )
        .unwrap();
        let config = read_config(file.path()).unwrap();
        assert_eq!(config.feature_column.index(), 0);
        assert_eq!(config.item_column.index(), 1);
        assert_eq!(config.data_start_column.index(), 2);
    }

    #[test]
    fn invalid_config_is_rejected_with_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feature_column": "A", "start_row": 0, "data_start_column": "C"}}"#
        )
        .unwrap();
        let error = read_config(file.path()).unwrap_err();
        assert!(error.to_string().contains("resolve config"));
    }

    #[test]
    fn selections_preserve_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "MAP", "entries": [{{"feature": "T", "items": ["X"]}}]}},
                {{"name": "VARIANT", "entries": [{{"feature": "T", "items": ["Y", "X"]}}]}}
            ]"#
        )
        .unwrap();
        let selections = read_selections(file.path()).unwrap();
        assert_eq!(selections.len(), 2);
        assert_eq!(selections[0].name, "MAP");
        assert_eq!(selections[1].entries[0].items, vec!["Y", "X"]);
    }
}
