#![deny(unsafe_code)]

use crate::{ColumnRef, ModelError};

/// Serde-facing configuration, as written in a config file or typed by a
/// user: columns as letters (or 1-based numbers) and a 1-based start row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawConfig {
    /// Column holding feature names, e.g. `"A"`.
    pub feature_column: String,
    /// Column holding item names. Defaults to the column right of the
    /// feature column.
    #[serde(default)]
    pub item_column: Option<String>,
    /// 1-based row where the feature/item block starts.
    pub start_row: u32,
    /// First column holding classifiable data, e.g. `"C"`.
    pub data_start_column: String,
}

/// Resolved analysis configuration with zero-based addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisConfig {
    pub feature_column: ColumnRef,
    pub item_column: ColumnRef,
    pub start_row: usize,
    pub data_start_column: ColumnRef,
}

impl AnalysisConfig {
    pub fn new(
        feature_column: ColumnRef,
        item_column: Option<ColumnRef>,
        start_row: usize,
        data_start_column: ColumnRef,
    ) -> Self {
        let item_column =
            item_column.unwrap_or_else(|| ColumnRef::from_index(feature_column.index() + 1));
        Self {
            feature_column,
            item_column,
            start_row,
            data_start_column,
        }
    }

    /// Validates and converts a raw configuration.
    pub fn resolve(raw: &RawConfig) -> Result<Self, ModelError> {
        if raw.feature_column.trim().is_empty() {
            return Err(ModelError::InvalidConfiguration(
                "feature column is required".to_string(),
            ));
        }
        if raw.start_row < 1 {
            return Err(ModelError::InvalidConfiguration(format!(
                "start row must be 1-based (got {})",
                raw.start_row
            )));
        }
        let feature_column = ColumnRef::parse(&raw.feature_column)?;
        let item_column = raw
            .item_column
            .as_deref()
            .map(ColumnRef::parse)
            .transpose()?;
        let data_start_column = ColumnRef::parse(&raw.data_start_column)?;
        Ok(Self::new(
            feature_column,
            item_column,
            (raw.start_row - 1) as usize,
            data_start_column,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_letters_and_defaults_item_column() {
        let raw = RawConfig {
            feature_column: "A".to_string(),
            item_column: None,
            start_row: 1,
            data_start_column: "C".to_string(),
        };
        let config = AnalysisConfig::resolve(&raw).unwrap();
        assert_eq!(config.feature_column.index(), 0);
        assert_eq!(config.item_column.index(), 1);
        assert_eq!(config.start_row, 0);
        assert_eq!(config.data_start_column.index(), 2);
    }

    #[test]
    fn rejects_zero_start_row() {
        let raw = RawConfig {
            feature_column: "A".to_string(),
            item_column: None,
            start_row: 0,
            data_start_column: "C".to_string(),
        };
        assert!(matches!(
            AnalysisConfig::resolve(&raw),
            Err(ModelError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_missing_feature_column() {
        let raw = RawConfig {
            feature_column: "  ".to_string(),
            item_column: None,
            start_row: 1,
            data_start_column: "C".to_string(),
        };
        assert!(matches!(
            AnalysisConfig::resolve(&raw),
            Err(ModelError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn surfaces_codec_errors() {
        let raw = RawConfig {
            feature_column: "A?".to_string(),
            item_column: None,
            start_row: 1,
            data_start_column: "C".to_string(),
        };
        assert!(matches!(
            AnalysisConfig::resolve(&raw),
            Err(ModelError::InvalidColumnLetter(_))
        ));
    }
}
