#![deny(unsafe_code)]

//! Feature/item extraction from the semi-structured header block of a grid.
//!
//! The block follows the usual spec-sheet convention: a non-blank cell in
//! the feature column starts a feature; rows below with a blank feature
//! cell but a non-blank item cell continue it (the "merged cell" layout).
//! The block ends at the first row where both cells are blank.

use std::borrow::Cow;
use std::collections::BTreeMap;

use varigrid_model::{AnalysisConfig, Feature, Grid};

/// Row positions of every feature's item cells, in scan order.
///
/// Built once per analysis run so per-column pattern construction does not
/// rescan the grid. Lookups are by exact feature and item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    features: Vec<LayoutFeature>,
    by_name: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LayoutFeature {
    name: String,
    /// (grid row, item name) pairs in first-seen order.
    items: Vec<(usize, String)>,
}

impl FeatureLayout {
    /// Scans the grid below `config.start_row` and records the feature→item
    /// hierarchy.
    ///
    /// A row too short to reach the feature column terminates the scan the
    /// same way a fully blank row does; trailing heterogeneous rows are an
    /// end-of-data sentinel, not an error.
    pub fn scan(grid: &Grid, config: &AnalysisConfig) -> Self {
        let feature_col = config.feature_column.index();
        let item_col = config.item_column.index();

        let mut features: Vec<LayoutFeature> = Vec::new();
        let mut by_name: BTreeMap<String, usize> = BTreeMap::new();

        for row in config.start_row..grid.row_count() {
            let cells = &grid.rows()[row];
            if feature_col >= cells.len() {
                break;
            }
            let feature = grid.trimmed(row, feature_col).map(Cow::into_owned);
            let item = grid.trimmed(row, item_col).map(Cow::into_owned);
            match (feature, item) {
                (Some(name), item) => {
                    by_name.entry(name.clone()).or_insert(features.len());
                    let mut entry = LayoutFeature {
                        name,
                        items: Vec::new(),
                    };
                    if let Some(item) = item {
                        entry.items.push((row, item));
                    }
                    features.push(entry);
                }
                (None, Some(item)) => {
                    // An item row before any feature has no owner; skip it.
                    if let Some(current) = features.last_mut() {
                        current.items.push((row, item));
                    }
                }
                (None, None) => break,
            }
        }

        tracing::debug!(
            features = features.len(),
            start_row = config.start_row,
            "feature layout scanned"
        );
        Self { features, by_name }
    }

    /// The grid row carrying `item` under `feature`, if present.
    /// The first matching item wins when names repeat within a feature.
    pub fn item_row(&self, feature: &str, item: &str) -> Option<usize> {
        let index = *self.by_name.get(feature)?;
        self.features[index]
            .items
            .iter()
            .find(|(_, name)| name == item)
            .map(|(row, _)| *row)
    }

    /// Projects the layout into the caller-facing feature tree, everything
    /// selected by default.
    pub fn to_features(&self) -> Vec<Feature> {
        self.features
            .iter()
            .map(|layout| {
                let mut feature = Feature::new(layout.name.clone());
                for (_, item) in &layout.items {
                    feature.push_item(item.clone());
                }
                feature
            })
            .collect()
    }
}

/// Recovers the feature/item tree from the grid.
pub fn extract_features(grid: &Grid, config: &AnalysisConfig) -> Vec<Feature> {
    FeatureLayout::scan(grid, config).to_features()
}
