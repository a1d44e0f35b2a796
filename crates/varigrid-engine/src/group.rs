#![deny(unsafe_code)]

//! Column grouping: deduplicates per-column pattern signatures into
//! variation groups with deterministic ids and colors.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use varigrid_model::{
    AnalysisConfig, AxisAnalysis, ColumnRef, Grid, GroupLabeling, Selection, VariationAnalysis,
    VariationGroup,
};

use crate::extract::FeatureLayout;
use crate::palette;
use crate::pattern::build_pattern;

/// Per-run knobs for the grouping engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub labeling: GroupLabeling,
}

/// Classifies every data column of `grid` under each selection.
///
/// The data range is `[config.data_start_column, last populated column]`;
/// groups are created in first-seen order scanning columns left to right,
/// which fixes id and color assignment deterministically. An empty range or
/// an empty selection produces an empty axis, never an error.
pub fn analyze(
    grid: &Grid,
    config: &AnalysisConfig,
    selections: &[Selection],
    options: &AnalyzeOptions,
) -> VariationAnalysis {
    let layout = FeatureLayout::scan(grid, config);
    let start = config.data_start_column.index();
    let end = grid.last_populated_column();

    let axes = selections
        .iter()
        .map(|selection| analyze_axis(grid, &layout, start, end, selection, options))
        .collect();
    let analysis = VariationAnalysis { axes };
    info!(
        axes = analysis.axes.len(),
        groups = analysis.group_count(),
        columns = analysis.mapped_column_count(),
        "analysis complete"
    );
    analysis
}

fn analyze_axis(
    grid: &Grid,
    layout: &FeatureLayout,
    start: usize,
    end: Option<usize>,
    selection: &Selection,
    options: &AnalyzeOptions,
) -> AxisAnalysis {
    let Some(end) = end else {
        debug!(selection = %selection.name, "grid holds no data; empty axis");
        return AxisAnalysis::empty(&selection.name);
    };
    if start > end {
        debug!(
            selection = %selection.name,
            start,
            end,
            "data range is empty; empty axis"
        );
        return AxisAnalysis::empty(&selection.name);
    }
    if selection.is_empty() {
        debug!(selection = %selection.name, "selection samples no rows; empty axis");
        return AxisAnalysis::empty(&selection.name);
    }

    let mut groups: Vec<VariationGroup> = Vec::new();
    let mut by_pattern: BTreeMap<String, usize> = BTreeMap::new();
    let mut column_groups = BTreeMap::new();

    for index in start..=end {
        let column = ColumnRef::from_index(index);
        let pattern = build_pattern(grid, layout, column, selection);
        let position = match by_pattern.get(pattern.as_str()) {
            Some(&position) => position,
            None => {
                let position = groups.len();
                let id = options.labeling.label(position);
                groups.push(VariationGroup {
                    display_name: id.to_string(),
                    id,
                    color: palette::color_for(position).to_string(),
                    pattern: pattern.clone(),
                    columns: BTreeSet::new(),
                });
                by_pattern.insert(pattern.as_str().to_string(), position);
                position
            }
        };
        groups[position].columns.insert(column);
        column_groups.insert(column, groups[position].id.clone());
    }

    debug!(
        selection = %selection.name,
        groups = groups.len(),
        columns = column_groups.len(),
        "axis grouped"
    );
    AxisAnalysis {
        selection: selection.name.clone(),
        groups,
        column_groups,
    }
}
