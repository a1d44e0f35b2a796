#![deny(unsafe_code)]

//! Group renaming that keeps group records and column mappings consistent.

use std::collections::BTreeMap;

use varigrid_model::{AxisAnalysis, GroupId, VariationAnalysis, VariationGroup};

/// Applies `renames` (old id → new id) and returns a new analysis.
///
/// Groups and column mappings are rewritten in one pass over a copy, so no
/// caller can observe a group under its new id while a column still points
/// at the old one. Ids absent from the map are untouched; map keys matching
/// no group are ignored. A rename may collide with an existing id: the two
/// groups then share a display id but remain distinct records.
pub fn relabel(
    analysis: &VariationAnalysis,
    renames: &BTreeMap<String, String>,
) -> VariationAnalysis {
    VariationAnalysis {
        axes: analysis
            .axes
            .iter()
            .map(|axis| relabel_axis(axis, renames))
            .collect(),
    }
}

fn relabel_axis(axis: &AxisAnalysis, renames: &BTreeMap<String, String>) -> AxisAnalysis {
    let groups = axis
        .groups
        .iter()
        .map(|group| match renames.get(group.id.as_str()) {
            Some(new_id) => VariationGroup {
                id: GroupId::new(new_id.clone()),
                display_name: new_id.clone(),
                ..group.clone()
            },
            None => group.clone(),
        })
        .collect();
    let column_groups = axis
        .column_groups
        .iter()
        .map(|(column, id)| {
            let id = match renames.get(id.as_str()) {
                Some(new_id) => GroupId::new(new_id.clone()),
                None => id.clone(),
            };
            (*column, id)
        })
        .collect();
    AxisAnalysis {
        selection: axis.selection.clone(),
        groups,
        column_groups,
    }
}
