#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ColumnRef;

/// The canonical pattern string for one column under one selection.
///
/// Byte equality of signatures defines group membership.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PatternSignature(String);

impl PatternSignature {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group identifier. Unique within one axis at creation time; renames may
/// later make two groups share a display id without merging them.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id generation convention for newly created groups.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GroupLabeling {
    /// `A`, `B`, …, `Z`, `AA`, … (same codec as column letters).
    #[default]
    Letters,
    /// `1`, `2`, `3`, …
    Numeric,
}

impl GroupLabeling {
    /// The id for the group created at `order` (zero-based creation order).
    pub fn label(&self, order: usize) -> GroupId {
        match self {
            Self::Letters => GroupId::new(ColumnRef::from_index(order).letters()),
            Self::Numeric => GroupId::new((order + 1).to_string()),
        }
    }
}

/// One set of columns sharing an exact pattern under one selection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VariationGroup {
    pub id: GroupId,
    pub display_name: String,
    /// Hex color assigned from the palette by creation order.
    pub color: String,
    pub pattern: PatternSignature,
    pub columns: BTreeSet<ColumnRef>,
}

/// The classification produced by one selection: groups in creation order
/// plus the total column→group mapping.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AxisAnalysis {
    pub selection: String,
    pub groups: Vec<VariationGroup>,
    pub column_groups: BTreeMap<ColumnRef, GroupId>,
}

impl AxisAnalysis {
    pub fn empty(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            groups: Vec::new(),
            column_groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, id: &GroupId) -> Option<&VariationGroup> {
        self.groups.iter().find(|group| &group.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.column_groups.is_empty()
    }
}

/// The engine's sole output: one axis per input selection, in input order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VariationAnalysis {
    pub axes: Vec<AxisAnalysis>,
}

impl VariationAnalysis {
    pub fn group_count(&self) -> usize {
        self.axes.iter().map(|axis| axis.groups.len()).sum()
    }

    pub fn mapped_column_count(&self) -> usize {
        self.axes
            .iter()
            .map(|axis| axis.column_groups.len())
            .sum()
    }
}
