#![deny(unsafe_code)]

use crate::Feature;

/// One feature of a selection with the item names to sample, in order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionEntry {
    pub feature: String,
    pub items: Vec<String>,
}

/// A named, ordered choice of feature/item rows that defines one
/// classification axis.
///
/// Entry order is significant: it fixes the pattern signature layout and
/// must be identical for every column within one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub name: String,
    pub entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: impl Into<String>, items: Vec<String>) {
        self.entries.push(SelectionEntry {
            feature: feature.into(),
            items,
        });
    }

    /// Derives a selection from the `selected` flags of an extracted
    /// feature tree. Features with no selected items contribute nothing.
    pub fn from_features(name: impl Into<String>, features: &[Feature]) -> Self {
        let mut selection = Self::new(name);
        for feature in features {
            if !feature.selected {
                continue;
            }
            let items: Vec<String> = feature
                .items
                .iter()
                .filter(|item| item.selected)
                .map(|item| item.name.clone())
                .collect();
            if !items.is_empty() {
                selection.push(feature.name.clone(), items);
            }
        }
        selection
    }

    /// Number of marks a pattern built from this selection will carry.
    pub fn mark_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }
}
