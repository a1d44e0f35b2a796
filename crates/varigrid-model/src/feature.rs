#![deny(unsafe_code)]

/// One item row belonging to a feature.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub name: String,
    pub selected: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: true,
        }
    }
}

/// A feature and the items it owns, in first-seen row order.
///
/// Item names are unique only within their feature; two features may each
/// carry an item with the same name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    pub name: String,
    pub items: Vec<Item>,
    pub selected: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            selected: true,
        }
    }

    pub fn push_item(&mut self, name: impl Into<String>) {
        self.items.push(Item::new(name));
    }
}
