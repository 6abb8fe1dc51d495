//! Item templates and item instances.
//!
//! - ItemTemplate: authored content (what an item is)
//! - Item: a concrete instance held by a container (what an actor carries)

use super::{ItemId, UsableConfig};

/// Authored item definition loaded from content files.
///
/// Templates are immutable; every instance gets its own copy of the usable
/// configuration so charge bookkeeping never leaks between instances.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    /// Stable content reference, e.g. `"limbo:potion_of_healing"`.
    pub entity_ref: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usable: Option<UsableConfig>,
}

impl ItemTemplate {
    pub fn new(entity_ref: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity_ref: entity_ref.into(),
            name: name.into(),
            keywords: Vec::new(),
            usable: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_usable(mut self, usable: UsableConfig) -> Self {
        self.usable = Some(usable);
        self
    }

    /// Creates a fresh instance of this template.
    pub fn instantiate(&self, id: ItemId) -> Item {
        Item {
            id,
            entity_ref: self.entity_ref.clone(),
            name: self.name.clone(),
            keywords: self.keywords.clone(),
            usable: self.usable.clone(),
        }
    }
}

/// Item instance owned by a container.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub entity_ref: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub usable: Option<UsableConfig>,
}

impl Item {
    /// Returns true if any keyword starts with `needle` (case-insensitive).
    pub fn matches_keyword(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        !needle.is_empty()
            && self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().starts_with(&needle))
    }
}
