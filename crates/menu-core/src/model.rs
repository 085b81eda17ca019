// ============================================================================
// Menu Core - Canonical Model
// File: crates/menu-core/src/model.rs
// Description: Locale-neutral menu shape consumed by every render surface
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a category or an item.
///
/// The menu API sends numeric ids, older payloads send strings. Both end up
/// here as the same string form (`1` and `"1"` are the same id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Normalized menu. Replaced wholesale on every fetch, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMenu {
    pub restaurant_name: String,
    pub description: String,
    /// Display order.
    pub categories: Vec<CanonicalCategory>,
}

impl CanonicalMenu {
    pub fn category(&self, id: &Id) -> Option<&CanonicalCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn first_category_id(&self) -> Option<&Id> {
        self.categories.first().map(|c| &c.id)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCategory {
    pub id: Id,
    pub name: String,
    pub items: Vec<CanonicalItem>,
}

/// A single dish.
///
/// After normalization `images` and `ingredients` are never empty, `price`
/// is finite and non-negative and `rating` lies within `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    /// Source order, duplicates kept.
    pub badges: Vec<String>,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub preparation_time: String,
    pub portions: String,
}

impl CanonicalItem {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// First badge, shown on the item card.
    pub fn main_badge(&self) -> Option<&str> {
        self.badges.first().map(String::as_str)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
