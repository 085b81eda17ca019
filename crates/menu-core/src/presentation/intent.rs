//! User intents, filters and the side effects handed back to the render layer.

use crate::model::{CanonicalItem, Id};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FILTER_ALL: &str = "all";

/// Badge filter of the item grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Filter {
    #[default]
    All,
    /// Items carrying this badge. Badges nobody carries just give an empty grid.
    Badge(String),
}

impl Filter {
    pub fn badge(id: impl Into<String>) -> Self {
        Filter::Badge(id.into())
    }

    pub fn id(&self) -> &str {
        match self {
            Filter::All => FILTER_ALL,
            Filter::Badge(badge) => badge,
        }
    }

    pub fn matches(&self, item: &CanonicalItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Badge(badge) => item.has_badge(badge),
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(FILTER_ALL) {
            Filter::All
        } else {
            Filter::Badge(value.to_string())
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::from(value.as_str())
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.id().to_string()
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::from(s))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything a render surface can ask the presentation state to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Category tab clicked.
    SelectCategory(Id),
    /// Badge filter chip clicked.
    SelectFilter(Filter),
    /// Item card clicked, opens the detail modal.
    SelectItem(CanonicalItem),
    CloseModal,
    /// `+1` / `-1` buttons in the modal.
    ChangeQuantity(i32),
    ToggleIngredients,
    ToggleFilterPanel,
    /// "Agregar al pedido" button.
    ConfirmSelection,
}

/// Instructions for the render layer. Not part of the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollToCategory(Id),
    AddToOrder {
        item_id: Id,
        name: String,
        quantity: u32,
    },
}
