//! Derived views over the canonical menu.
//!
//! Pure helpers any render surface can call: flattening, badge filtering,
//! counts, badge styles and price formatting.

pub mod badge;
pub mod price;

pub use badge::{badge_color, badge_label, visible_badges, BadgeKind, BadgeStyle};
pub use price::{format_price, star_breakdown, StarBreakdown, CURRENCY_CODE};

use crate::model::{CanonicalItem, CanonicalMenu, Id};
use crate::presentation::{Filter, PresentationState};
use serde::Serialize;

pub const DEFAULT_CARD_DESCRIPTION: &str = "Delicioso plato preparado con ingredientes frescos";

/// Preset filter chips: (filter id, label).
pub const FILTER_PRESETS: [(&str, &str); 4] = [
    ("all", "Todos"),
    ("recomendado", "Recomendados"),
    ("Desayunos", "Desayunos"),
    ("Almuerzos", "Almuerzos"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterTab {
    pub filter: Filter,
    pub label: &'static str,
    pub count: usize,
}

/// Category order first, then item order within each category.
pub fn flatten_items(menu: &CanonicalMenu) -> Vec<&CanonicalItem> {
    menu.categories.iter().flat_map(|c| c.items.iter()).collect()
}

/// `Filter::All` returns the input unchanged.
pub fn filter_by_badge<'a>(items: &[&'a CanonicalItem], filter: &Filter) -> Vec<&'a CanonicalItem> {
    items
        .iter()
        .copied()
        .filter(|item| filter.matches(item))
        .collect()
}

pub fn count_by_badge(items: &[&CanonicalItem], filter: &Filter) -> usize {
    items.iter().filter(|item| filter.matches(item)).count()
}

/// Item grid content for the current filter.
pub fn visible_items<'a>(menu: &'a CanonicalMenu, state: &PresentationState) -> Vec<&'a CanonicalItem> {
    filter_by_badge(&flatten_items(menu), state.active_filter())
}

pub fn category_counts(menu: &CanonicalMenu) -> Vec<(&Id, usize)> {
    menu.categories
        .iter()
        .map(|c| (&c.id, c.items.len()))
        .collect()
}

pub fn filter_tabs(menu: &CanonicalMenu) -> Vec<FilterTab> {
    let items = flatten_items(menu);

    FILTER_PRESETS
        .iter()
        .map(|&(id, label)| {
            let filter = Filter::from(id);
            let count = count_by_badge(&items, &filter);
            FilterTab {
                filter,
                label,
                count,
            }
        })
        .collect()
}

pub fn card_description(item: &CanonicalItem) -> &str {
    if item.description.is_empty() {
        DEFAULT_CARD_DESCRIPTION
    } else {
        &item.description
    }
}
