//! ============================================================================
//! PRESENTATION STATE
//! ============================================================================
//!
//! Selection state of one viewing session: active category tab, active badge
//! filter, the item open in the detail modal and its quantity.
//!
//! ## Who uses it
//! - Category nav → `active_category()` for highlighting, `ScrollToCategory` effect
//! - Filter chips → `active_filter()` together with `views::visible_items`
//! - Item modal → `selected_item()`, `quantity()`, `line_total()`
//!
//! Fields are private; the only way to change them is [`PresentationState::dispatch`].

use super::intent::{Effect, Filter, Intent};
use crate::model::{CanonicalItem, CanonicalMenu, Id};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    /// Category highlighted in the nav bar.
    /// - Starts at the first category of the menu
    /// - `None` only when the menu has no categories
    active_category: Option<Id>,

    /// Badge filter of the item grid. Independent from `active_category`.
    active_filter: Filter,

    /// Item shown in the detail modal. The modal is open iff this is `Some`.
    selected_item: Option<CanonicalItem>,

    /// Always >= 1. Back to 1 whenever the modal closes or another item opens.
    quantity: u32,

    /// Ingredient list expanded inside the modal.
    ingredients_visible: bool,

    /// Filter drawer next to the chips.
    filter_panel_open: bool,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            active_category: None,
            active_filter: Filter::All,
            selected_item: None,
            quantity: 1,
            ingredients_visible: false,
            filter_panel_open: false,
        }
    }
}

impl PresentationState {
    pub fn new(menu: &CanonicalMenu) -> Self {
        Self {
            active_category: menu.first_category_id().cloned(),
            ..Self::default()
        }
    }

    /// Called after a refetch replaced the menu. Keeps the current selection
    /// and only fills in a category when none is active yet.
    pub fn on_menu_replaced(&mut self, menu: &CanonicalMenu) {
        if self.active_category.is_none() {
            self.active_category = menu.first_category_id().cloned();
        }
    }

    pub fn active_category(&self) -> Option<&Id> {
        self.active_category.as_ref()
    }

    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    pub fn selected_item(&self) -> Option<&CanonicalItem> {
        self.selected_item.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected_item.is_some()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn ingredients_visible(&self) -> bool {
        self.ingredients_visible
    }

    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    /// Price of the selected item times the quantity, 0 with the modal closed.
    pub fn line_total(&self) -> f64 {
        self.selected_item
            .as_ref()
            .map(|item| item.price * f64::from(self.quantity))
            .unwrap_or(0.0)
    }

    /// Apply an intent. Never fails; unknown ids are stored as given.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        trace!(?intent, "presentation intent");

        match intent {
            Intent::SelectCategory(id) => {
                self.active_category = Some(id.clone());
                vec![Effect::ScrollToCategory(id)]
            }
            Intent::SelectFilter(filter) => {
                self.active_filter = filter;
                Vec::new()
            }
            Intent::SelectItem(item) => {
                self.selected_item = Some(item);
                self.reset_modal_fields();
                Vec::new()
            }
            Intent::CloseModal => {
                self.close_modal();
                Vec::new()
            }
            Intent::ChangeQuantity(delta) => {
                if self.is_modal_open() {
                    let next = i64::from(self.quantity) + i64::from(delta);
                    self.quantity = next.clamp(1, i64::from(u32::MAX)) as u32;
                }
                Vec::new()
            }
            Intent::ToggleIngredients => {
                if self.is_modal_open() {
                    self.ingredients_visible = !self.ingredients_visible;
                }
                Vec::new()
            }
            Intent::ToggleFilterPanel => {
                self.filter_panel_open = !self.filter_panel_open;
                Vec::new()
            }
            Intent::ConfirmSelection => {
                let effect = self.selected_item.as_ref().map(|item| Effect::AddToOrder {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    quantity: self.quantity,
                });
                self.close_modal();
                effect.into_iter().collect()
            }
        }
    }

    fn close_modal(&mut self) {
        self.selected_item = None;
        self.reset_modal_fields();
    }

    fn reset_modal_fields(&mut self) {
        self.quantity = 1;
        self.ingredients_visible = false;
    }
}
