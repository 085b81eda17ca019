//! # Menu Core
//!
//! Canonical menu model, payload normalization, fallback data, presentation
//! state and derived views. No I/O lives in this crate.

pub mod fallback;
pub mod model;
pub mod normalize;
pub mod presentation;
pub mod raw;
pub mod views;

pub use fallback::fallback_menu;
pub use model::{CanonicalCategory, CanonicalItem, CanonicalMenu, Id};
pub use normalize::normalize;
pub use presentation::{Effect, Filter, Intent, PresentationState};
pub use raw::RawMenuResponse;
