//! Placeholder menu shown while the real data source is unavailable.

use crate::model::{CanonicalCategory, CanonicalItem, CanonicalMenu, Id};
use crate::normalize::defaults;

pub const FALLBACK_RESTAURANT_NAME: &str = "Niña Eli";
pub const FALLBACK_DESCRIPTION: &str = "Conexión establecida - Cargando datos...";

/// Deterministic: every call returns an equal menu.
pub fn fallback_menu() -> CanonicalMenu {
    let item = CanonicalItem {
        id: Id::from(1u64),
        name: "Conectando con la base de datos".to_string(),
        description: "Los datos del menú se están cargando".to_string(),
        price: 0.0,
        images: vec![defaults::IMAGES[0].to_string()],
        badges: vec!["recomendado".to_string()],
        rating: defaults::RATING,
        ingredients: vec!["Actualizando en tiempo real...".to_string()],
        preparation_time: defaults::PREPARATION_TIME.to_string(),
        portions: defaults::PORTIONS.to_string(),
    };

    CanonicalMenu {
        restaurant_name: FALLBACK_RESTAURANT_NAME.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        categories: vec![CanonicalCategory {
            id: Id::from(1u64),
            name: "Cargando...".to_string(),
            items: vec![item],
        }],
    }
}
