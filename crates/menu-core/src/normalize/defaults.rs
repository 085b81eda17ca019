//! Default table for the normalizer.
//!
//! One entry per canonical field. Whenever the source value is missing,
//! blank or unparseable the normalizer substitutes the value from here.

pub const RESTAURANT_NAME: &str = "Mi Restaurante";
pub const MENU_DESCRIPTION: &str = "Menú digital en tiempo real";
pub const EMPTY_MENU_DESCRIPTION: &str = "Menú digital";

pub const PRICE: f64 = 0.0;
pub const RATING: f64 = 4.5;
pub const RATING_MAX: f64 = 5.0;

pub const PREPARATION_TIME: &str = "15-20 min";
pub const PORTIONS: &str = "1 persona";

/// Always applied as a pair.
pub const IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=800&h=600&fit=crop&crop=center&auto=format",
    "https://images.unsplash.com/photo-1484980972926-edee96e0960d?w=800&h=600&fit=crop&crop=center&auto=format",
];

pub const INGREDIENTS: [&str; 3] = [
    "Ingredientes seleccionados",
    "Frescos y de calidad",
    "Preparación artesanal",
];

// Source keys, first match wins
pub const RESTAURANT_NAME_KEYS: &[&str] = &["restaurantName", "restaurant_name", "nombre"];
pub const NAME_KEYS: &[&str] = &["nombre", "name"];
pub const DESCRIPTION_KEYS: &[&str] = &["descripcion", "description"];
pub const PRICE_KEYS: &[&str] = &["precio", "price"];
pub const IMAGE_URL_KEY: &str = "image_url";

pub fn images() -> Vec<String> {
    IMAGES.iter().map(|s| s.to_string()).collect()
}

pub fn ingredients() -> Vec<String> {
    INGREDIENTS.iter().map(|s| s.to_string()).collect()
}

pub fn category_id(index: usize) -> String {
    format!("category-{}", index)
}

pub fn item_id(index: usize) -> String {
    format!("item-{}", index)
}
