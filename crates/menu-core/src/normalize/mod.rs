//! View-model normalizer.
//!
//! `normalize` turns whatever the menu API returned into a [`CanonicalMenu`].
//! It is total: a malformed field degrades to its entry in [`defaults`],
//! nothing here returns an error.

pub mod defaults;

use crate::model::{CanonicalCategory, CanonicalItem, CanonicalMenu, Id};
use crate::raw::RawMenuResponse;
use serde_json::{Map, Value};
use std::collections::HashSet;

type Object = Map<String, Value>;

pub fn normalize(raw: &RawMenuResponse) -> CanonicalMenu {
    let root = raw.as_value().as_object();

    let restaurant_name = root
        .and_then(|obj| text(obj, defaults::RESTAURANT_NAME_KEYS))
        .unwrap_or_else(|| defaults::RESTAURANT_NAME.to_string());

    let sources: Vec<&Object> = raw.categories().collect();
    let mut taken = source_ids(&sources);
    let categories: Vec<CanonicalCategory> = sources
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let id = identifier(category)
                .unwrap_or_else(|| unique_id(&mut taken, defaults::category_id(index)));
            normalize_category(id, category)
        })
        .collect();

    let description = if categories.is_empty() {
        defaults::EMPTY_MENU_DESCRIPTION
    } else {
        defaults::MENU_DESCRIPTION
    };

    CanonicalMenu {
        restaurant_name,
        description: description.to_string(),
        categories,
    }
}

fn normalize_category(id: Id, category: &Object) -> CanonicalCategory {
    let sources: Vec<&Object> = category
        .get("items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .collect();

    let mut taken = source_ids(&sources);
    let items = sources
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = identifier(item)
                .unwrap_or_else(|| unique_id(&mut taken, defaults::item_id(index)));
            normalize_item(id, item)
        })
        .collect();

    CanonicalCategory {
        id,
        name: text(category, defaults::NAME_KEYS).unwrap_or_default(),
        items,
    }
}

fn normalize_item(id: Id, item: &Object) -> CanonicalItem {
    let price = number(item, defaults::PRICE_KEYS)
        .filter(|p| *p > 0.0)
        .unwrap_or(defaults::PRICE);

    let rating = number(item, &["rating"])
        .map(|r| r.clamp(0.0, defaults::RATING_MAX))
        .unwrap_or(defaults::RATING);

    let mut images = image_urls(item);
    if images.is_empty() {
        images = defaults::images();
    }

    let mut ingredients = string_list(item.get("ingredients"));
    if ingredients.is_empty() {
        ingredients = defaults::ingredients();
    }

    CanonicalItem {
        id,
        name: text(item, defaults::NAME_KEYS).unwrap_or_default(),
        description: text(item, defaults::DESCRIPTION_KEYS).unwrap_or_default(),
        price,
        images,
        badges: badges(item.get("badges")),
        rating,
        ingredients,
        preparation_time: text(item, &["preparation_time"])
            .unwrap_or_else(|| defaults::PREPARATION_TIME.to_string()),
        portions: text(item, &["portions"]).unwrap_or_else(|| defaults::PORTIONS.to_string()),
    }
}

/// First non-blank string (or number rendered as text) under any of `keys`.
fn text(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Numbers and strings that start with one (`"12.50"`, `"8000 COP"`).
/// Non-finite values are rejected.
fn number(obj: &Object, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| match obj.get(*key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => leading_float(s),
            _ => None,
        })
        .filter(|n| n.is_finite())
}

/// Longest decimal prefix of `s` after leading whitespace: optional sign,
/// digits with an optional fraction, optional exponent. Trailing text is
/// ignored.
fn leading_float(s: &str) -> Option<f64> {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    // every byte in 0..end is ASCII
    s[..end].parse().ok()
}

fn identifier(obj: &Object) -> Option<Id> {
    match obj.get("id")? {
        Value::Number(n) => Some(Id::new(n.to_string())),
        Value::String(s) if !s.trim().is_empty() => Some(Id::new(s.trim())),
        _ => None,
    }
}

fn source_ids(objects: &[&Object]) -> HashSet<Id> {
    objects.iter().filter_map(|obj| identifier(obj)).collect()
}

/// `base`, or `base-1`, `base-2`, ... when a sibling already uses it.
fn unique_id(taken: &mut HashSet<Id>, base: String) -> Id {
    let mut id = Id::new(base.clone());
    let mut suffix = 1;
    while taken.contains(&id) {
        id = Id::new(format!("{}-{}", base, suffix));
        suffix += 1;
    }
    taken.insert(id.clone());
    id
}

/// `images[].image_url` in source order, bare strings accepted too, then the
/// singular `image` field.
fn image_urls(item: &Object) -> Vec<String> {
    let mut urls: Vec<String> = item
        .get("images")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|image| match image {
            Value::String(url) => Some(url.as_str()),
            Value::Object(obj) => obj.get(defaults::IMAGE_URL_KEY).and_then(Value::as_str),
            _ => None,
        })
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim().to_string())
        .collect();

    if urls.is_empty() {
        if let Some(url) = item.get("image").and_then(Value::as_str) {
            if !url.trim().is_empty() {
                urls.push(url.trim().to_string());
            }
        }
    }

    urls
}

/// A single badge is wrapped into a one-element list.
fn badges(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        Some(list @ Value::Array(_)) => string_list(Some(list)),
        _ => Vec::new(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn first_item(raw: Value) -> CanonicalItem {
        let menu = normalize(&RawMenuResponse::new(raw));
        menu.categories[0].items[0].clone()
    }

    #[test]
    fn test_breakfast_scenario() {
        let menu = normalize(&RawMenuResponse::new(json!({
            "categories": [{
                "id": 1,
                "nombre": "Breakfast",
                "items": [{"id": 10, "nombre": "Eggs", "precio": "8000", "images": []}]
            }]
        })));

        let category = &menu.categories[0];
        assert_eq!(category.id, Id::from(1u64));
        assert_eq!(category.name, "Breakfast");

        let item = &category.items[0];
        assert_eq!(item.id, Id::from(10u64));
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.price, 8000.0);
        assert_eq!(item.images, defaults::images());
    }

    #[test]
    fn test_price_parsing() {
        let item = first_item(json!({"categories": [{"items": [{"precio": "12.50"}]}]}));
        assert_eq!(item.price, 12.5);

        let item = first_item(json!({"categories": [{"items": [{"precio": "abc"}]}]}));
        assert_eq!(item.price, 0.0);

        let item = first_item(json!({"categories": [{"items": [{"precio": null}]}]}));
        assert_eq!(item.price, 0.0);

        let item = first_item(json!({"categories": [{"items": [{"precio": -3}]}]}));
        assert_eq!(item.price, 0.0);

        let item = first_item(json!({"categories": [{"items": [{"precio": 15000}]}]}));
        assert_eq!(item.price, 15000.0);
    }

    #[test]
    fn test_numeric_prefix_is_parsed() {
        let item = first_item(json!({"categories": [{"items": [{
            "precio": "8000 COP",
            "rating": "4.8 estrellas"
        }]}]}));
        assert_eq!(item.price, 8000.0);
        assert_eq!(item.rating, 4.8);

        let item = first_item(json!({"categories": [{"items": [{"precio": "12.50abc"}]}]}));
        assert_eq!(item.price, 12.5);

        let item = first_item(json!({"categories": [{"items": [{"precio": "  1.5e3 pesos"}]}]}));
        assert_eq!(item.price, 1500.0);

        let item = first_item(json!({"categories": [{"items": [{"precio": "COP 8000"}]}]}));
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_leading_float_edges() {
        assert_eq!(leading_float("42"), Some(42.0));
        assert_eq!(leading_float("-3.5kg"), Some(-3.5));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("7."), Some(7.0));
        assert_eq!(leading_float("2e"), Some(2.0));
        assert_eq!(leading_float("2e+x"), Some(2.0));
        assert_eq!(leading_float("1,000"), Some(1.0));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("NaN"), None);
        assert_eq!(leading_float("Infinity"), None);
    }

    #[test]
    fn test_missing_images_use_default_pair() {
        let menu = normalize(&RawMenuResponse::new(json!({
            "categories": [
                {"items": [{"nombre": "a"}, {"nombre": "b", "images": null}]},
                {"items": [{"nombre": "c", "images": [{"alt": "no url"}]}]}
            ]
        })));

        for item in menu.categories.iter().flat_map(|c| &c.items) {
            assert!(item.images.len() >= 2, "{} has {:?}", item.name, item.images);
            assert_eq!(item.images, defaults::images());
        }
    }

    #[test]
    fn test_images_keep_source_order() {
        let item = first_item(json!({"categories": [{"items": [{
            "images": [
                {"image_url": "https://cdn/1.jpg"},
                "https://cdn/2.jpg",
                {"image_url": ""},
                {"image_url": "https://cdn/3.jpg"}
            ]
        }]}]}));

        assert_eq!(
            item.images,
            vec!["https://cdn/1.jpg", "https://cdn/2.jpg", "https://cdn/3.jpg"]
        );
    }

    #[test]
    fn test_singular_image_field() {
        let item = first_item(json!({"categories": [{"items": [{"image": "https://cdn/x.jpg"}]}]}));
        assert_eq!(item.images, vec!["https://cdn/x.jpg"]);
    }

    #[test]
    fn test_badge_normalization() {
        let item = first_item(json!({"categories": [{"items": [{"badges": "picante"}]}]}));
        assert_eq!(item.badges, vec!["picante"]);

        let item = first_item(json!({"categories": [{"items": [{"badges": ["vegano", "vegano"]}]}]}));
        assert_eq!(item.badges, vec!["vegano", "vegano"]);

        let item = first_item(json!({"categories": [{"items": [{}]}]}));
        assert!(item.badges.is_empty());

        let item = first_item(json!({"categories": [{"items": [{"badges": ""}]}]}));
        assert!(item.badges.is_empty());
    }

    #[test]
    fn test_rating_defaults_and_clamp() {
        let item = first_item(json!({"categories": [{"items": [{"rating": "bad"}]}]}));
        assert_eq!(item.rating, 4.5);

        let item = first_item(json!({"categories": [{"items": [{"rating": "3.8"}]}]}));
        assert_eq!(item.rating, 3.8);

        let item = first_item(json!({"categories": [{"items": [{"rating": 9}]}]}));
        assert_eq!(item.rating, 5.0);
    }

    #[test]
    fn test_pass_through_and_defaults() {
        let item = first_item(json!({"categories": [{"items": [{
            "ingredients": ["huevo", "arepa"],
            "preparation_time": "5 min",
            "portions": "2 personas",
            "descripcion": "Con queso"
        }]}]}));
        assert_eq!(item.ingredients, vec!["huevo", "arepa"]);
        assert_eq!(item.preparation_time, "5 min");
        assert_eq!(item.portions, "2 personas");
        assert_eq!(item.description, "Con queso");

        let item = first_item(json!({"categories": [{"items": [{"ingredients": []}]}]}));
        assert_eq!(item.ingredients, defaults::ingredients());
        assert_eq!(item.preparation_time, defaults::PREPARATION_TIME);
        assert_eq!(item.portions, defaults::PORTIONS);
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_restaurant_name_and_description() {
        let menu = normalize(&RawMenuResponse::new(json!({"restaurantName": "  "})));
        assert_eq!(menu.restaurant_name, defaults::RESTAURANT_NAME);
        assert_eq!(menu.description, defaults::EMPTY_MENU_DESCRIPTION);
        assert!(menu.categories.is_empty());

        let menu = normalize(&RawMenuResponse::new(json!({
            "restaurantName": "La Esquina",
            "categories": [{"id": 1}]
        })));
        assert_eq!(menu.restaurant_name, "La Esquina");
        assert_eq!(menu.description, defaults::MENU_DESCRIPTION);
        assert!(menu.categories[0].items.is_empty());
    }

    #[test]
    fn test_non_object_payload_is_empty_menu() {
        let menu = normalize(&RawMenuResponse::new(json!("nope")));
        assert_eq!(menu.restaurant_name, defaults::RESTAURANT_NAME);
        assert!(menu.categories.is_empty());
    }

    #[test]
    fn test_ids_are_stable_across_runs() {
        let raw = RawMenuResponse::new(json!({
            "categories": [{"nombre": "Sin id", "items": [{"nombre": "x"}, {"id": "abc"}]}]
        }));
        let a = normalize(&raw);
        let b = normalize(&raw);
        assert_eq!(a, b);
        assert_eq!(a.categories[0].id.as_str(), "category-0");
        assert_eq!(a.categories[0].items[0].id.as_str(), "item-0");
        assert_eq!(a.categories[0].items[1].id.as_str(), "abc");
    }

    #[test]
    fn test_positional_ids_skip_taken_source_ids() {
        let menu = normalize(&RawMenuResponse::new(json!({
            "categories": [
                {"id": "category-1", "nombre": "A"},
                {"nombre": "B"},
                {"nombre": "C", "items": [{"nombre": "x"}, {"id": "item-0"}, {"nombre": "y"}]}
            ]
        })));

        let ids: Vec<&str> = menu.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["category-1", "category-1-1", "category-2"]);

        let ids: Vec<&str> = menu.categories[2].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item-0-1", "item-0", "item-2"]);
    }

    #[test]
    fn test_positional_suffix_skips_taken_suffix() {
        let menu = normalize(&RawMenuResponse::new(json!({
            "categories": [
                {"id": "category-1-1"},
                {},
                {"id": "category-1"}
            ]
        })));

        let ids: Vec<&str> = menu.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["category-1-1", "category-1-2", "category-1"]);
    }
}
