//! Raw payload from `GET /api/menu/`.
//!
//! The backend is not trusted to send a fixed shape: prices arrive as strings
//! or numbers, `badges` as a single string or a list, `images` as objects with
//! an `image_url` field or not at all. The payload is therefore kept as a
//! plain JSON value and read field by field by the normalizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMenuResponse(Value);

impl RawMenuResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a response body. Only fails on invalid JSON, any JSON document
    /// is accepted as a menu.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Category objects in source order. Non-object entries are skipped.
    pub fn categories(&self) -> impl Iterator<Item = &serde_json::Map<String, Value>> {
        self.0
            .get("categories")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    pub fn category_count(&self) -> usize {
        self.categories().count()
    }
}

impl From<Value> for RawMenuResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
