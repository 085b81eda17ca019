use super::MenuSource;
use crate::config::ApiConfig;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use menu_core::RawMenuResponse;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// `GET <base-url>/api/menu/` over reqwest.
pub struct HttpMenuSource {
    client: Client,
    menu_url: String,
}

impl HttpMenuSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        let menu_url = config.menu_url();
        reqwest::Url::parse(&menu_url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", menu_url, e)))?;

        Ok(Self { client, menu_url })
    }

    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_menu(&self) -> Result<RawMenuResponse> {
        info!("🌐 Fetching menu from {}", self.menu_url);

        let response = self.client.get(&self.menu_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Menu API responded: {}", response.status());

        let body = response.bytes().await?;
        let raw = RawMenuResponse::from_slice(&body)?;

        log_payload_shape(&raw);

        Ok(raw)
    }
}

/// Per-category item and image counts, for diagnosing odd backend payloads.
fn log_payload_shape(raw: &RawMenuResponse) {
    debug!("📊 {} categories in payload", raw.category_count());

    for (i, category) in raw.categories().enumerate() {
        let (name, items) = category_shape(category);
        debug!("  category {}: {:?} with {} items", i, name, items.len());

        for (j, item) in items.iter().enumerate() {
            let (name, images) = item_shape(item);
            debug!("    item {}: {:?} - {} images", j, name, images);
        }
    }
}

// Field reads stay outside `debug!`, where `Value` resolves to tracing's trait.
fn category_shape(category: &Map<String, Value>) -> (&str, &[Value]) {
    let name = category.get("nombre").and_then(Value::as_str).unwrap_or_default();
    let items = category
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    (name, items)
}

fn item_shape(item: &Value) -> (&str, usize) {
    let name = item.get("nombre").and_then(Value::as_str).unwrap_or_default();
    let images = item.get("images").and_then(Value::as_array).map(Vec::len).unwrap_or(0);
    (name, images)
}
