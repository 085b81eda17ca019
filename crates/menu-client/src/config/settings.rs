use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,  // backend root, tanpa trailing slash
    #[serde(default = "default_menu_path")]
    pub menu_path: String,
    #[serde(default = "default_restaurant_path")]
    pub restaurant_path: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_probe_timeout_seconds")]
    pub probe_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Daily rotated log files go here. `None` → stdout only.
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty, // development
    Json,   // production
}

fn default_menu_path() -> String {
    "/api/menu/".to_string()
}

fn default_restaurant_path() -> String {
    "/api/restaurant/".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_probe_timeout_seconds() -> u64 {
    5
}

fn default_log_level() -> String {
    "info,menu_client=debug,menu_core=info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            menu_path: default_menu_path(),
            restaurant_path: default_restaurant_path(),
            timeout_seconds: default_timeout_seconds(),
            probe_timeout_seconds: default_probe_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            directory: None,
        }
    }
}

impl ApiConfig {
    pub fn menu_url(&self) -> String {
        join_url(&self.base_url, &self.menu_path)
    }

    pub fn restaurant_url(&self) -> String {
        join_url(&self.base_url, &self.restaurant_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Environment overrides, e.g. `APP_API__BASE_URL=http://menu.local:8000`.
/// The prefix is joined with a single `_`, nested keys with `__`.
fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    pub fn load() -> Result<Self> {
        // Load from .env first
        dotenvy::dotenv().ok();

        let defaults = ApiConfig::default();

        let config = Config::builder()
            .set_default("api.base_url", defaults.base_url)?
            .set_default("logging.level", default_log_level())?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(environment())
            .build()?;

        let settings: Settings = config.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if let Err(e) = reqwest::Url::parse(&self.api.base_url) {
            anyhow::bail!("Invalid api.base_url {:?}: {}", self.api.base_url, e);
        }

        if self.api.timeout_seconds == 0 {
            anyhow::bail!("api.timeout_seconds must be greater than zero");
        }

        if self.api.probe_timeout_seconds == 0 {
            anyhow::bail!("api.probe_timeout_seconds must be greater than zero");
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
