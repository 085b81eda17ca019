use std::time::Duration;
use thiserror::Error;

/// Message shown to the user whenever the menu falls back to sample data.
/// The technical cause only goes to the logs.
pub const DEGRADED_MESSAGE: &str = "No se pudo cargar el menú. Mostrando datos de ejemplo.";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Menu API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Network unreachable, timeout or non-2xx.
    pub fn is_transport(&self) -> bool {
        !self.is_parse()
    }

    /// The body arrived but was not JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
