use crate::config::ApiConfig;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

const CONNECTION_REFUSED_HINTS: [&str; 3] = [
    "Make sure the menu backend is running",
    "Check that APP_API__BASE_URL points at the right host and port",
    "Check that the backend allows requests from this origin (CORS)",
];

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub reachable: bool,
    pub status: Option<u16>,
    pub latency: Duration,
    pub hints: Vec<&'static str>,
}

/// Operational check against `GET <base-url>/api/restaurant/`.
/// Only meant for troubleshooting screens, the menu flow never depends on it.
pub struct ConnectivityProbe {
    client: Client,
    url: String,
}

impl ConnectivityProbe {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.probe_timeout()).build()?;
        Ok(Self {
            client,
            url: config.restaurant_url(),
        })
    }

    pub async fn check(&self) -> ProbeReport {
        info!("🔍 Probing backend at {}", self.url);
        let started = Instant::now();

        match self.client.get(&self.url).send().await {
            Ok(response) => {
                let status = response.status();
                let latency = started.elapsed();

                if status.is_success() {
                    info!("✅ Backend reachable ({}, {:?})", status, latency);
                } else {
                    warn!("Backend answered {} on {}", status, self.url);
                }

                ProbeReport {
                    url: self.url.clone(),
                    reachable: status.is_success(),
                    status: Some(status.as_u16()),
                    latency,
                    hints: Vec::new(),
                }
            }
            Err(e) => {
                error!("❌ Backend connection error: {}", e);

                let hints = if e.is_connect() {
                    for hint in CONNECTION_REFUSED_HINTS {
                        warn!("💡 {}", hint);
                    }
                    CONNECTION_REFUSED_HINTS.to_vec()
                } else {
                    Vec::new()
                };

                ProbeReport {
                    url: self.url.clone(),
                    reachable: false,
                    status: e.status().map(|s| s.as_u16()),
                    latency: started.elapsed(),
                    hints,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reachable_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/restaurant/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nombre": "Niña Eli"})))
            .mount(&server)
            .await;

        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let report = ConnectivityProbe::new(&config).unwrap().check().await;

        assert!(report.reachable);
        assert_eq!(report.status, Some(200));
        assert!(report.hints.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/restaurant/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        let report = ConnectivityProbe::new(&config).unwrap().check().await;

        assert!(!report.reachable);
        assert_eq!(report.status, Some(404));
    }

    #[tokio::test]
    async fn test_refused_connection_gives_hints() {
        // Bind then drop to get a local port nobody listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let config = ApiConfig {
            base_url: format!("http://127.0.0.1:{}", port),
            ..ApiConfig::default()
        };
        let report = ConnectivityProbe::new(&config).unwrap().check().await;

        assert!(!report.reachable);
        assert_eq!(report.status, None);
        assert_eq!(report.hints.len(), CONNECTION_REFUSED_HINTS.len());
    }
}
