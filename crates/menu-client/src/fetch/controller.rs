//! ============================================================================
//! MENU FETCH CONTROLLER
//! ============================================================================
//!
//! Drives fetch → normalize → fallback and publishes the result.
//!
//! ```text
//! Idle ──refetch──▶ Loading ──ok──────▶ Ready
//!                      │
//!                      └──error/timeout──▶ Degraded
//! Ready / Degraded ──refetch──▶ Loading
//! ```
//!
//! Every refetch gets a new generation number. A response is applied only if
//! its generation is still the latest one, so an older request that finishes
//! late never overwrites a newer result.

use super::MenuSource;
use crate::utils::error::{FetchError, DEGRADED_MESSAGE};
use menu_core::{fallback_menu, normalize, CanonicalMenu};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchStatus {
    Idle,
    Loading,
    Ready,
    /// Fetch failed, `data` holds the fallback menu.
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState {
    pub status: FetchStatus,
    /// Previous data stays here while a refetch is loading.
    pub data: Option<CanonicalMenu>,
    /// User-facing message, only set in `Degraded`.
    pub error: Option<String>,
    /// Generation of the latest issued fetch.
    pub generation: u64,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
            generation: 0,
        }
    }
}

impl FetchState {
    pub fn loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

pub struct MenuController<S> {
    source: S,
    timeout: Duration,
    state: watch::Sender<FetchState>,
}

impl<S: MenuSource> MenuController<S> {
    pub fn new(source: S, timeout: Duration) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            source,
            timeout,
            state,
        }
    }

    pub fn snapshot(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver that sees every applied state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Fetch the menu once. Never fails: errors end in `Degraded` with the
    /// fallback menu. Superseded results are dropped.
    pub async fn refetch(&self) {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.status = FetchStatus::Loading;
            state.error = None;
            generation = state.generation;
        });

        debug!(generation, "Menu fetch issued");

        let outcome = match timeout(self.timeout, self.source.fetch_menu()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };

        let (status, data, error) = match outcome {
            Ok(raw) => {
                let menu = normalize(&raw);
                info!(
                    generation,
                    categories = menu.categories.len(),
                    items = menu.item_count(),
                    "✅ Menu loaded"
                );
                (FetchStatus::Ready, menu, None)
            }
            Err(e) => {
                warn!(generation, error = %e, "❌ Menu fetch failed, showing fallback data");
                (
                    FetchStatus::Degraded,
                    fallback_menu(),
                    Some(DEGRADED_MESSAGE.to_string()),
                )
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.status = status;
            state.data = Some(data);
            state.error = error;
            true
        });

        if !applied {
            debug!(generation, "Discarding stale menu response");
        }
    }
}

impl<S: MenuSource + 'static> MenuController<S> {
    /// Fire-and-forget refetch on the tokio runtime.
    pub fn refetch_in_background(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.refetch().await })
    }
}
