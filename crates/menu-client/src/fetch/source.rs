use crate::utils::error::Result;
use async_trait::async_trait;
use menu_core::RawMenuResponse;

/// Anything that can hand over the raw menu payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menu(&self) -> Result<RawMenuResponse>;
}
