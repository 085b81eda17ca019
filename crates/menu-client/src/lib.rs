pub mod config;
pub mod diagnostics;
pub mod fetch;
pub mod utils;

pub use config::Settings;
pub use fetch::{FetchState, FetchStatus, HttpMenuSource, MenuController, MenuSource};
pub use utils::error::{FetchError, DEGRADED_MESSAGE};
