pub mod settings;

pub use settings::{ApiConfig, LogFormat, LoggingConfig, Settings};
