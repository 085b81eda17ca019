use crate::config::{LogFormat, LoggingConfig};
use anyhow::Result;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    // RUST_LOG wins over the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
    let filter = EnvFilter::try_new(&log_level)?;

    // Optional file appender (<dir>/menu-client.<date>.log, daily rotation)
    let file_appender = match &config.directory {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("menu-client")
                .filename_suffix("log")
                .build(dir)?,
        ),
        None => None,
    };

    match config.format {
        LogFormat::Json => {
            // JSON format untuk production
            let file_layer = file_appender.map(|appender| {
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_target(true)
                    .with_level(true)
            });

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stdout)
                        .with_target(true)
                        .with_level(true),
                )
                .with(file_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            // Pretty format untuk development
            let file_layer = file_appender.map(|appender| {
                fmt::layer()
                    .with_writer(appender)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false) // No colors in file
            });

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_writer(std::io::stdout)
                        .with_target(true)
                        .with_level(true)
                        .with_thread_ids(false),
                )
                .with(file_layer)
                .try_init()?;
        }
    }

    Ok(())
}
