//! Logging setup and configuration
//!
//! The console shows this crate's events at `info` and everything else at
//! `warn`. The file layer writes one JSON object per event so order and
//! checkout events can be grepped by field. `RUST_LOG` replaces both defaults.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_DIR: &str = "output/logs";
pub const LOG_FILE: &str = "timbro-checkout.log";
pub const DEFAULT_LOG_DIRECTIVES: &str = "warn,timbro_checkout=info";

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Filter from an explicit directive string, or the crate default when the
/// string is missing or blank.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_LOG_DIRECTIVES);

    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log directives: {}", directives))
}

pub fn setup_logging() -> Result<Arc<LoggingGuard>> {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(true)
                .without_time()
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .json()
                .with_current_span(false)
        )
        .with(env_filter(rust_log.as_deref())?)
        .init();

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories() -> Result<()> {
    std::fs::create_dir_all(LOG_DIR)
        .with_context(|| format!("Failed to create {}", LOG_DIR))?;
    Ok(())
}
