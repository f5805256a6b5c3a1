//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Domovoy client.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard; the caller must keep it alive for the
/// lifetime of the process or the file layer stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "domovoy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an API request with structured data
pub fn log_api_request(method: &str, path: &str, has_token: bool) {
    debug!(
        method = method,
        path = path,
        has_token = has_token,
        "Dispatching API request"
    );
}

/// Log a fallback decision
pub fn log_fallback(method: &str, path: &str, reason: &str) {
    warn!(
        method = method,
        path = path,
        reason = reason,
        "Serving request from offline store"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}
