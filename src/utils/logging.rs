//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the APEX portal client. Logs go to stderr so command output on stdout
//! stays machine-readable. Tokens are never logged.

use tracing::{debug, info, warn, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};
use crate::config::{LogFormat, LoggingConfig};
use crate::models::Role;
use crate::utils::errors::{ApexError, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging based on configuration.
///
/// The returned guard must be held for as long as file logging should keep
/// flushing; it is `None` when no log file is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .map_err(|e| ApexError::Config(format!("Invalid log filter: {}", e)))?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    });

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "apex.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| ApexError::Config(format!("Logging already initialized: {}", e)))?;

    debug!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing request
pub fn log_request(method: &str, url: &str, authenticated: bool) {
    debug!(
        method = method,
        url = url,
        authenticated = authenticated,
        "Sending request"
    );
}

/// Log a received response
pub fn log_response(method: &str, url: &str, status: u16, elapsed_ms: u64) {
    if status >= 400 {
        warn!(
            method = method,
            url = url,
            status = status,
            elapsed_ms = elapsed_ms,
            "Request failed"
        );
    } else {
        debug!(
            method = method,
            url = url,
            status = status,
            elapsed_ms = elapsed_ms,
            "Request completed"
        );
    }
}

/// Log a change to stored session state
pub fn log_session_event(role: Role, event: &str) {
    info!(role = %role, event = event, "Session event");
}

/// Log a navigation triggered by the client
pub fn log_navigation(route: &str, reason: &str) {
    info!(route = route, reason = reason, "Navigating");
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
