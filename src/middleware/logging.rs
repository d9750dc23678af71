//! Logging middleware
//!
//! Request/response logging shared by every client.

use std::time::Instant;
use crate::utils::logging;

/// Logging middleware for backend requests
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    client_name: &'static str,
}

/// An in-flight request being timed
#[derive(Debug)]
pub struct RequestTrace {
    method: String,
    url: String,
    started: Instant,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(client_name: &'static str) -> Self {
        Self { client_name }
    }

    pub fn client_name(&self) -> &'static str {
        self.client_name
    }

    /// Log a request leaving the client
    pub fn on_request(&self, method: &str, url: &str, authenticated: bool) -> RequestTrace {
        logging::log_request(method, url, authenticated);
        RequestTrace {
            method: method.to_string(),
            url: url.to_string(),
            started: Instant::now(),
        }
    }

    /// Log the response to a traced request
    pub fn on_response(&self, trace: RequestTrace, status: u16) {
        let elapsed_ms = trace.started.elapsed().as_millis() as u64;
        logging::log_response(&trace.method, &trace.url, status, elapsed_ms);
    }

    /// Log a transport failure for a traced request
    pub fn on_failure(&self, trace: RequestTrace, error: &str) {
        logging::log_api_error(self.client_name, error, Some(&format!("{} {}", trace.method, trace.url)));
    }
}
