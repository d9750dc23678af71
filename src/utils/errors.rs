//! Error handling for the APEX portal client
//!
//! This module defines the main error type returned by every client, store
//! and service in the crate, plus helpers used by callers to turn an error
//! into something a member can read.

use thiserror::Error;
use crate::models::TokenScope;

/// Main error type for APEX portal operations
#[derive(Error, Debug)]
pub enum ApexError {
    #[error("Session expired for {scope}, please sign in again at {redirect}")]
    AuthExpired { scope: TokenScope, redirect: String },

    #[error("Backend returned HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Api {
        status: u16,
        message: Option<String>,
        body: serde_json::Value,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for APEX portal operations
pub type Result<T> = std::result::Result<T, ApexError>;

/// Generic message shown when the backend gives nothing better
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl ApexError {
    /// Wrap a transport error, splitting out timeouts
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApexError::Timeout
        } else {
            ApexError::Network(err)
        }
    }

    /// Whether the session behind this request is gone
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApexError::AuthExpired { .. })
    }

    /// Login route the caller should navigate to, if any
    pub fn redirect(&self) -> Option<&str> {
        match self {
            ApexError::AuthExpired { redirect, .. } => Some(redirect),
            _ => None,
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApexError::AuthExpired { .. } => Some(401),
            ApexError::Api { status, .. } => Some(*status),
            ApexError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Best-effort message for a notification, falling back to `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApexError::Api { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ApexError::AuthExpired { .. } => false,
            ApexError::Api { status, .. } => *status >= 500,
            ApexError::Network(_) => true,
            ApexError::Timeout => true,
            ApexError::Serialization(_) => false,
            ApexError::Io(_) => true,
            ApexError::UrlParse(_) => false,
            ApexError::Config(_) => false,
            ApexError::Storage(_) => false,
            ApexError::Authentication(_) => false,
            ApexError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ApexError::Config(_) => ErrorSeverity::Critical,
            ApexError::Storage(_) => ErrorSeverity::Critical,
            ApexError::AuthExpired { .. } => ErrorSeverity::Warning,
            ApexError::Authentication(_) => ErrorSeverity::Warning,
            ApexError::InvalidInput(_) => ErrorSeverity::Info,
            ApexError::Api { status, .. } if *status < 500 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
