//! Middleware module
//!
//! Hooks run by every HTTP client around each request

pub mod auth;
pub mod logging;

// Re-export commonly used middleware
pub use auth::AuthMiddleware;
pub use logging::LoggingMiddleware;
