//! APEX Portal client
//!
//! Role-scoped access to the APEX gym backend for members, trainers and
//! admins. Each role has its own bearer-token session; clients attach the
//! right token to every request and report expired sessions as
//! [`ApexError::AuthExpired`] so the caller can send the user back to the
//! matching login route.

pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApexError, Result};

// Re-export main components for easy access
pub use models::{Credentials, Role};
pub use services::{ApiServices, AuthExpiryHandler, ClientBuilder, Navigator};
pub use state::SessionContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
