//! Navigation on expired sessions
//!
//! Clients never navigate themselves. They return
//! [`ApexError::AuthExpired`] and the top-level caller passes results through
//! an [`AuthExpiryHandler`], which sends the user to the login route and
//! still hands the error back.

use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::warn;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Something that can move the user to a route
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that records every route, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to, oldest first
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.routes().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}

/// Navigator for terminal use: tells the user where to sign in again
#[derive(Debug, Clone, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        warn!(route = route, "Session expired");
        eprintln!("Session expired. Sign in again ({}).", route);
    }
}

/// Routes expired sessions to their login page
#[derive(Clone)]
pub struct AuthExpiryHandler {
    navigator: Arc<dyn Navigator>,
}

impl AuthExpiryHandler {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Navigate if `result` is an expired session, then return it unchanged
    pub fn handle<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if let Some(route) = err.redirect() {
                logging::log_navigation(route, "session expired");
                self.navigator.navigate(route);
            }
        }
        result
    }

    /// Await a request and handle its result
    pub async fn run<T, F>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.handle(request.await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, TokenScope};
    use crate::utils::errors::ApexError;
    use serde_json::json;

    #[test]
    fn test_handle_navigates_on_expiry_and_propagates() {
        let navigator = RecordingNavigator::new();
        let handler = AuthExpiryHandler::new(Arc::new(navigator.clone()));

        let result: Result<()> = handler.handle(Err(ApexError::AuthExpired {
            scope: TokenScope::Role(Role::Admin),
            redirect: "/admin/login".to_string(),
        }));

        assert!(result.unwrap_err().is_auth_expired());
        assert_eq!(navigator.routes(), vec!["/admin/login".to_string()]);
    }

    #[test]
    fn test_handle_ignores_other_outcomes() {
        let navigator = RecordingNavigator::new();
        let handler = AuthExpiryHandler::new(Arc::new(navigator.clone()));

        assert!(handler.handle(Ok(json!({}))).is_ok());
        let _ = handler.handle::<()>(Err(ApexError::Api { status: 500, message: None, body: json!(null) }));

        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_run_awaits_future() {
        let navigator = RecordingNavigator::new();
        let handler = AuthExpiryHandler::new(Arc::new(navigator.clone()));

        let value = handler.run(async { Ok::<_, ApexError>(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert_eq!(navigator.last(), None);
    }
}
