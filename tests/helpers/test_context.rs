//! Test context for unified test setup
//!
//! Builds every client against the mock backend with an in-memory session
//! and a navigator that records routes instead of printing them.

use std::sync::Arc;
use apex_portal::config::ApiConfig;
use apex_portal::services::{ApiServices, AuthExpiryHandler, RecordingNavigator};
use apex_portal::state::SessionContext;

use super::backend_mock::{BackendMockServer, ADMIN_ROOT, MEMBER_ROOT, PUBLIC_ROOT, TRAINER_ROOT};

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub session: SessionContext,
    pub services: ApiServices,
    pub navigator: RecordingNavigator,
    pub handler: AuthExpiryHandler,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_session(SessionContext::in_memory()).await
    }

    /// Build the context around a caller-provided session
    pub async fn with_session(session: SessionContext) -> Self {
        init_test_logging();

        let backend = BackendMockServer::new().await;
        let config = api_config(&backend.uri());
        let services = ApiServices::new(&config, session.clone()).expect("Failed to build services");
        let navigator = RecordingNavigator::new();
        let handler = AuthExpiryHandler::new(Arc::new(navigator.clone()));

        Self {
            backend,
            session,
            services,
            navigator,
            handler,
        }
    }

    pub fn public_path(&self, path: &str) -> String {
        format!("{}{}", PUBLIC_ROOT, path)
    }

    pub fn member_path(&self, path: &str) -> String {
        format!("{}{}", MEMBER_ROOT, path)
    }

    pub fn admin_path(&self, path: &str) -> String {
        format!("{}{}", ADMIN_ROOT, path)
    }

    pub fn trainer_path(&self, path: &str) -> String {
        format!("{}{}", TRAINER_ROOT, path)
    }
}

/// API configuration pointing every client at the mock backend
pub fn api_config(uri: &str) -> ApiConfig {
    ApiConfig {
        public_url: format!("{}{}", uri, PUBLIC_ROOT),
        admin_url: format!("{}{}", uri, ADMIN_ROOT),
        trainer_url: format!("{}{}", uri, TRAINER_ROOT),
        member_url: format!("{}{}", uri, MEMBER_ROOT),
        timeout_seconds: 5,
        ..ApiConfig::default()
    }
}

/// Initialize test logging once
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
