//! Mock gym backend for testing
//!
//! Wraps a wiremock server laid out like the real deployment: the public
//! auth root under `/public/api` and the role roots under `/api`,
//! `/api/admin` and `/api/trainer`.

use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub const PUBLIC_ROOT: &str = "/public/api";
pub const MEMBER_ROOT: &str = "/api";
pub const ADMIN_ROOT: &str = "/api/admin";
pub const TRAINER_ROOT: &str = "/api/trainer";

/// Mock backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Respond to `verb full_path` with `status` and a JSON body
    pub async fn mock_json(&self, verb: &str, full_path: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(full_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Same as [`mock_json`](Self::mock_json) but answering after `delay`
    pub async fn mock_json_delayed(&self, verb: &str, full_path: &str, status: u16, body: Value, delay: Duration) {
        Mock::given(method(verb))
            .and(path(full_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Respond with an empty body
    pub async fn mock_empty(&self, verb: &str, full_path: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(full_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Reject with 401 and a typical backend message
    pub async fn mock_unauthorized(&self, verb: &str, full_path: &str) {
        self.mock_json(verb, full_path, 401, serde_json::json!({"message": "Unauthenticated."}))
            .await;
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received for one path
    pub async fn requests_to(&self, full_path: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == full_path)
            .collect()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

/// `Authorization` header of a received request, if any
pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
