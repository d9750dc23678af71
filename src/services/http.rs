//! HTTP client for the gym backend
//!
//! Every client (admin, trainer, member, the unscoped facade and its
//! multipart twin) is an [`ApiClient`] built by [`ClientBuilder`]. They differ
//! only in base URL, which token slots they read, and where an expired
//! session should send the user.
//!
//! Responses are returned as opaque JSON. A 401 clears the scope's tokens and
//! comes back as [`ApexError::AuthExpired`]; any other non-2xx status comes
//! back as [`ApexError::Api`] with the backend's `message` when it sent one.
//! There are no retries.

use std::fmt;
use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use crate::middleware::{AuthMiddleware, LoggingMiddleware};
use crate::models::{Role, TokenScope};
use crate::state::SessionContext;
use crate::utils::errors::{ApexError, Result};

/// Default request timeout shared by every client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How request bodies are declared by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    /// Leaves the content type to each request so multipart boundaries survive
    Multipart,
}

enum Payload {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Builder for [`ApiClient`]
pub struct ClientBuilder {
    name: &'static str,
    base_url: String,
    session: SessionContext,
    scope: TokenScope,
    login_route: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    body_kind: BodyKind,
}

impl ClientBuilder {
    /// Start a client named `name` rooted at `base_url`.
    ///
    /// Defaults to the facade's token priority and a JSON body.
    pub fn new(name: &'static str, base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            session,
            scope: TokenScope::facade(),
            login_route: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            body_kind: BodyKind::Json,
        }
    }

    /// Read and clear a single role's token
    pub fn role(mut self, role: Role) -> Self {
        self.scope = TokenScope::Role(role);
        self
    }

    /// Try several roles' tokens in order
    pub fn priority(mut self, roles: Vec<Role>) -> Self {
        self.scope = TokenScope::Priority(roles);
        self
    }

    /// Override the route reported when the session expires
    pub fn login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = Some(route.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn multipart(mut self) -> Self {
        self.body_kind = BodyKind::Multipart;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let parsed = Url::parse(&self.base_url)?;
        let base_url = parsed.as_str().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut http = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers);
        if let Some(user_agent) = &self.user_agent {
            http = http.user_agent(user_agent.as_str());
        }
        let http = http.build().map_err(ApexError::Network)?;

        let login_route = self
            .login_route
            .unwrap_or_else(|| self.scope.login_route().to_string());

        Ok(ApiClient {
            http,
            base_url,
            body_kind: self.body_kind,
            auth: AuthMiddleware::new(self.session, self.scope, login_route),
            logging: LoggingMiddleware::new(self.name),
        })
    }
}

/// A backend client bound to one base URL and one token scope
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    body_kind: BodyKind,
    auth: AuthMiddleware,
    logging: LoggingMiddleware,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("name", &self.logging.client_name())
            .field("base_url", &self.base_url)
            .field("scope", self.auth.scope())
            .field("body_kind", &self.body_kind)
            .finish()
    }
}

impl ApiClient {
    pub fn name(&self) -> &'static str {
        self.logging.client_name()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn scope(&self) -> &TokenScope {
        self.auth.scope()
    }

    pub fn login_route(&self) -> &str {
        self.auth.login_route()
    }

    pub fn body_kind(&self) -> BodyKind {
        self.body_kind
    }

    /// Full URL for a path under the base
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, Payload::Empty).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, Payload::Json(body)).await
    }

    /// POST without a body
    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        self.send(Method::POST, path, Payload::Empty).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.send(Method::PUT, path, Payload::Json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::DELETE, path, Payload::Empty).await
    }

    /// POST a multipart form, e.g. a file upload
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value> {
        self.send(Method::POST, path, Payload::Multipart(form)).await
    }

    async fn send(&self, method: Method, path: &str, payload: Payload) -> Result<Value> {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);

        request = match payload {
            Payload::Empty if self.body_kind == BodyKind::Json => {
                request.header(CONTENT_TYPE, "application/json")
            }
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(form) => request.multipart(form),
        };

        let (request, authenticated) = self.auth.authorize(request)?;
        let trace = self.logging.on_request(method.as_str(), &url, authenticated);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logging.on_failure(trace, &e.to_string());
                return Err(ApexError::from_transport(e));
            }
        };

        let status = response.status();
        self.logging.on_response(trace, status.as_u16());
        self.auth.check_status(status)?;

        let bytes = response.bytes().await.map_err(ApexError::from_transport)?;
        let body = parse_body(&bytes);

        if !status.is_success() {
            return Err(ApexError::Api {
                status: status.as_u16(),
                message: extract_message(&body),
                body,
            });
        }

        Ok(body)
    }
}

/// Decode a response body; empty is `null`, non-JSON is kept as a string
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// The backend's human-readable error, from `message` or `error`
fn extract_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Encode an id as a single path segment
pub fn segment(id: impl fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}
