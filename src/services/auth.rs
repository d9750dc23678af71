//! Authentication API and session flows
//!
//! [`AuthApi`] is the raw endpoint mapping on the unscoped facade.
//! [`AuthService`] layers the session bookkeeping on top: storing the token
//! and profile a login returns, and dropping them again on logout.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use super::http::ApiClient;
use crate::models::{Credentials, GoogleCredentialRequest, LoginOutcome, LoginRequest, LoginResponse, Role};
use crate::state::SessionContext;
use crate::utils::errors::{ApexError, Result};
use crate::utils::helpers::is_valid_email;

/// Auth endpoints. The role travels in the request body, never the URL.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `POST /auth/login` tagged with `role`
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<Value> {
        self.client
            .post("/auth/login", &LoginRequest::new(credentials, role))
            .await
    }

    pub async fn admin_login(&self, credentials: &Credentials) -> Result<Value> {
        self.login(Role::Admin, credentials).await
    }

    pub async fn trainer_login(&self, credentials: &Credentials) -> Result<Value> {
        self.login(Role::Trainer, credentials).await
    }

    pub async fn user_login(&self, credentials: &Credentials) -> Result<Value> {
        self.login(Role::User, credentials).await
    }

    pub async fn register<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client.post("/auth/register", data).await
    }

    pub async fn logout(&self) -> Result<Value> {
        self.client.post_empty("/auth/logout").await
    }

    /// Exchange a Google Identity credential for a member session
    pub async fn google_login(&self, credential: &str) -> Result<Value> {
        let body = GoogleCredentialRequest { credential, role: Role::User };
        self.client.post("/auth/google", &body).await
    }
}

/// A role that currently holds a token
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub role: Role,
    pub profile: Option<Value>,
}

/// Login, registration and logout with session persistence
#[derive(Debug, Clone)]
pub struct AuthService {
    api: AuthApi,
    session: SessionContext,
}

impl AuthService {
    pub fn new(api: AuthApi, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn api(&self) -> &AuthApi {
        &self.api
    }

    /// Sign in as `role` and persist the returned token and profile
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<LoginOutcome> {
        validate_credentials(credentials)?;

        let body = self.api.login(role, credentials).await?;
        let outcome = self.establish(role, body)?;

        info!(role = %role, "Login successful");
        Ok(outcome)
    }

    /// Sign in a member with a Google Identity credential.
    ///
    /// The credential is always exchanged with the backend; no local token
    /// is ever made up.
    pub async fn login_with_google(&self, credential: &str) -> Result<LoginOutcome> {
        if credential.trim().is_empty() {
            return Err(ApexError::InvalidInput("Google credential is empty".to_string()));
        }

        let body = self.api.google_login(credential).await?;
        let outcome = self.establish(Role::User, body)?;

        info!("Google login successful");
        Ok(outcome)
    }

    /// Create a member account. When the backend signs the member straight
    /// in, the session is stored as for a login.
    pub async fn register<B: Serialize + ?Sized>(&self, data: &B) -> Result<(Value, Option<LoginOutcome>)> {
        let body = self.api.register(data).await?;

        let outcome = match parse_login_response(&body).token {
            Some(token) if !token.trim().is_empty() => Some(self.establish(Role::User, body.clone())?),
            _ => None,
        };

        info!(signed_in = outcome.is_some(), "Registration completed");
        Ok((body, outcome))
    }

    /// Sign a role out. The backend call is best effort; the local session
    /// is cleared regardless. Returns the route to show next.
    pub async fn logout(&self, role: Role) -> Result<&'static str> {
        if let Err(e) = self.api.logout().await {
            warn!(role = %role, error = %e, "Logout request failed, clearing session anyway");
        }

        self.session.clear(role)?;
        Ok(role.login_route())
    }

    /// Roles currently holding a token, with their cached profiles
    pub fn active_sessions(&self) -> Result<Vec<ActiveSession>> {
        self.session
            .logged_in_roles()?
            .into_iter()
            .map(|role| {
                Ok(ActiveSession {
                    role,
                    profile: self.session.profile(role)?,
                })
            })
            .collect()
    }

    fn establish(&self, role: Role, body: Value) -> Result<LoginOutcome> {
        let response = parse_login_response(&body);

        let token = response
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApexError::Authentication("No token received".to_string()))?;

        let profile = response.profile_for(role);
        self.session.set_token(role, token)?;
        self.session.set_profile(role, &profile)?;

        Ok(LoginOutcome {
            role,
            profile,
            redirect: role.home_route(),
        })
    }
}

fn parse_login_response(body: &Value) -> LoginResponse {
    if body.is_object() {
        serde_json::from_value(body.clone()).unwrap_or_default()
    } else {
        LoginResponse::default()
    }
}

fn validate_credentials(credentials: &Credentials) -> Result<()> {
    if !is_valid_email(credentials.email.trim()) {
        return Err(ApexError::InvalidInput(format!("Invalid email address: {}", credentials.email)));
    }
    if credentials.password.is_empty() {
        return Err(ApexError::InvalidInput("Password is required".to_string()));
    }
    Ok(())
}
