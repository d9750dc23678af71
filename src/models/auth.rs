//! Authentication payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::Role;

/// Email and password entered on a login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

impl<'a> LoginRequest<'a> {
    pub fn new(credentials: &'a Credentials, role: Role) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            role,
        }
    }
}

/// Body of `POST /auth/google`
#[derive(Debug, Clone, Serialize)]
pub struct GoogleCredentialRequest<'a> {
    pub credential: &'a str,
    pub role: Role,
}

/// Fields the client reads from a login or registration response.
/// Anything else the backend sends is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub trainer: Option<Value>,
    #[serde(default)]
    pub admin: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Profile blob for the role, or an empty object when the backend sent none
    pub fn profile_for(&self, role: Role) -> Value {
        let profile = match role {
            Role::Admin => self.admin.as_ref(),
            Role::User => self.user.as_ref(),
            Role::Trainer => self.trainer.as_ref(),
        };
        profile
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }
}

/// Body of `POST /members/{id}/assign-trainer`
#[derive(Debug, Clone, Serialize)]
pub struct AssignTrainerRequest {
    pub trainer_id: Value,
}

/// What a successful login leaves behind
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub role: Role,
    pub profile: Value,
    /// Route to show next
    pub redirect: &'static str,
}
