//! Portal roles and token scopes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A portal role. Each role owns one token slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// A gym member. The backend calls this role "user".
    User,
    Trainer,
}

impl Role {
    /// Resolution order used by the unscoped facade
    pub const PRIORITY: [Role; 3] = [Role::Admin, Role::User, Role::Trainer];

    /// Value sent in the `role` field of auth requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Trainer => "trainer",
        }
    }

    /// Route a user is sent to when this role's session expires
    pub fn login_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/login",
            Role::User => "/login",
            Role::Trainer => "/trainer/login",
        }
    }

    /// Route shown after a successful login
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/dashboard",
            Role::Trainer => "/trainer/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" | "member" => Ok(Role::User),
            "trainer" => Ok(Role::Trainer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Which token slots a client reads from and clears on 401
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenScope {
    Role(Role),
    /// First present token wins, in the given order
    Priority(Vec<Role>),
}

impl TokenScope {
    /// The scope used by the unscoped facade: admin, then user, then trainer
    pub fn facade() -> Self {
        TokenScope::Priority(Role::PRIORITY.to_vec())
    }

    /// Roles this scope reads and clears
    pub fn roles(&self) -> &[Role] {
        match self {
            TokenScope::Role(role) => std::slice::from_ref(role),
            TokenScope::Priority(roles) => roles,
        }
    }

    /// Default login route for the scope
    pub fn login_route(&self) -> &'static str {
        match self {
            TokenScope::Role(role) => role.login_route(),
            TokenScope::Priority(_) => Role::User.login_route(),
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenScope::Role(role) => write!(f, "{} session", role),
            TokenScope::Priority(_) => f.write_str("all sessions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_routes() {
        assert_eq!(Role::Admin.login_route(), "/admin/login");
        assert_eq!(Role::Trainer.login_route(), "/trainer/login");
        assert_eq!(Role::User.login_route(), "/login");
        assert_eq!(TokenScope::facade().login_route(), "/login");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("member".parse::<Role>().unwrap(), Role::User);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("coach".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_as_wire_name() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
