//! Authentication middleware
//!
//! The two hooks every client runs: attach the session's bearer token to an
//! outgoing request, and turn an HTTP 401 into a cleared session plus an
//! [`ApexError::AuthExpired`] the caller can route on.

use reqwest::{RequestBuilder, StatusCode};
use tracing::{debug, warn};
use crate::models::TokenScope;
use crate::state::SessionContext;
use crate::utils::errors::{ApexError, Result};

/// Token attachment and expiry detection for one client
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    session: SessionContext,
    scope: TokenScope,
    login_route: String,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance
    pub fn new(session: SessionContext, scope: TokenScope, login_route: impl Into<String>) -> Self {
        Self {
            session,
            scope,
            login_route: login_route.into(),
        }
    }

    pub fn scope(&self) -> &TokenScope {
        &self.scope
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Outgoing hook: add `Authorization: Bearer <token>` when a token is stored.
    ///
    /// Returns the request and whether a token was attached.
    pub fn authorize(&self, request: RequestBuilder) -> Result<(RequestBuilder, bool)> {
        match self.session.resolve(&self.scope)? {
            Some(token) => Ok((request.bearer_auth(token), true)),
            None => {
                debug!(scope = %self.scope, "No session token, sending unauthenticated");
                Ok((request, false))
            }
        }
    }

    /// Incoming hook: on 401 clear every token in scope and report the expiry.
    ///
    /// A storage failure while clearing is logged; the expiry is reported regardless.
    pub fn check_status(&self, status: StatusCode) -> Result<()> {
        if status != StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        warn!(scope = %self.scope, redirect = %self.login_route, "Backend rejected session token");
        if let Err(e) = self.session.clear_scope(&self.scope) {
            // The session is gone server-side either way; still route to login
            warn!(scope = %self.scope, error = %e, "Failed to clear expired session");
        }

        Err(ApexError::AuthExpired {
            scope: self.scope.clone(),
            redirect: self.login_route.clone(),
        })
    }
}
