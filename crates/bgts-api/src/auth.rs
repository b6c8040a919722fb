//! # Authentication Middleware
//!
//! Bearer-token authentication with a pluggable identity-verification
//! interface. The service never interprets token contents itself — an
//! [`IdentityVerifier`] resolves opaque tokens to a [`CallerIdentity`],
//! so deployments can plug in a real identity provider. With no verifier
//! configured the service runs in open development mode and every
//! request acts as an administrator.
//!
//! Health probes are mounted outside this middleware and stay
//! unauthenticated.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use serde::{Deserialize, Serialize};

use bgts_store::{CallerScope, Submitter};

use crate::error::AppError;

/// Role a caller holds in the compliance process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Gift Disclosure Administrator: reviews declarations, unrestricted
    /// register access.
    Administrator,
    /// Declares gifts; sees own records only.
    PublicServant,
}

/// Verified identity of the caller, injected as a request extension by
/// [`auth_middleware`] and extracted by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub role: Role,
    pub user_id: String,
    pub agency: Option<String>,
}

impl CallerIdentity {
    /// Identity used in open development mode.
    pub fn dev_administrator() -> Self {
        Self {
            role: Role::Administrator,
            user_id: "dev-admin".to_string(),
            agency: None,
        }
    }

    /// The register visibility this caller gets.
    pub fn scope(&self) -> CallerScope {
        match self.role {
            Role::Administrator => CallerScope::Unrestricted,
            Role::PublicServant => CallerScope::Owner(self.user_id.clone()),
        }
    }

    /// The submitter identity recorded on declarations this caller files.
    pub fn submitter(&self) -> Submitter {
        Submitter {
            user_id: self.user_id.clone(),
            agency: self.agency.clone(),
        }
    }
}

/// Resolves opaque bearer tokens to caller identities.
///
/// The legacy register parsed structured data out of the token string
/// itself; that scheme is deliberately not replicated. Tokens here are
/// opaque keys into whatever identity provider backs the deployment.
pub trait IdentityVerifier: Send + Sync {
    /// Resolve a token, or `None` when it is unknown or expired.
    fn verify(&self, token: &str) -> Option<CallerIdentity>;
}

/// Verifier over a fixed token table, configured at startup. Suitable
/// for development and single-node deployments.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, CallerIdentity>,
}

impl StaticTokenVerifier {
    /// Empty verifier (rejects everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for an identity.
    pub fn insert(&mut self, token: impl Into<String>, identity: CallerIdentity) {
        self.tokens.insert(token.into(), identity);
    }
}

impl IdentityVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Option<CallerIdentity> {
        self.tokens.get(token).cloned()
    }
}

/// Authentication configuration injected as an extension on the app.
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// When `None`, authentication is disabled (open development mode).
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("enabled", &self.verifier.is_some())
            .finish()
    }
}

/// Resolve the caller's identity and inject it into request extensions.
///
/// Rejects with 401 when a verifier is configured and the request lacks
/// a resolvable `Authorization: Bearer` token.
pub async fn auth_middleware(
    Extension(config): Extension<AuthConfig>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = match &config.verifier {
        None => CallerIdentity::dev_administrator(),
        Some(verifier) => {
            let token = bearer_token(&req)
                .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;
            verifier
                .verify(token)
                .ok_or_else(|| AppError::Unauthorized("unrecognized token".to_string()))?
        }
    };

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extract the bearer token from the Authorization header, if any.
fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Reject callers without the required role.
pub fn require_role(caller: &CallerIdentity, role: Role) -> Result<(), AppError> {
    if caller.role == role {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "requires {} role",
            match role {
                Role::Administrator => "administrator",
                Role::PublicServant => "public servant",
            }
        )))
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("no caller identity".to_string()))
    }
}
