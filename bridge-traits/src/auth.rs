//! Delegated Authentication Capability
//!
//! The storage client never interprets credentials beyond embedding them into
//! an `Authorization: Bearer` header. Session initiation, token refresh, and
//! credential storage all live behind [`AuthProvider`].

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;

/// Capability scope requested during session initiation.
///
/// Scopes limit what the issued token may access. Only the media storage
/// scope exists today; the enum keeps the handshake closed over known
/// capabilities instead of free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScope {
    /// Media storage service access.
    MStorage,
}

impl AuthScope {
    /// Wire identifier sent to the auth service.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScope::MStorage => "https://ucs.ricoh.com/scope/api.storage",
        }
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a successful session handshake.
#[derive(Clone)]
pub struct AuthSession {
    /// The access token scoped to the requested capability.
    pub access_token: String,
}

// Custom Debug implementation to avoid logging tokens
impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Delegated access-token provider.
///
/// Implemented by the host's auth client (resource-owner credentials, OAuth,
/// ...). The storage client calls [`session`](AuthProvider::session) once
/// during `connect` and - under the per-request token strategy -
/// [`access_token`](AuthProvider::access_token) before every dispatch.
/// Whether a returned token is fresh or cached is entirely the provider's
/// decision.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Initiate an authenticated session for the given scope.
    async fn session(&self, scope: AuthScope) -> Result<AuthSession>;

    /// Current access token for previously initiated sessions.
    ///
    /// Providers that handle expiry should refresh here transparently.
    async fn access_token(&self) -> Result<String>;
}
