//! Bearer token strategies
//!
//! Two designs exist for how the client holds its credential: cache the token
//! obtained once by `connect`, or ask the auth provider for a fresh token on
//! every request. [`TokenSource`] makes that an explicit strategy chosen at
//! composition time instead of a staleness assumption baked into the client.

use async_trait::async_trait;
use bridge_traits::auth::AuthProvider;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, StorageError};

/// Source of the bearer token attached to each request.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Record the token issued by a successful session handshake.
    ///
    /// Pass-through strategies may ignore this.
    async fn store(&self, token: String);

    /// Bearer token for the next request.
    async fn current_token(&self) -> Result<String>;
}

/// Token cached once at `connect` time.
///
/// The cached value is written by every successful `connect` and never
/// invalidated automatically; callers needing refreshed credentials must call
/// `connect` again. Operations before the first `connect` fail with
/// [`StorageError::NotConnected`].
#[derive(Default)]
pub struct CachedTokenSource {
    token: RwLock<Option<String>>,
}

impl CachedTokenSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenSource for CachedTokenSource {
    async fn store(&self, token: String) {
        let mut current = self.token.write().await;
        *current = Some(token);
        debug!("access token cached");
    }

    async fn current_token(&self) -> Result<String> {
        self.token
            .read()
            .await
            .clone()
            .ok_or(StorageError::NotConnected)
    }
}

/// Pass-through to the auth provider on every request.
///
/// Removes the staleness risk of the cached strategy: the provider decides
/// whether to hand back a cached or freshly refreshed token. This is the
/// recommended composition.
pub struct ProviderTokenSource {
    provider: Arc<dyn AuthProvider>,
}

impl ProviderTokenSource {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl TokenSource for ProviderTokenSource {
    async fn store(&self, _token: String) {
        // The provider owns the credential lifecycle.
    }

    async fn current_token(&self) -> Result<String> {
        self.provider
            .access_token()
            .await
            .map_err(StorageError::Auth)
    }
}
