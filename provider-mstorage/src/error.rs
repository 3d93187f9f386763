//! Error types for the media storage client

use bridge_traits::error::BridgeError;
use std::path::PathBuf;
use thiserror::Error;

/// Media storage client errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// `connect` was called without an auth provider configured
    #[error("state error: no client")]
    NoClient,

    /// An operation needed the cached access token before a successful `connect`
    #[error("state error: not connected")]
    NotConnected,

    /// A required argument was missing, malformed, or out of bounds
    #[error("parameter error: {0}")]
    Parameter(String),

    /// Metadata scope the removal endpoint does not support
    #[error("unsupported metadata scope for removal: {0}")]
    UnsupportedScope(String),

    /// Failure from the auth provider, propagated unchanged
    #[error("authentication failed: {0}")]
    Auth(#[source] BridgeError),

    /// Failure from the transport, propagated unchanged
    #[error(transparent)]
    Transport(#[from] BridgeError),

    /// Local file read/write failure
    #[error("file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn parameter(reason: impl Into<String>) -> Self {
        StorageError::Parameter(reason.into())
    }
}

/// Result type for media storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
