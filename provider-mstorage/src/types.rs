//! Request parameter and payload types

use bytes::Bytes;
use serde::Serialize;
use std::fmt;

/// Search protocol version tag sent with filtered listings.
pub(crate) const SEARCH_VERSION: &str = "2016-06-01";

/// Optional listing parameters.
///
/// `after` and `limit` narrow a plain listing; `filter` switches the call to
/// the server-side search endpoint and takes precedence over the other two.
/// Everything is optional - omission simply widens the request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Cursor: list media after this id
    pub after: Option<String>,
    /// Maximum number of items to return
    pub limit: Option<u32>,
    /// Server-side search query
    pub filter: Option<serde_json::Value>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, filter: serde_json::Value) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Body of a `POST /media/search` request.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub search_version: &'static str,
    pub query: &'a serde_json::Value,
}

/// Representation requested for downloaded media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadKind {
    /// Incremental stream of bytes (default)
    #[default]
    Stream,
    /// Full body buffered in memory
    Blob,
    /// Full body buffered in memory, byte-array semantics
    ArrayBuffer,
}

impl DownloadKind {
    /// Whether the transport should buffer the full body.
    pub(crate) fn is_buffered(&self) -> bool {
        !matches!(self, DownloadKind::Stream)
    }
}

/// Downloaded media content in the requested representation.
///
/// The caller is responsible for consuming it; nothing is written to disk
/// unless `download_to` was used.
pub enum MediaContent {
    /// Streaming body; read to completion to drain the connection
    Stream(Box<dyn tokio::io::AsyncRead + Send + Unpin>),
    /// Fully buffered body
    Bytes(Bytes),
}

impl MediaContent {
    /// Buffered bytes, if this content was requested in a buffered
    /// representation.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            MediaContent::Bytes(bytes) => Some(bytes),
            MediaContent::Stream(_) => None,
        }
    }
}

impl fmt::Debug for MediaContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaContent::Stream(_) => f.write_str("MediaContent::Stream(..)"),
            MediaContent::Bytes(bytes) => {
                write!(f, "MediaContent::Bytes({} bytes)", bytes.len())
            }
        }
    }
}
