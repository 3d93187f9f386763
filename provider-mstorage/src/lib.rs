//! # Media Storage Provider
//!
//! Async client for the Ricoh media storage service (MStorage).
//!
//! ## Overview
//!
//! This crate provides:
//! - Session initiation and bearer-token attachment via an injected
//!   [`AuthProvider`](bridge_traits::auth::AuthProvider)
//! - Media listing with cursor/limit narrowing and server-side search
//! - Item descriptors, full and scoped metadata reads
//! - Concurrent fail-fast user metadata batch updates
//! - JPEG upload, streaming/buffered download, and deletion
//!
//! All parameter validation happens before any network interaction; the
//! transport sees only well-formed requests.
//!
//! ## Example
//!
//! ```ignore
//! use provider_mstorage::MediaStorageClient;
//! use bridge_desktop::ReqwestTransport;
//! use std::sync::Arc;
//!
//! let transport = Arc::new(ReqwestTransport::new());
//! let client = MediaStorageClient::new(auth_provider, transport);
//!
//! client.connect().await?;
//! let listing = client.list(None).await?;
//! println!("{listing}");
//! ```

pub mod client;
pub mod error;
pub mod meta;
pub mod scope;
pub mod token;
pub mod types;

pub use client::{MediaStorageClient, DEFAULT_BASE_URL};
pub use error::{Result, StorageError};
pub use meta::{MAX_META_ENTRIES, MAX_META_VALUE_BYTES};
pub use scope::{is_valid_user_key, MetadataScope, USER_KEY_MAX_LEN};
pub use token::{CachedTokenSource, ProviderTokenSource, TokenSource};
pub use types::{DownloadKind, ListParams, MediaContent};
