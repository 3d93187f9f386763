//! # Host Bridge Traits
//!
//! Capability traits the media storage client consumes but does not implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the storage client core and its two
//! external collaborators:
//!
//! - [`HttpClient`](http::HttpClient) - the transport that performs the actual
//!   network call for a fully built request descriptor
//! - [`AuthProvider`](auth::AuthProvider) - the delegated auth component that
//!   initiates sessions and hands out access tokens
//!
//! The core builds an immutable [`HttpRequest`](http::HttpRequest) per call and
//! delegates it to the transport; it never opens sockets, retries, or refreshes
//! credentials itself.
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Implementations
//! should convert their underlying errors (reqwest, platform SDKs, ...) into
//! `BridgeError` with actionable messages, and surface non-2xx HTTP statuses as
//! [`BridgeError::Http`](error::BridgeError::Http) so callers see the failure
//! through the operation's completion signal.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.
//!
//! ## Examples
//!
//! ### Implementing HttpClient
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyTransport {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyTransport {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         todo!()
//!     }
//!
//!     async fn stream(
//!         &self,
//!         request: HttpRequest,
//!     ) -> Result<Box<dyn tokio::io::AsyncRead + Send + Unpin>> {
//!         todo!()
//!     }
//! }
//! ```

pub mod auth;
pub mod error;
pub mod http;

pub use error::BridgeError;

// Re-export commonly used types
pub use auth::{AuthProvider, AuthScope, AuthSession};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
