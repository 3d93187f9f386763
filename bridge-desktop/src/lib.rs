//! # Desktop Bridge Implementations
//!
//! Concrete adapters for the capabilities defined in `bridge-traits`, built on
//! the desktop networking stack:
//!
//! - [`ReqwestTransport`](http::ReqwestTransport) - `HttpClient` on top of
//!   reqwest with connection pooling, rustls TLS, and optional outbound proxy

pub mod http;

pub use http::{ReqwestTransport, TransportOptions};
