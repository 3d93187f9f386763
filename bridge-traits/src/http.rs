//! HTTP Transport Abstraction
//!
//! Request descriptors and the async transport trait the storage client
//! dispatches them to.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

use crate::error::{BridgeError, Result};

/// HTTP method types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Immutable request descriptor.
///
/// Built fresh per operation and handed to the transport; never reused or
/// mutated across calls. Header insertion order is irrelevant.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value for the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the `Authorization: Bearer <token>` header.
    ///
    /// Other headers already on the descriptor are kept.
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body).map_err(|e| {
            BridgeError::OperationFailed(format!("JSON serialization failed: {}", e))
        })?;
        self.body = Some(Bytes::from(json));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Parse response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            BridgeError::OperationFailed(format!("JSON deserialization failed: {}", e))
        })
    }

    /// Get response body as UTF-8 string
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| BridgeError::OperationFailed(format!("Invalid UTF-8: {}", e)))
    }

    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP transport trait
///
/// The storage client issues exactly one request per operation through this
/// trait. Implementations own connection pooling, TLS, proxies, and timeouts;
/// the client performs no retries and imposes no ordering across calls.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::http::{HttpClient, HttpRequest, HttpMethod};
///
/// async fn fetch(client: &dyn HttpClient) -> Result<String> {
///     let request = HttpRequest::new(HttpMethod::Get, "https://api.example.com/media")
///         .bearer_token("token");
///
///     let response = client.execute(request).await?;
///     response.text()
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request, buffering the full response body.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network connection fails
    /// - TLS validation fails
    /// - Request times out
    /// - The service answers with a non-2xx status ([`BridgeError::Http`])
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Execute an HTTP request and hand back the response body as a stream.
    ///
    /// Useful for media content that should not be loaded entirely into
    /// memory. The request carries the same headers (including authorization)
    /// as a buffered execution would.
    async fn stream(
        &self,
        request: HttpRequest,
    ) -> Result<Box<dyn tokio::io::AsyncRead + Send + Unpin>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let request = HttpRequest::new(HttpMethod::Get, "https://example.com")
            .header("User-Agent", "test")
            .bearer_token("secret");

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.headers.get("User-Agent"), Some(&"test".to_string()));
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer secret".to_string())
        );
    }

    #[test]
    fn test_bearer_token_keeps_other_headers() {
        let request = HttpRequest::new(HttpMethod::Put, "https://example.com")
            .header("Content-Type", "text/plain")
            .bearer_token("t1");

        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"text/plain".to_string())
        );
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer t1".to_string())
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::new(HttpMethod::Post, "https://example.com")
            .json(&serde_json::json!({"k": "v"}))
            .unwrap();

        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(request.body, Some(Bytes::from(r#"{"k":"v"}"#)));
    }

    #[test]
    fn test_http_response_status_checks() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from("test"),
        };

        assert!(response.is_success());

        let response = HttpResponse {
            status: 404,
            headers: HashMap::new(),
            body: Bytes::new(),
        };
        assert!(!response.is_success());
    }

    #[test]
    fn test_http_response_json() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(r#"{"id":"m1"}"#),
        };

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], "m1");
    }
}
