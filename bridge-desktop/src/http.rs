//! HTTP Transport Implementation using Reqwest

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    http::{HttpClient, HttpMethod, HttpRequest, HttpResponse},
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Construction-time transport configuration.
///
/// The storage client core never interprets these; they are consumed here
/// when the reqwest client is built.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Per-request timeout. Defaults to 30 seconds.
    pub timeout: Option<Duration>,
    /// Outbound proxy URL, e.g. `http://proxy.example.com:8080`.
    pub proxy: Option<String>,
}

/// Reqwest-based transport implementation
///
/// Provides HTTP operations with:
/// - Connection pooling via reqwest
/// - TLS support by default
/// - Optional outbound proxy
/// - Async streaming for media content
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with default configuration
    pub fn new() -> Self {
        Self::with_options(TransportOptions::default())
            .unwrap_or_else(|_| Self::with_client(Client::new()))
    }

    /// Create a new transport from explicit options
    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(options.timeout.unwrap_or(Duration::from_secs(30)))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .user_agent("mstorage-client/0.1.0");

        if let Some(proxy) = options.proxy {
            let proxy = reqwest::Proxy::all(&proxy)
                .map_err(|e| BridgeError::OperationFailed(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| BridgeError::OperationFailed(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a new transport from a preconfigured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Convert bridge HttpMethod to reqwest Method
    fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Build reqwest request from bridge request
    fn build_request(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let method = Self::convert_method(request.method);
        let mut req = self.client.request(method, &request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        req
    }

    fn map_send_error(e: reqwest::Error) -> BridgeError {
        if e.is_timeout() {
            BridgeError::OperationFailed("Request timed out".to_string())
        } else if e.is_connect() {
            BridgeError::OperationFailed(format!("Connection failed: {}", e))
        } else {
            BridgeError::OperationFailed(e.to_string())
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<reqwest::Response> {
        debug!(url = %request.url, method = ?request.method, "Executing HTTP request");

        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status, "HTTP request failed");
            return Err(BridgeError::Http { status, message });
        }

        Ok(response)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.send(request).await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| BridgeError::OperationFailed(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn stream(
        &self,
        request: HttpRequest,
    ) -> Result<Box<dyn tokio::io::AsyncRead + Send + Unpin>> {
        let response = self.send(request).await?;

        let stream = response.bytes_stream().map_err(std::io::Error::other);

        use futures_util::TryStreamExt;
        let reader = tokio_util::io::StreamReader::new(stream);

        Ok(Box::new(reader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_creation() {
        let _transport = ReqwestTransport::new();
        // Just verify it constructs
    }

    #[tokio::test]
    async fn test_transport_with_proxy_option() {
        let transport = ReqwestTransport::with_options(TransportOptions {
            timeout: Some(Duration::from_secs(5)),
            proxy: Some("http://127.0.0.1:8080".to_string()),
        });
        assert!(transport.is_ok());

        let bad = ReqwestTransport::with_options(TransportOptions {
            timeout: None,
            proxy: Some("not a proxy url".to_string()),
        });
        assert!(bad.is_err());
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(
            ReqwestTransport::convert_method(HttpMethod::Get),
            reqwest::Method::GET
        );
        assert_eq!(
            ReqwestTransport::convert_method(HttpMethod::Post),
            reqwest::Method::POST
        );
        assert_eq!(
            ReqwestTransport::convert_method(HttpMethod::Put),
            reqwest::Method::PUT
        );
        assert_eq!(
            ReqwestTransport::convert_method(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }
}
