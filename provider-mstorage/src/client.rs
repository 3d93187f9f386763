//! Media storage client
//!
//! Every operation follows the same lifecycle: validate inputs, build a fresh
//! immutable request descriptor, attach the current bearer token, delegate to
//! the transport, and return the decoded payload unchanged. Parameter and
//! state failures are produced before any provider or transport interaction.

use bridge_traits::auth::{AuthProvider, AuthScope};
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use bytes::Bytes;
use futures::future::try_join_all;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{Result, StorageError};
use crate::meta::validate_entries;
use crate::scope::MetadataScope;
use crate::token::{CachedTokenSource, ProviderTokenSource, TokenSource};
use crate::types::{DownloadKind, ListParams, MediaContent, SearchRequest, SEARCH_VERSION};

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mss.ricohapi.com:443/v1";

/// Async client for the media storage service.
///
/// Composes an injected [`AuthProvider`] and [`HttpClient`] into the media
/// operations: list, info, meta, add/remove metadata, upload, download, and
/// delete. The client holds no state beyond its token strategy; it performs
/// no retries, no queueing across calls, and no response caching.
///
/// # Example
///
/// ```ignore
/// use provider_mstorage::MediaStorageClient;
/// use bridge_desktop::ReqwestTransport;
/// use std::sync::Arc;
///
/// let transport = Arc::new(ReqwestTransport::new());
/// let client = MediaStorageClient::new(auth_provider, transport);
/// client.connect().await?;
/// let listing = client.list(None).await?;
/// ```
pub struct MediaStorageClient {
    transport: Arc<dyn HttpClient>,
    auth: Option<Arc<dyn AuthProvider>>,
    tokens: Arc<dyn TokenSource>,
    base_url: String,
}

impl MediaStorageClient {
    /// Client with the per-request token strategy (recommended).
    ///
    /// The auth provider is asked for the current token before every
    /// dispatch, so refresh is entirely its responsibility.
    pub fn new(auth: Arc<dyn AuthProvider>, transport: Arc<dyn HttpClient>) -> Self {
        let tokens = Arc::new(ProviderTokenSource::new(auth.clone()));
        Self {
            transport,
            auth: Some(auth),
            tokens,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Client that caches the token obtained by [`connect`](Self::connect).
    ///
    /// Operations before a successful `connect` fail with
    /// [`StorageError::NotConnected`]; the cached token is never refreshed
    /// until `connect` is called again.
    pub fn with_cached_token(auth: Arc<dyn AuthProvider>, transport: Arc<dyn HttpClient>) -> Self {
        Self {
            transport,
            auth: Some(auth),
            tokens: Arc::new(CachedTokenSource::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Client without an auth provider.
    ///
    /// [`connect`](Self::connect) fails with [`StorageError::NoClient`] and
    /// operations fail with [`StorageError::NotConnected`] unless a custom
    /// token source is installed via
    /// [`with_token_source`](Self::with_token_source).
    pub fn without_auth(transport: Arc<dyn HttpClient>) -> Self {
        Self {
            transport,
            auth: None,
            tokens: Arc::new(CachedTokenSource::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replace the token strategy.
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Override the service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Initiate a session with the media storage scope.
    ///
    /// Must complete successfully before any other operation when the cached
    /// token strategy is in use. Provider failures propagate unchanged.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NoClient`] - no auth provider configured
    /// - [`StorageError::Auth`] - the provider refused the session
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<()> {
        let auth = self.auth.as_ref().ok_or(StorageError::NoClient)?;

        let session = auth
            .session(AuthScope::MStorage)
            .await
            .map_err(StorageError::Auth)?;
        self.tokens.store(session.access_token).await;

        info!("media storage session established");
        Ok(())
    }

    /// List media, optionally narrowed or filtered.
    ///
    /// Without parameters this is a plain `GET /media`. `after` and `limit`
    /// are appended as query parameters only when present. A `filter` issues
    /// `POST /media/search` instead, carrying the fixed search protocol
    /// version and the filter as `query`; it takes precedence over
    /// `after`/`limit`.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: Option<ListParams>) -> Result<serde_json::Value> {
        let Some(params) = params else {
            let request = HttpRequest::new(HttpMethod::Get, self.url("/media"));
            return self.send_json(request).await;
        };

        if let Some(filter) = &params.filter {
            let body = SearchRequest {
                search_version: SEARCH_VERSION,
                query: filter,
            };
            // The service expects the JSON-encoded search body as text/plain.
            let request = HttpRequest::new(HttpMethod::Post, self.url("/media/search"))
                .json(&body)?
                .header("Content-Type", "text/plain");
            return self.send_json(request).await;
        }

        let mut query = Vec::new();
        if let Some(after) = &params.after {
            query.push(format!("after={}", urlencoding::encode(after)));
        }
        if let Some(limit) = params.limit {
            query.push(format!("limit={limit}"));
        }
        let url = if query.is_empty() {
            self.url("/media")
        } else {
            format!("{}?{}", self.url("/media"), query.join("&"))
        };

        self.send_json(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// Fetch a media item's descriptor.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn info(&self, id: &str) -> Result<serde_json::Value> {
        require_id(id)?;

        let request = HttpRequest::new(HttpMethod::Get, self.url(&format!("/media/{id}")));
        self.send_json(request).await
    }

    /// Fetch a media item's metadata, optionally narrowed to one scope.
    ///
    /// `scope` accepts `"user"`, `"user.<key>"`, `"exif"`, or `"gpano"`; any
    /// other value fails with a parameter error before dispatch. With no
    /// scope the full metadata resource is returned.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn meta(&self, id: &str, scope: Option<&str>) -> Result<serde_json::Value> {
        require_id(id)?;

        let path = match scope {
            None => format!("/media/{id}/meta"),
            Some(scope) => {
                let scope = MetadataScope::parse(scope)?;
                format!("/media/{id}/meta/{}", scope.meta_path())
            }
        };

        self.send_json(HttpRequest::new(HttpMethod::Get, self.url(&path)))
            .await
    }

    /// Set user metadata keys on a media item.
    ///
    /// The whole batch is validated first (at most 10 entries, keys of the
    /// form `user.<key>`, values of 1..=1024 encoded bytes); any violation
    /// fails the call with no request issued. Valid entries are then PUT
    /// concurrently, one request per key, and joined fail-fast: the call
    /// resolves only when every PUT succeeded and fails on the first
    /// individual failure. Already-dispatched siblings may still complete
    /// server-side - the batch is best-effort, not atomic.
    #[instrument(skip(self, meta), fields(id = %id, entries = meta.len()))]
    pub async fn add_meta(&self, id: &str, meta: &HashMap<String, String>) -> Result<()> {
        require_id(id)?;
        let entries = validate_entries(meta)?;

        let puts = entries.into_iter().map(|(key, value)| {
            let request = HttpRequest::new(
                HttpMethod::Put,
                self.url(&format!("/media/{id}/meta/user/{key}")),
            )
            .header("Content-Type", "text/plain")
            .body(Bytes::from(value));
            self.send(request)
        });

        try_join_all(puts).await?;
        debug!("user metadata batch applied");
        Ok(())
    }

    /// Remove user metadata from a media item.
    ///
    /// `"user"` removes every user key, `"user.<key>"` removes one. The
    /// read-only scopes (`exif`, `gpano`) are rejected with
    /// [`StorageError::UnsupportedScope`]; unknown scope strings fail with a
    /// parameter error. Either way no request is issued for a rejected scope.
    #[instrument(skip(self), fields(id = %id, scope = %scope))]
    pub async fn remove_meta(&self, id: &str, scope: &str) -> Result<serde_json::Value> {
        require_id(id)?;

        let path = match MetadataScope::parse(scope)? {
            MetadataScope::User => format!("/media/{id}/meta/user"),
            MetadataScope::UserKey(key) => format!("/media/{id}/meta/user/{key}"),
            MetadataScope::Exif | MetadataScope::Gpano => {
                return Err(StorageError::UnsupportedScope(scope.to_string()))
            }
        };

        self.send_json(HttpRequest::new(HttpMethod::Delete, self.url(&path)))
            .await
    }

    /// Upload a JPEG file as a new media item.
    ///
    /// Reads the full file contents and POSTs them as the request body with
    /// `Content-Type: image/jpeg`. Returns the created item's descriptor.
    #[instrument(skip(self, path))]
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<serde_json::Value> {
        let path = path.as_ref();
        require_path(path, "upload source path")?;

        let bytes = tokio::fs::read(path).await.map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let request = HttpRequest::new(HttpMethod::Post, self.url("/media"))
            .header("Content-Type", "image/jpeg")
            .body(Bytes::from(bytes));
        self.send_json(request).await
    }

    /// Download a media item's content in the requested representation.
    ///
    /// [`DownloadKind::Stream`] (the default) hands back an incremental
    /// reader; the buffered kinds return the full body as bytes. The caller
    /// is responsible for consuming the result.
    #[instrument(skip(self), fields(id = %id, kind = ?kind))]
    pub async fn download(&self, id: &str, kind: DownloadKind) -> Result<MediaContent> {
        require_id(id)?;

        let request = self
            .authorized(HttpRequest::new(
                HttpMethod::Get,
                self.url(&format!("/media/{id}/content")),
            ))
            .await?;

        if kind.is_buffered() {
            let response = self.transport.execute(request).await?;
            Ok(MediaContent::Bytes(response.body))
        } else {
            let reader = self.transport.stream(request).await?;
            Ok(MediaContent::Stream(reader))
        }
    }

    /// Download a media item's content into a local file.
    ///
    /// Forces the buffered representation and writes the exact payload bytes
    /// to `path`, overwriting any existing file. Write failures surface as
    /// [`StorageError::Io`].
    #[instrument(skip(self, path), fields(id = %id))]
    pub async fn download_to(&self, id: &str, path: impl AsRef<Path>) -> Result<()> {
        require_id(id)?;
        let path = path.as_ref();
        require_path(path, "download destination path")?;

        let request = HttpRequest::new(
            HttpMethod::Get,
            self.url(&format!("/media/{id}/content")),
        );
        let response = self.send(request).await?;

        tokio::fs::write(path, &response.body)
            .await
            .map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(bytes = response.body.len(), "media content written");
        Ok(())
    }

    /// Delete a media item.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<serde_json::Value> {
        require_id(id)?;

        let request = HttpRequest::new(HttpMethod::Delete, self.url(&format!("/media/{id}")));
        self.send_json(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the current bearer token to a fresh descriptor.
    async fn authorized(&self, request: HttpRequest) -> Result<HttpRequest> {
        let token = self.tokens.current_token().await?;
        Ok(request.bearer_token(token))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = self.authorized(request).await?;
        Ok(self.transport.execute(request).await?)
    }

    async fn send_json(&self, request: HttpRequest) -> Result<serde_json::Value> {
        let response = self.send(request).await?;
        // Deletions may answer with an empty body
        if response.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(response.json()?)
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(StorageError::parameter("media id must not be empty"));
    }
    Ok(())
}

fn require_path(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::parameter(format!("{what} must not be empty")));
    }
    Ok(())
}
