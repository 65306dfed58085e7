//! The connector: one configured Salesforce instance binding.
//!
//! A [`Connector`] holds the base URL, the optional bearer token, the default
//! header map, and the API version, and hands pre-authenticated request
//! builders to the operation layer.
//!
//! ## Security
//!
//! The access token is redacted in `Debug` output.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::retry::RetryConfig;
use crate::DEFAULT_API_VERSION;

/// Per-call configuration overlay.
///
/// Every operation accepts the connector's defaults; callers that need a
/// different retry policy or extra headers for a single call merge an overlay
/// via [`Connector::with_call_options`]. The merge is pure: overlay values
/// win, everything else is inherited.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Retry policy override for the call.
    pub retry: Option<RetryConfig>,
    /// Extra headers for the call; replace same-named connector defaults.
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry override.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Disable retries for the call.
    pub fn without_retry(self) -> Self {
        self.with_retry(RetryConfig::no_retry())
    }

    /// Add a header override.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A configured binding to one Salesforce instance.
///
/// Construction validates the base URL; everything else is builder-style.
/// The connector is immutable once built and cheap to clone; all operation
/// objects share it read-only for the connector's lifetime.
///
/// # Example
///
/// ```rust,ignore
/// use conduit_sf_client::Connector;
///
/// let connector = Connector::new("https://myorg.my.salesforce.com")?
///     .with_access_token("00Dxx...")
///     .with_api_version("58.0");
///
/// let limits: serde_json::Value = connector.rest_get("limits").await?;
/// ```
#[derive(Clone)]
pub struct Connector {
    http: HttpClient,
    base_url: String,
    access_token: Option<String>,
    api_version: String,
    default_headers: HashMap<String, String>,
    retry_override: Option<RetryConfig>,
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl Connector {
    /// Create a connector for the given base URL with default configuration.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a connector with custom HTTP configuration.
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = base_url.into();
        // Reject unusable base URLs at construction time rather than on the
        // first call.
        url::Url::parse(&base_url)?;

        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            default_headers: HashMap::new(),
            retry_override: None,
        })
    }

    /// Attach a bearer token, sent as `Authorization: Bearer {token}` on
    /// every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the API version (e.g. "58.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Add a default header sent on every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Add several default headers.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.default_headers.insert(name.into(), value.into());
        }
        self
    }

    /// Derive a connector with a per-call overlay merged over this one.
    ///
    /// Overlay headers replace same-named defaults; an overlay retry policy
    /// replaces the configured one for requests built from the derived
    /// connector. The original connector is untouched.
    pub fn with_call_options(&self, options: &CallOptions) -> Connector {
        let mut merged = self.clone();
        if let Some(ref retry) = options.retry {
            merged.retry_override = Some(retry.clone());
        }
        for (name, value) in &options.headers {
            merged.default_headers.insert(name.clone(), value.clone());
        }
        merged
    }

    /// The base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Whether a bearer token is attached.
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Build the full URL for a path.
    ///
    /// Absolute `http(s)` URLs pass through; anything else is joined to the
    /// base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Build a versioned REST API URL.
    ///
    /// Example: `rest_url("sobjects/Account")` ->
    /// `{base}/services/data/v58.0/sobjects/Account`
    pub fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/services/data/v{}/{}",
            self.base_url,
            self.api_version,
            path.trim_start_matches('/')
        )
    }

    /// Build an Apex REST URL.
    ///
    /// Example: `apexrest_url("/Account/")` ->
    /// `{base}/services/apexrest/Account/`
    pub fn apexrest_url(&self, path: &str) -> String {
        format!(
            "{}/services/apexrest/{}",
            self.base_url,
            path.trim_start_matches('/')
        )
    }

    // =========================================================================
    // Request builders (authenticated, defaults applied)
    // =========================================================================

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder.headers(self.default_headers.clone());
        if let Some(ref token) = self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref retry) = self.retry_override {
            builder = builder.retry(retry.clone());
        }
        builder
    }

    /// Create a GET request builder with connector defaults applied.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.prepare(self.http.get(url))
    }

    /// Create a POST request builder with connector defaults applied.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.prepare(self.http.post(url))
    }

    /// Create a PATCH request builder with connector defaults applied.
    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.prepare(self.http.patch(url))
    }

    /// Create a PUT request builder with connector defaults applied.
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.prepare(self.http.put(url))
    }

    /// Create a DELETE request builder with connector defaults applied.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.prepare(self.http.delete(url))
    }

    /// Execute a prepared request.
    pub async fn execute(&self, request: RequestBuilder) -> Result<crate::Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON methods
    // =========================================================================

    /// GET with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request = self.get(&self.url(url));
        self.http.execute_json(request).await
    }

    /// GET against the versioned REST prefix with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.get(&self.rest_url(path));
        self.http.execute_json(request).await
    }

    /// POST a JSON body against the versioned REST prefix, deserializing the
    /// JSON response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn rest_post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(&self.rest_url(path)).json(body)?;
        self.http.execute_json(request).await
    }

    /// PATCH a JSON body against the versioned REST prefix, deserializing the
    /// JSON response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn rest_patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.patch(&self.rest_url(path)).json(body)?;
        self.http.execute_json(request).await
    }

    /// PATCH a JSON body against the versioned REST prefix; resolves to `()`
    /// on success (the API answers 204 No Content).
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn rest_patch<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.patch(&self.rest_url(path)).json(body)?;
        let response = self.http.execute(request).await?;

        if response.is_no_content() || response.is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(Error::new(ErrorKind::Http { status, body }))
        }
    }

    /// DELETE against the versioned REST prefix; resolves to `()` on success
    /// (the API answers 204 No Content).
    #[instrument(skip(self), fields(path = %path))]
    pub async fn rest_delete(&self, path: &str) -> Result<()> {
        let request = self.delete(&self.rest_url(path));
        let response = self.http.execute(request).await?;

        if response.is_no_content() || response.is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(Error::new(ErrorKind::Http { status, body }))
        }
    }
}
