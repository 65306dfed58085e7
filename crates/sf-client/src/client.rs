//! Core HTTP client with retry and rate-limit handling.

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::retry::RetryState;

/// HTTP client for the Salesforce REST API with built-in retry and error
/// handling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Patch, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request, retrying retryable failures per the effective
    /// retry config (the request's override, else the client's).
    #[instrument(skip(self, request), fields(method = request.method.as_str(), url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let retry_config = request
            .retry_override
            .clone()
            .or_else(|| self.config.retry.clone());
        let mut retry = retry_config.map(RetryState::new);

        loop {
            match self.execute_once(&request).await {
                Ok(response) => return response.into_checked().await,
                Err(err) if err.is_retryable() => {
                    if let Some(ref mut state) = retry {
                        if let Some(delay) = state.next_delay(err.retry_after()) {
                            warn!(
                                attempt = state.attempt(),
                                delay_ms = delay.as_millis(),
                                error = %err,
                                "request failed, retrying"
                            );
                            tokio::time::sleep(delay).await;
                            continue;
                        }

                        return Err(Error::new(ErrorKind::RetriesExhausted {
                            attempts: state.attempt(),
                            last: Box::new(err),
                        }));
                    }

                    return Err(err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }

    /// Execute a single request without retry logic.
    async fn execute_once(&self, request: &RequestBuilder) -> Result<Response> {
        let mut req = self.inner.request(request.method.to_reqwest(), &request.url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(ref body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(value),
                RequestBody::Text(text) => req.body(text.clone()),
            };
        }

        if self.config.enable_tracing {
            debug!(method = request.method.as_str(), url = %request.url, "sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            debug!(status, "response received");
        }

        // 429 carries its Retry-After into the retry loop.
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);

            return Err(Error::new(ErrorKind::RateLimited { retry_after }));
        }

        // Retryable server errors short-circuit before body handling.
        if matches!(status, 500 | 502 | 503 | 504) {
            return Err(Error::new(ErrorKind::Http {
                status,
                body: format!("server error: {status}"),
            }));
        }

        Ok(Response::new(response))
    }
}
