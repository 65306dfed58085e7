//! HTTP response handling and error conversion.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is 2xx.
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Returns true if this is a 204 No Content response.
    pub fn is_no_content(&self) -> bool {
        self.status() == 204
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// The `Retry-After` header as a duration, if present and numeric.
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")?
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }

    /// The response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Convert a non-2xx response into an error, consuming the body.
    ///
    /// 2xx responses pass through unchanged. Everything else becomes an error
    /// carrying the status and the response body, parsed into the structured
    /// Salesforce shape when the body allows it.
    pub(crate) async fn into_checked(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let body = self.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
}

/// Salesforce error response entry: `{errorCode, message, fields}`.
#[derive(Debug, serde::Deserialize)]
struct RemoteError {
    #[serde(alias = "errorCode", alias = "statusCode")]
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}

/// Build the error for a non-2xx response body.
fn error_from_response(status: u16, body: &str) -> Error {
    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after: None });
    }

    // Salesforce reports errors as an array of {errorCode, message, fields};
    // single-object bodies occur on some endpoints.
    let first_error = serde_json::from_str::<Vec<RemoteError>>(body)
        .ok()
        .and_then(|errors| errors.into_iter().next())
        .or_else(|| serde_json::from_str::<RemoteError>(body).ok());

    if let Some(err) = first_error {
        return Error::new(ErrorKind::Salesforce {
            status,
            error_code: err.error_code,
            message: redact(&err.message),
            fields: err.fields.unwrap_or_default(),
        });
    }

    Error::new(ErrorKind::Http {
        status,
        body: redact(body),
    })
}

/// Scrub token- and session-id-shaped substrings out of text surfaced in
/// errors, and bound its length.
fn redact(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    // Session ids embedded in URLs or messages: sid=<long alphanumeric>.
    let session = regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").unwrap();
    // Access tokens: org id prefix, "!", then the secret part.
    let token = regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}![A-Za-z0-9_.]+").unwrap();

    let mut out = token.replace_all(message, "[REDACTED_TOKEN]").to_string();
    out = session.replace_all(&out, "sid=[REDACTED]").to_string();

    if out.len() > MAX_LENGTH {
        out.truncate(MAX_LENGTH);
        out.push_str("...[truncated]");
    }
    out
}
