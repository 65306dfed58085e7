//! Apex REST invocation types.

use conduit_sf_client::RequestMethod;

/// How the response body of an Apex REST call is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApexResponseFormat {
    /// Parse the body as JSON (the default).
    #[default]
    Json,
    /// Return the body as a plain string.
    Text,
}

/// Description of one Apex REST invocation.
///
/// Apex REST endpoints live under `/services/apexrest`; the `path` here is
/// everything after that prefix, e.g. `/Account/` for
/// `https://{instance}/services/apexrest/Account/`.
#[derive(Debug, Clone)]
pub struct ApexRestRequest {
    /// HTTP method to invoke the endpoint with.
    pub method: RequestMethod,
    /// Path suffix under `/services/apexrest`, including any query string
    /// (caller-encoded).
    pub path: String,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
    /// Response parsing mode.
    pub response_format: ApexResponseFormat,
}

impl ApexRestRequest {
    /// Create a request with no body and JSON response parsing.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            response_format: ApexResponseFormat::default(),
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the response parsing mode.
    pub fn with_response_format(mut self, format: ApexResponseFormat) -> Self {
        self.response_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ApexRestRequest::new(RequestMethod::Get, "/Account/");
        assert_eq!(request.method, RequestMethod::Get);
        assert_eq!(request.path, "/Account/");
        assert!(request.body.is_none());
        assert_eq!(request.response_format, ApexResponseFormat::Json);
    }

    #[test]
    fn test_request_builders() {
        let request = ApexRestRequest::new(RequestMethod::Post, "/Orders")
            .with_body(serde_json::json!({"amount": 10}))
            .with_response_format(ApexResponseFormat::Text);
        assert!(request.body.is_some());
        assert_eq!(request.response_format, ApexResponseFormat::Text);
    }
}
