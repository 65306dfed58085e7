//! Salesforce REST API client.
//!
//! `RestClient` wraps a [`Connector`] from `conduit-sf-client` and provides
//! typed methods for the REST operations, grouped by family in submodules.

use conduit_sf_client::{CallOptions, ClientConfig, Connector};

use crate::error::Result;

mod apex;
mod composite;
mod crud;
mod knowledge;
mod query;
mod search;

/// Salesforce REST API client.
///
/// Provides typed methods for:
/// - SObject CRUD (create, update, upsert by external id, delete)
/// - SOQL queries with pagination follow-up
/// - Parameterized SOSL search
/// - Composite calls and their sub-request encoders
/// - Apex REST invocation
/// - Knowledge article listing
///
/// # Example
///
/// ```rust,ignore
/// use conduit_sf_rest::RestClient;
///
/// let client = RestClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// let created = client
///     .create_sobject("Account", &serde_json::json!({"Name": "Acme"}))
///     .await?;
/// client.delete_sobject("Account", &created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    connector: Connector,
}

impl RestClient {
    /// Create a REST client for the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let connector = Connector::new(instance_url)?.with_access_token(access_token);
        Ok(Self { connector })
    }

    /// Create a REST client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let connector =
            Connector::with_config(instance_url, config)?.with_access_token(access_token);
        Ok(Self { connector })
    }

    /// Create a REST client from an existing connector.
    ///
    /// Use this when the connector needs non-default headers or no bearer
    /// token at all.
    pub fn from_connector(connector: Connector) -> Self {
        Self { connector }
    }

    /// The underlying connector.
    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    /// The instance base URL.
    pub fn instance_url(&self) -> &str {
        self.connector.base_url()
    }

    /// The API version.
    pub fn api_version(&self) -> &str {
        self.connector.api_version()
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.connector = self.connector.with_api_version(version);
        self
    }

    /// Derive a client with per-call options merged over the connector
    /// defaults (override wins). The original client is untouched.
    pub fn with_call_options(&self, options: &CallOptions) -> Self {
        Self {
            connector: self.connector.with_call_options(options),
        }
    }
}
