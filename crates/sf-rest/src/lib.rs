//! # conduit-sf-rest
//!
//! Salesforce REST API operations over a [`conduit_sf_client::Connector`].
//!
//! ## Features
//!
//! - **SObject CRUD** - create, update, upsert-by-external-id, delete
//! - **SOQL query** - execute queries and follow server-side pagination
//! - **SOSL search** - parameterized full-text search across objects
//! - **Composite API** - bundle sub-requests into a single call, with pure
//!   encoders producing the sub-request descriptors
//! - **Apex REST** - invoke custom Apex REST endpoints
//! - **Knowledge articles** - list knowledge articles with paging
//!
//! ## Example
//!
//! ```rust,ignore
//! use conduit_sf_rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), conduit_sf_rest::Error> {
//!     let client = RestClient::new("https://myorg.my.salesforce.com", "access_token")?;
//!
//!     // Create
//!     let created = client
//!         .create_sobject("Account", &serde_json::json!({"Name": "Acme"}))
//!         .await?;
//!
//!     // Query
//!     let accounts: conduit_sf_rest::QueryResult<serde_json::Value> = client
//!         .soql_query("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     // Update, then delete
//!     client
//!         .update_sobject("Account", &created.id, &serde_json::json!({"Name": "Acme Corp"}))
//!         .await?;
//!     client.delete_sobject("Account", &created.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod apex;
mod client;
mod composite;
mod error;
pub mod knowledge;
mod query;
mod search;
mod sobject;

// Main client
pub use client::RestClient;

// Composite API
pub use composite::{
    CompositeRequest, CompositeResult, CompositeSubRequest, CompositeSubRequestResult,
};

// Apex REST
pub use apex::{ApexResponseFormat, ApexRestRequest};

// Knowledge articles
pub use knowledge::{ArticleListParams, ArticleListResult, KnowledgeArticle};

// Error types
pub use error::{Error, ErrorKind, Result};

// Query types
pub use query::QueryResult;

// Search types
pub use search::{
    DataCategoryFilter, DataCategoryOperator, SObjectSearchSpec, SearchScope, SoslQuery,
    SoslQueryResult,
};

// SObject CRUD types
pub use sobject::{CreateResult, SalesforceError, UpsertResult};

// Re-export sf-client types that users need for configuration
pub use conduit_sf_client::{CallOptions, ClientConfig, ClientConfigBuilder, Connector, RetryConfig};
