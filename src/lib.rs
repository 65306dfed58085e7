//! # conduit-sf-connector
//!
//! Salesforce REST connector library for Rust.
//!
//! This facade re-exports the workspace crates:
//! - [`client`]: HTTP infrastructure (connector, configuration, retry,
//!   errors)
//! - [`rest`]: REST operations (SObject CRUD, SOQL/SOSL query, composite
//!   calls, Apex REST, knowledge articles)
//!
//! # Example
//!
//! ```rust,ignore
//! use conduit_sf_connector::rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new(
//!         "https://myorg.my.salesforce.com",
//!         std::env::var("SF_ACCESS_TOKEN")?,
//!     )?;
//!
//!     let created = client
//!         .create_sobject("Account", &serde_json::json!({"Name": "Acme"}))
//!         .await?;
//!     println!("created {}", created.id);
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use conduit_sf_client as client;

#[cfg(feature = "rest")]
pub use conduit_sf_rest as rest;

#[cfg(feature = "rest")]
pub use conduit_sf_rest::RestClient;

#[cfg(feature = "client")]
pub use conduit_sf_client::{CallOptions, ClientConfig, Connector};
