//! # conduit-sf-client
//!
//! HTTP infrastructure for the Salesforce REST connector.
//!
//! This crate provides the shared HTTP layer the operation crates build on:
//! - A [`Connector`] bound to one Salesforce instance: base URL, optional
//!   bearer token, default headers, API version
//! - Automatic retry with exponential backoff and jitter
//! - Rate limit detection (429 + `Retry-After`)
//! - Structured errors carrying the HTTP status and response body
//! - Per-call configuration overlay merged over connector defaults
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Operation Layer                     │
//! │                 (conduit-sf-rest)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Connector                        │
//! │  - Base URL + optional bearer token + headers       │
//! │  - URL helpers for the versioned REST prefix        │
//! │  - Typed JSON methods (get_json, post_json, ...)    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    HttpClient                       │
//! │  - Raw HTTP with retry and rate-limit handling      │
//! │  - Salesforce error body parsing                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use conduit_sf_client::Connector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), conduit_sf_client::Error> {
//!     let connector = Connector::new("https://myorg.my.salesforce.com")?
//!         .with_access_token("00Dxx...");
//!
//!     let limits: serde_json::Value = connector.rest_get("limits").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod connector;
mod error;
mod request;
mod response;
mod retry;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use connector::{CallOptions, Connector};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;
pub use retry::{RetryConfig, RetryState};

/// Default Salesforce API version.
pub const DEFAULT_API_VERSION: &str = "58.0";

/// User-Agent string for the connector.
pub const USER_AGENT: &str = concat!("conduit-sf-connector/", env!("CARGO_PKG_VERSION"));
