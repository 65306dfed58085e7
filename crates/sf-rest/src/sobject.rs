//! SObject operation result types.
//!
//! Update and delete answer 204 No Content and resolve to `()`, so only the
//! body-carrying operations have result types here.

use serde::{Deserialize, Serialize};

/// Result of a create operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateResult {
    pub id: String,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

/// Result of an upsert-by-external-id operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpsertResult {
    pub id: String,
    pub success: bool,
    /// True when the upsert created a record rather than updating one.
    pub created: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

/// Error entry in an operation result body.
///
/// Returned verbatim; interpreting the code is the caller's concern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SalesforceError {
    #[serde(rename = "statusCode")]
    pub status_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
