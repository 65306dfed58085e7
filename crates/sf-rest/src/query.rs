//! SOQL query result types.

use serde::{Deserialize, Serialize};

/// Result of a SOQL query.
///
/// When the result set exceeds the server's batch size, `done` is false and
/// `next_records_url` points at the next page (see
/// [`RestClient::query_more`](crate::RestClient::query_more)).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all matching records are in this page.
    pub done: bool,

    /// Server-issued URL of the next page, when `done` is false.
    #[serde(rename = "nextRecordsUrl", skip_serializing_if = "Option::is_none")]
    pub next_records_url: Option<String>,

    /// The records in this page.
    pub records: Vec<T>,
}
