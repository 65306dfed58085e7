//! SOQL query operations.

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::Result;
use crate::query::QueryResult;

impl super::RestClient {
    /// Execute a SOQL query.
    ///
    /// The statement is interpolated into `query/?q={statement}` exactly as
    /// given. URL-encoding is the caller's responsibility, as is escaping
    /// any user-provided values inside the statement.
    #[instrument(skip(self))]
    pub async fn soql_query<T: DeserializeOwned>(
        &self,
        query_statement: &str,
    ) -> Result<QueryResult<T>> {
        let path = format!("query/?q={query_statement}");
        self.connector().rest_get(&path).await
    }

    /// Fetch the next page of a query result.
    ///
    /// `next_records_url` is the server-issued value from
    /// [`QueryResult::next_records_url`].
    #[instrument(skip(self))]
    pub async fn query_more<T: DeserializeOwned>(
        &self,
        next_records_url: &str,
    ) -> Result<QueryResult<T>> {
        self.connector()
            .get_json(next_records_url)
            .await
    }
}
