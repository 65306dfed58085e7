//! SObject CRUD operations.

use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::sobject::{CreateResult, UpsertResult};

impl super::RestClient {
    /// Create a new record of the given SObject type.
    ///
    /// POSTs to `sobjects/{sobject}`; the response body carries the new
    /// record id, a success flag and an error list.
    #[instrument(skip(self, record))]
    pub async fn create_sobject<T: Serialize>(
        &self,
        sobject: &str,
        record: &T,
    ) -> Result<CreateResult> {
        let path = format!("sobjects/{sobject}");
        self.connector()
            .rest_post(&path, record)
            .await
    }

    /// Update a record by id.
    ///
    /// PATCHes `sobjects/{sobject}/{record_id}`; the API answers 204 No
    /// Content, so success resolves to `()`.
    #[instrument(skip(self, record))]
    pub async fn update_sobject<T: Serialize>(
        &self,
        sobject: &str,
        record_id: &str,
        record: &T,
    ) -> Result<()> {
        let path = format!("sobjects/{sobject}/{record_id}");
        self.connector()
            .rest_patch(&path, record)
            .await
    }

    /// Insert or update a record keyed by an external id field.
    ///
    /// PATCHes `sobjects/{sobject}/{external_id_field}/{external_id_value}`;
    /// the response body's `created` flag tells the two outcomes apart.
    #[instrument(skip(self, record))]
    pub async fn upsert_sobject_by_external_id<T: Serialize>(
        &self,
        sobject: &str,
        external_id_field: &str,
        external_id_value: &str,
        record: &T,
    ) -> Result<UpsertResult> {
        let path = format!("sobjects/{sobject}/{external_id_field}/{external_id_value}");
        self.connector()
            .rest_patch_json(&path, record)
            .await
    }

    /// Delete a record by id.
    ///
    /// The API answers 204 No Content, so success resolves to `()`.
    #[instrument(skip(self))]
    pub async fn delete_sobject(&self, sobject: &str, record_id: &str) -> Result<()> {
        let path = format!("sobjects/{sobject}/{record_id}");
        self.connector()
            .rest_delete(&path)
            .await
    }
}
