//! Composite call execution and encoder wrappers.

use serde_json::Value;
use tracing::instrument;

use crate::composite::{CompositeRequest, CompositeResult, CompositeSubRequest};
use crate::error::Result;

impl super::RestClient {
    /// Execute a composite call.
    ///
    /// Issues exactly one POST to `composite/` with the serialized envelope
    /// and returns the per-sub-request results verbatim: no reordering, no
    /// reference resolution, no check that the result count matches the
    /// request. A non-2xx top-level response fails the call; failures of
    /// individual sub-requests inside a 2xx do not; scan
    /// [`CompositeResult::responses`] for those.
    #[instrument(skip(self, request), fields(sub_requests = request.sub_requests.len()))]
    pub async fn composite(&self, request: &CompositeRequest) -> Result<CompositeResult> {
        self.connector()
            .rest_post("composite/", request)
            .await
    }

    // =========================================================================
    // Sub-request encoders bound to this client's API version
    // =========================================================================

    /// Sub-request descriptor for creating a record.
    pub fn create_sobject_sub_request(
        &self,
        reference_id: impl Into<String>,
        sobject: &str,
        record: Value,
    ) -> CompositeSubRequest {
        CompositeSubRequest::create(self.api_version(), reference_id, sobject, record)
    }

    /// Sub-request descriptor for updating a record by id.
    pub fn update_sobject_sub_request(
        &self,
        reference_id: impl Into<String>,
        sobject: &str,
        record_id: &str,
        record: Value,
    ) -> CompositeSubRequest {
        CompositeSubRequest::update(self.api_version(), reference_id, sobject, record_id, record)
    }

    /// Sub-request descriptor for upserting a record by external id.
    pub fn upsert_sobject_by_external_id_sub_request(
        &self,
        reference_id: impl Into<String>,
        sobject: &str,
        external_id_field: &str,
        external_id_value: &str,
        record: Value,
    ) -> CompositeSubRequest {
        CompositeSubRequest::upsert_by_external_id(
            self.api_version(),
            reference_id,
            sobject,
            external_id_field,
            external_id_value,
            record,
        )
    }

    /// Sub-request descriptor for deleting a record by id.
    pub fn delete_sobject_sub_request(
        &self,
        reference_id: impl Into<String>,
        sobject: &str,
        record_id: &str,
    ) -> CompositeSubRequest {
        CompositeSubRequest::delete(self.api_version(), reference_id, sobject, record_id)
    }

    /// Sub-request descriptor for a SOQL query.
    pub fn soql_query_sub_request(
        &self,
        reference_id: impl Into<String>,
        query_statement: &str,
    ) -> CompositeSubRequest {
        CompositeSubRequest::soql_query(self.api_version(), reference_id, query_statement)
    }
}

#[cfg(test)]
mod tests {
    use super::super::RestClient;
    use crate::composite::{CompositeRequest, CompositeSubRequest};
    use conduit_sf_client::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock_server: &MockServer) -> RestClient {
        RestClient::with_config(
            mock_server.uri(),
            "test-token",
            ClientConfig::builder().without_retry().build(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_composite_posts_envelope_once_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/composite/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "compositeResponse": [
                    {"body": {"id": "001", "success": true, "errors": []}, "httpHeaders": {}, "httpStatusCode": 201, "referenceId": "a"},
                    {"body": null, "httpHeaders": {}, "httpStatusCode": 204, "referenceId": "b"},
                    {"body": null, "httpHeaders": {}, "httpStatusCode": 204, "referenceId": "c"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = CompositeRequest {
            all_or_none: true,
            collate_subrequests: false,
            sub_requests: vec![
                client.create_sobject_sub_request("a", "Account", json!({"Name": "Acme"})),
                client.update_sobject_sub_request(
                    "b",
                    "Account",
                    "@{a.id}",
                    json!({"Phone": "123"}),
                ),
                client.delete_sobject_sub_request("c", "Contact", "003xx"),
            ],
        };

        let result = client.composite(&request).await.unwrap();
        assert_eq!(result.responses.len(), 3);

        // Inspect the one captured request body: the envelope keeps all three
        // sub-requests in input order.
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["allOrNone"], true);
        assert_eq!(body["collateSubrequests"], false);
        let subs = body["compositeRequest"].as_array().unwrap();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0]["referenceId"], "a");
        assert_eq!(subs[1]["referenceId"], "b");
        assert_eq!(subs[2]["referenceId"], "c");
        // The reference template in the update URL went through verbatim.
        assert_eq!(
            subs[1]["url"],
            "/services/data/v58.0/sobjects/Account/@{a.id}"
        );
    }

    #[tokio::test]
    async fn test_composite_empty_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/composite/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"compositeResponse": []})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = CompositeRequest {
            all_or_none: false,
            collate_subrequests: false,
            sub_requests: vec![CompositeSubRequest {
                reference_id: "koko-1".into(),
                method: "POST".into(),
                url: "/sobjects/".into(),
                body: None,
                http_headers: Default::default(),
            }],
        };

        let result = client.composite(&request).await.unwrap();
        assert!(result.responses.is_empty());
    }

    #[tokio::test]
    async fn test_composite_partial_failure_still_resolves() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/composite/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "compositeResponse": [
                    {"body": {"id": "001", "success": true, "errors": []}, "httpHeaders": {}, "httpStatusCode": 201, "referenceId": "ok"},
                    {
                        "body": [{"errorCode": "PROCESSING_HALTED", "message": "Prior request failed"}],
                        "httpHeaders": {},
                        "httpStatusCode": 400,
                        "referenceId": "failed"
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = CompositeRequest {
            all_or_none: true,
            collate_subrequests: false,
            sub_requests: vec![
                client.create_sobject_sub_request("ok", "Account", json!({"Name": "A"})),
                client.create_sobject_sub_request("failed", "Account", json!({})),
            ],
        };

        // The top-level call is 2xx: the library resolves and leaves the
        // per-entry status codes to the caller.
        let result = client.composite(&request).await.unwrap();
        assert!(result.responses[0].is_success());
        assert!(!result.responses[1].is_success());
        assert_eq!(result.by_reference_id("failed").unwrap().http_status_code, 400);
    }

    #[tokio::test]
    async fn test_composite_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/composite/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = CompositeRequest {
            all_or_none: false,
            collate_subrequests: false,
            sub_requests: vec![client.soql_query_sub_request("q", "SELECT Id FROM Account")],
        };

        let err = client.composite(&request).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
