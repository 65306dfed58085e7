//! Composite API types and sub-request encoders.
//!
//! A composite call bundles an ordered list of sub-requests into one HTTP
//! POST. Sub-requests execute server-side in list order and may reference
//! earlier results with the `@{referenceId.field}` templating convention;
//! the reference is passed through verbatim and resolved remotely.
//!
//! The encoder constructors on [`CompositeSubRequest`] are pure: they build
//! descriptors without performing any I/O. [`RestClient`](crate::RestClient)
//! exposes wrappers that fill in its own API version.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One sub-request inside a composite call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSubRequest {
    /// Caller-chosen id, unique within one composite call (not locally
    /// enforced; collisions surface as a remote error). Later sub-requests
    /// may reference it in their own body or URL.
    #[serde(rename = "referenceId")]
    pub reference_id: String,

    /// HTTP verb: POST, PUT, PATCH, GET or DELETE (case-sensitive).
    pub method: String,

    /// Relative resource path including any query string, URL-encoded by the
    /// caller; passed through verbatim.
    pub url: String,

    /// Input body, present for record-carrying operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,

    /// Per-sub-request headers. The remote contract reserves Accept,
    /// Authorization and Content-Type for the top-level request.
    #[serde(
        rename = "httpHeaders",
        default,
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub http_headers: HashMap<String, String>,
}

fn json_content_type() -> HashMap<String, String> {
    HashMap::from([("content-type".to_string(), "application/json".to_string())])
}

impl CompositeSubRequest {
    /// Descriptor for creating a record.
    pub fn create(
        api_version: &str,
        reference_id: impl Into<String>,
        sobject: &str,
        record: serde_json::Value,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            method: "POST".to_string(),
            url: format!("/services/data/v{api_version}/sobjects/{sobject}"),
            body: Some(record),
            http_headers: json_content_type(),
        }
    }

    /// Descriptor for updating a record by id.
    pub fn update(
        api_version: &str,
        reference_id: impl Into<String>,
        sobject: &str,
        record_id: &str,
        record: serde_json::Value,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            method: "PATCH".to_string(),
            url: format!("/services/data/v{api_version}/sobjects/{sobject}/{record_id}"),
            body: Some(record),
            http_headers: json_content_type(),
        }
    }

    /// Descriptor for upserting a record keyed by an external id field.
    pub fn upsert_by_external_id(
        api_version: &str,
        reference_id: impl Into<String>,
        sobject: &str,
        external_id_field: &str,
        external_id_value: &str,
        record: serde_json::Value,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            method: "PATCH".to_string(),
            url: format!(
                "/services/data/v{api_version}/sobjects/{sobject}/{external_id_field}/{external_id_value}"
            ),
            body: Some(record),
            http_headers: json_content_type(),
        }
    }

    /// Descriptor for deleting a record by id.
    pub fn delete(
        api_version: &str,
        reference_id: impl Into<String>,
        sobject: &str,
        record_id: &str,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            method: "DELETE".to_string(),
            url: format!("/services/data/v{api_version}/sobjects/{sobject}/{record_id}"),
            body: None,
            // Bodyless descriptors carry the JSON content type too.
            http_headers: json_content_type(),
        }
    }

    /// Descriptor for a SOQL query.
    ///
    /// The statement is interpolated into the URL as-is; URL-encoding is the
    /// caller's responsibility.
    pub fn soql_query(
        api_version: &str,
        reference_id: impl Into<String>,
        query_statement: &str,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            method: "GET".to_string(),
            url: format!("/services/data/v{api_version}/query/?q={query_statement}"),
            body: None,
            http_headers: json_content_type(),
        }
    }
}

/// The composite call envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeRequest {
    /// Roll back prior sub-requests and abort the rest on the first failure,
    /// instead of best-effort execution.
    #[serde(rename = "allOrNone")]
    pub all_or_none: bool,

    /// Remote-side execution-efficiency hint.
    #[serde(rename = "collateSubrequests")]
    pub collate_subrequests: bool,

    /// The sub-requests, executed in list order.
    #[serde(rename = "compositeRequest")]
    pub sub_requests: Vec<CompositeSubRequest>,
}

/// Result of a composite call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompositeResult {
    /// Per-sub-request results, positionally aligned with the request.
    #[serde(rename = "compositeResponse")]
    pub responses: Vec<CompositeSubRequestResult>,
}

impl CompositeResult {
    /// Find a sub-request result by its reference id.
    pub fn by_reference_id(&self, reference_id: &str) -> Option<&CompositeSubRequestResult> {
        self.responses
            .iter()
            .find(|r| r.reference_id == reference_id)
    }
}

/// Result of one sub-request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompositeSubRequestResult {
    /// Echo of the sub-request's reference id.
    #[serde(rename = "referenceId")]
    pub reference_id: String,

    /// HTTP status of the sub-request.
    #[serde(rename = "httpStatusCode")]
    pub http_status_code: u16,

    /// Response headers of the sub-request.
    #[serde(rename = "httpHeaders", default)]
    pub http_headers: HashMap<String, String>,

    /// Success payload, or the remote error code/message pair on failure;
    /// returned verbatim.
    pub body: serde_json::Value,
}

impl CompositeSubRequestResult {
    /// Whether the sub-request itself succeeded.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const V: &str = "58.0";

    #[test]
    fn test_create_encoder() {
        let sub = CompositeSubRequest::create(V, "NewAccount", "Account", json!({"Name": "Acme"}));

        assert_eq!(sub.method, "POST");
        assert_eq!(sub.url, "/services/data/v58.0/sobjects/Account");
        assert_eq!(sub.reference_id, "NewAccount");
        assert_eq!(sub.body, Some(json!({"Name": "Acme"})));
        assert_eq!(
            sub.http_headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_update_encoder_segment_order() {
        let sub = CompositeSubRequest::update(V, "Upd", "Account", "001xx", json!({"Name": "New"}));

        assert_eq!(sub.method, "PATCH");
        assert_eq!(sub.url, "/services/data/v58.0/sobjects/Account/001xx");
        assert!(sub.body.is_some());
    }

    #[test]
    fn test_upsert_encoder_segment_order() {
        let sub = CompositeSubRequest::upsert_by_external_id(
            V,
            "Ups",
            "Account",
            "ExternalId__c",
            "A-42",
            json!({"Name": "Acme"}),
        );

        assert_eq!(sub.method, "PATCH");
        assert_eq!(
            sub.url,
            "/services/data/v58.0/sobjects/Account/ExternalId__c/A-42"
        );
    }

    #[test]
    fn test_delete_encoder_is_bodyless_but_typed() {
        let sub = CompositeSubRequest::delete(V, "Del", "Account", "001xx");

        assert_eq!(sub.method, "DELETE");
        assert_eq!(sub.url, "/services/data/v58.0/sobjects/Account/001xx");
        assert!(sub.body.is_none());
        // content-type is set even without a body.
        assert_eq!(
            sub.http_headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_soql_encoder_passes_statement_through() {
        let sub = CompositeSubRequest::soql_query(V, "Q1", "SELECT Id FROM Account LIMIT 1");

        assert_eq!(sub.method, "GET");
        // The statement is not URL-encoded by the encoder.
        assert_eq!(
            sub.url,
            "/services/data/v58.0/query/?q=SELECT Id FROM Account LIMIT 1"
        );
        assert!(sub.body.is_none());
    }

    #[test]
    fn test_envelope_serialization_preserves_order() {
        let request = CompositeRequest {
            all_or_none: true,
            collate_subrequests: false,
            sub_requests: vec![
                CompositeSubRequest::create(V, "a", "Account", json!({"Name": "One"})),
                CompositeSubRequest::soql_query(V, "b", "SELECT Id FROM Account"),
                CompositeSubRequest::delete(V, "c", "Account", "001xx"),
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["allOrNone"], true);
        assert_eq!(value["collateSubrequests"], false);

        let subs = value["compositeRequest"].as_array().unwrap();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0]["referenceId"], "a");
        assert_eq!(subs[1]["referenceId"], "b");
        assert_eq!(subs[2]["referenceId"], "c");
        // Bodyless sub-requests omit the body key entirely.
        assert!(subs[1].get("body").is_none());
        assert_eq!(subs[0]["httpHeaders"]["content-type"], "application/json");
    }

    #[test]
    fn test_result_deserialization() {
        let result: CompositeResult = serde_json::from_value(json!({
            "compositeResponse": [
                {
                    "body": {"id": "001xx", "success": true, "errors": []},
                    "httpHeaders": {"Location": "/services/data/v58.0/sobjects/Account/001xx"},
                    "httpStatusCode": 201,
                    "referenceId": "NewAccount"
                },
                {
                    "body": [{"errorCode": "NOT_FOUND", "message": "not found"}],
                    "httpHeaders": {},
                    "httpStatusCode": 404,
                    "referenceId": "Missing"
                }
            ]
        }))
        .unwrap();

        assert_eq!(result.responses.len(), 2);
        assert!(result.responses[0].is_success());
        assert!(!result.responses[1].is_success());
        assert_eq!(
            result.responses[0]
                .http_headers
                .get("Location")
                .map(String::as_str),
            Some("/services/data/v58.0/sobjects/Account/001xx")
        );
    }

    #[test]
    fn test_round_trip_pairing_by_reference_id() {
        let subs = vec![
            CompositeSubRequest::create(V, "koko-1", "Account", json!({"Name": "One"})),
            CompositeSubRequest::create(V, "koko-2", "Account", json!({"Name": "Two"})),
        ];

        // Results arrive in a different order; pairing goes by id, not index.
        let result: CompositeResult = serde_json::from_value(json!({
            "compositeResponse": [
                {"body": {"id": "002"}, "httpHeaders": {}, "httpStatusCode": 201, "referenceId": "koko-2"},
                {"body": {"id": "001"}, "httpHeaders": {}, "httpStatusCode": 201, "referenceId": "koko-1"}
            ]
        }))
        .unwrap();

        for sub in &subs {
            let matched = result.by_reference_id(&sub.reference_id).unwrap();
            assert_eq!(matched.reference_id, sub.reference_id);
        }
        assert_eq!(
            result.by_reference_id("koko-1").unwrap().body["id"],
            "001"
        );
        assert!(result.by_reference_id("absent").is_none());
    }
}
