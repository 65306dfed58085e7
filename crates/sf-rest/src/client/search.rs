//! SOSL search operations.

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::Result;
use crate::search::{SoslQuery, SoslQueryResult};

impl super::RestClient {
    /// Execute a parameterized SOSL search.
    ///
    /// POSTs the full configuration to `parameterizedSearch/`; only the
    /// fields set on [`SoslQuery`] go on the wire.
    #[instrument(skip(self, query))]
    pub async fn sosl_query<T: DeserializeOwned>(
        &self,
        query: &SoslQuery,
    ) -> Result<SoslQueryResult<T>> {
        self.connector()
            .rest_post("parameterizedSearch/", query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::RestClient;
    use crate::search::{SObjectSearchSpec, SoslQuery, SoslQueryResult};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use conduit_sf_client::ClientConfig;

    fn client_for(mock_server: &MockServer) -> RestClient {
        RestClient::with_config(
            mock_server.uri(),
            "test-token",
            ClientConfig::builder().without_retry().build(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_sosl_query_posts_configuration() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/parameterizedSearch/"))
            .and(body_json(json!({
                "q": "Acme",
                "sobjects": [{"name": "Account", "fields": ["Id", "Name"], "limit": 5}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "searchRecords": [
                    {"attributes": {"type": "Account", "url": "/x"}, "Id": "001xx", "Name": "Acme"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let query = SoslQuery {
            q: "Acme".into(),
            sobjects: Some(vec![SObjectSearchSpec {
                name: "Account".into(),
                fields: Some(vec!["Id".into(), "Name".into()]),
                limit: Some(5),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let result: SoslQueryResult<serde_json::Value> = client.sosl_query(&query).await.unwrap();
        assert_eq!(result.search_records.len(), 1);
        assert_eq!(result.search_records[0]["Name"], "Acme");
    }

    #[tokio::test]
    async fn test_sosl_query_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/data/v58.0/parameterizedSearch/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .sosl_query::<serde_json::Value>(&SoslQuery::new("Acme"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
    }
}
