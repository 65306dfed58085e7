//! Apex REST invocation.

use conduit_sf_client::RequestMethod;
use tracing::instrument;

use crate::apex::{ApexResponseFormat, ApexRestRequest};
use crate::error::Result;

impl super::RestClient {
    /// Invoke a custom Apex REST endpoint.
    ///
    /// The request supplies the method, the path suffix under
    /// `/services/apexrest`, an optional JSON body and the response format.
    /// A 204 response resolves to `None`; any other 2xx resolves to the
    /// parsed body (`Text` format wraps the raw body in a JSON string).
    #[instrument(skip(self, request), fields(method = request.method.as_str(), path = %request.path))]
    pub async fn apex_rest(
        &self,
        request: &ApexRestRequest,
    ) -> Result<Option<serde_json::Value>> {
        let url = self.connector().apexrest_url(&request.path);

        let mut builder = match request.method {
            RequestMethod::Get => self.connector().get(&url),
            RequestMethod::Post => self.connector().post(&url),
            RequestMethod::Patch => self.connector().patch(&url),
            RequestMethod::Put => self.connector().put(&url),
            RequestMethod::Delete => self.connector().delete(&url),
        };

        if let Some(ref body) = request.body {
            builder = builder.json_value(body.clone());
        }

        let response = self.connector().execute(builder).await?;
        if response.is_no_content() {
            return Ok(None);
        }

        match request.response_format {
            ApexResponseFormat::Json => response.json().await.map(Some),
            ApexResponseFormat::Text => {
                let text = response.text().await?;
                Ok(Some(serde_json::Value::String(text)))
            }
        }
    }
}
