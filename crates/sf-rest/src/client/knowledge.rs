//! Knowledge article listing.

use tracing::instrument;

use crate::error::Result;
use crate::knowledge::{ArticleListParams, ArticleListResult};

impl super::RestClient {
    /// List knowledge articles.
    ///
    /// GETs `support/knowledgeArticles` with an `Accept-Language` header for
    /// the requested locale (e.g. "en-US") and the query parameters set on
    /// `params`.
    #[instrument(skip(self, params))]
    pub async fn knowledge_articles_list(
        &self,
        language: &str,
        params: &ArticleListParams,
    ) -> Result<ArticleListResult> {
        let url = self.connector().rest_url("support/knowledgeArticles");
        let mut builder = self
            .connector()
            .get(&url)
            .header("Accept-Language", language);
        for (name, value) in params.to_query_pairs() {
            builder = builder.query(name, value);
        }

        let response = self.connector().execute(builder).await?;
        response.json().await
    }
}
