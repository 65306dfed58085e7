//! Knowledge article listing types.

use serde::{Deserialize, Serialize};

/// Parameters for listing knowledge articles.
///
/// All fields are optional; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ArticleListParams {
    /// Full-text filter on the article list.
    pub q: Option<String>,
    /// Channel to list articles for (e.g. "App", "Pkb", "Csp", "Prm").
    pub channel: Option<String>,
    /// Number of articles per page (1-100).
    pub page_size: Option<u32>,
    /// 1-based page number.
    pub page_number: Option<u32>,
    /// Sort field (e.g. "LastPublishedDate", "ViewScore").
    pub sort: Option<String>,
    /// Sort order: "ASC" or "DESC".
    pub order: Option<String>,
}

impl ArticleListParams {
    /// The query-string pairs for the set fields.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref q) = self.q {
            pairs.push(("q".to_string(), q.clone()));
        }
        if let Some(ref channel) = self.channel {
            pairs.push(("channel".to_string(), channel.clone()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(page_number) = self.page_number {
            pairs.push(("pageNumber".to_string(), page_number.to_string()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        if let Some(ref order) = self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        pairs
    }
}

/// One page of the knowledge article list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleListResult {
    #[serde(default)]
    pub articles: Vec<KnowledgeArticle>,
    #[serde(rename = "currentPageUrl")]
    pub current_page_url: Option<String>,
    #[serde(rename = "nextPageUrl")]
    pub next_page_url: Option<String>,
    #[serde(rename = "pageNumber", default)]
    pub page_number: i32,
}

/// A listed knowledge article.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KnowledgeArticle {
    pub id: String,
    #[serde(rename = "articleNumber", default)]
    pub article_number: String,
    pub title: Option<String>,
    #[serde(rename = "urlName")]
    pub url_name: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "viewCount", default)]
    pub view_count: u64,
    #[serde(rename = "viewScore", default)]
    pub view_score: f64,
    #[serde(rename = "categoryGroups", default)]
    pub category_groups: Vec<ArticleCategoryGroup>,
}

/// Data-category group an article is filed under.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleCategoryGroup {
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "groupLabel")]
    pub group_label: String,
    #[serde(rename = "selectedCategories", default)]
    pub selected_categories: Vec<ArticleCategory>,
}

/// A selected data category within a group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleCategory {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "categoryLabel")]
    pub category_label: String,
    pub url: Option<String>,
}
