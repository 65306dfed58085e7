//! SOSL parameterized search types.
//!
//! The search operation POSTs a full configuration object to the
//! `parameterizedSearch/` resource instead of encoding a raw SOSL string
//! into the URL.

use serde::{Deserialize, Serialize};

/// Result of a SOSL search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoslQueryResult<T> {
    #[serde(rename = "searchRecords")]
    pub search_records: Vec<T>,
}

/// Search scope restricting which fields are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchScope {
    All,
    Name,
    Email,
    Phone,
    Sidebar,
}

/// Operator for data-category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataCategoryOperator {
    Above,
    AboveOrBelow,
    At,
    Below,
}

/// Filter restricting knowledge-article or answer results to data categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCategoryFilter {
    /// The data category group to filter by.
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub operator: DataCategoryOperator,
    /// The category names to filter by.
    pub categories: Vec<String>,
}

/// Per-object configuration within a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SObjectSearchSpec {
    /// Name of the SObject to return in the response.
    pub name: String,
    /// Fields to return for this SObject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Maximum number of rows returned for this SObject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Result ordering: `"field {ASC|DESC} [NULLS_{FIRST|LAST}]"`.
    #[serde(rename = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Field-value filter for this SObject's results.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
}

/// Full configuration for a parameterized SOSL search.
///
/// Only `q` is required; everything else is serialized only when set. The
/// search string is sent as the caller supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoslQuery {
    /// The search string.
    pub q: String,

    /// Data-category filters (Salesforce Knowledge / answers orgs).
    #[serde(rename = "dataCategories", skip_serializing_if = "Option::is_none")]
    pub data_categories: Option<Vec<DataCategoryFilter>>,

    /// Maximum number of results per sobject specified.
    #[serde(rename = "defaultLimit", skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u32>,

    /// Filter on the division field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,

    /// Fields to return for every sobject specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Search scope.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub scope: Option<SearchScope>,

    /// Set to `LABELS` to include display labels in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// Experience Cloud site ids to search.
    #[serde(rename = "netWorkIds", skip_serializing_if = "Option::is_none")]
    pub network_ids: Option<Vec<String>>,

    /// Starting row offset into the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of results across all sobjects.
    #[serde(rename = "overallLimit", skip_serializing_if = "Option::is_none")]
    pub overall_limit: Option<u32>,

    /// Price book id filter (Product2 searches only).
    #[serde(rename = "pricebookId", skip_serializing_if = "Option::is_none")]
    pub pricebook_id: Option<String>,

    /// Target snippet length for article/case/feed results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Per-object search configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sobjects: Option<Vec<SObjectSearchSpec>>,

    /// Whether spell correction is applied.
    #[serde(rename = "spellCorrection", skip_serializing_if = "Option::is_none")]
    pub spell_correction: Option<bool>,

    /// Set to "true" to track keywords in article searches.
    #[serde(rename = "updateTracking", skip_serializing_if = "Option::is_none")]
    pub update_tracking: Option<String>,

    /// Set to "true" to update article view statistics.
    #[serde(rename = "updateViewStat", skip_serializing_if = "Option::is_none")]
    pub update_view_stat: Option<String>,
}

impl SoslQuery {
    /// A search with just a query string.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}
