use crate::model::Extension;
use serde::{Deserialize, Serialize};

/// Ordering of query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    LastUpdated,
    PublishedDate,
}

impl SortBy {
    /// Numeric code the marketplace expects in `sortBy`.
    pub fn code(self) -> u32 {
        match self {
            SortBy::LastUpdated => 1,
            SortBy::PublishedDate => 10,
        }
    }
}

/// Marketplace filter kinds used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    ExtensionId,
    Category,
    /// `publisher.extension` slug
    ExtensionName,
    Target,
    SearchText,
    ExcludeWithFlags,
}

impl FilterType {
    pub fn code(self) -> u32 {
        match self {
            FilterType::ExtensionId => 4,
            FilterType::Category => 5,
            FilterType::ExtensionName => 7,
            FilterType::Target => 8,
            FilterType::SearchText => 10,
            FilterType::ExcludeWithFlags => 12,
        }
    }
}

/// A single `{filterType, value}` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub filter_type: u32,
    pub value: String,
}

impl Criterion {
    pub fn new(filter_type: FilterType, value: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.code(),
            value: value.into(),
        }
    }
}

/// Paging, ordering and filters for one query.
///
/// Override only what you need:
///
/// ```no_run
/// use server::marketplace::{ExtensionQueryOptions, SortBy};
///
/// let options = ExtensionQueryOptions {
///     page_size: 10,
///     sort_by: SortBy::PublishedDate,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionQueryOptions {
    pub page_number: u32,
    pub page_size: u32,
    pub sort_by: SortBy,
    pub direction: u32,
    pub criteria: Vec<Criterion>,
}

impl Default for ExtensionQueryOptions {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 100,
            sort_by: SortBy::LastUpdated,
            direction: 2,
            criteria: Vec::new(),
        }
    }
}

/// Request body sent to the extension query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQueryRequest {
    pub asset_types: Option<Vec<String>>,
    pub filters: Vec<QueryFilter>,
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    pub criteria: Vec<Criterion>,
    pub direction: u32,
    pub page_size: u32,
    pub page_number: u32,
    pub sort_by: u32,
    pub sort_order: u32,
    pub paging_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtensionQueryResponse {
    #[serde(default)]
    pub results: Vec<ExtensionQueryResultSet>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtensionQueryResultSet {
    #[serde(default)]
    pub extensions: Vec<ExtensionQueryResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub publisher_id: String,
    pub publisher_name: String,
    pub display_name: String,
    #[serde(default)]
    pub flags: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionFile {
    pub asset_type: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionVersion {
    pub version: String,
    #[serde(default)]
    pub flags: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub files: Vec<VersionFile>,
    #[serde(default)]
    pub properties: Vec<VersionProperty>,
    #[serde(default)]
    pub asset_uri: String,
    #[serde(default)]
    pub fallback_asset_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub statistic_name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallationTarget {
    pub target: String,
    #[serde(default)]
    pub target_version: String,
}

/// One extension as returned by the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQueryResult {
    pub publisher: Publisher,
    pub extension_id: String,
    pub extension_name: String,
    pub display_name: String,
    #[serde(default)]
    pub flags: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub versions: Vec<ExtensionVersion>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub statistics: Option<Vec<Statistic>>,
    #[serde(default)]
    pub installation_targets: Vec<InstallationTarget>,
    #[serde(default)]
    pub deployment_type: i32,
}

impl ExtensionQueryResult {
    /// Value of a named statistic, if reported.
    pub fn statistic(&self, name: &str) -> Option<f64> {
        self.statistics
            .as_deref()?
            .iter()
            .find(|stat| stat.statistic_name == name)
            .map(|stat| stat.value)
    }
}

impl From<&ExtensionQueryResult> for Extension {
    fn from(result: &ExtensionQueryResult) -> Self {
        let stat = |name: &str| result.statistic(name).unwrap_or(0.0);

        Extension {
            name: result.extension_name.clone(),
            display_name: result.display_name.clone(),
            short_description: result.short_description.clone(),
            publisher_id: result.publisher.publisher_id.clone(),
            publisher_name: result.publisher.publisher_name.clone(),
            publisher_display_name: result.publisher.display_name.clone(),
            installs: stat("install").max(0.0).round() as u64,
            trending_daily: stat("trendingdaily"),
            trending_weekly: stat("trendingweekly"),
            trending_monthly: stat("trendingmonthly"),
            weighted_rating: stat("weightedRating"),
        }
    }
}
