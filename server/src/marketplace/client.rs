use super::MarketplaceConfig;
use super::types::{
    Criterion, ExtensionQueryOptions, ExtensionQueryRequest, ExtensionQueryResponse,
    ExtensionQueryResult, FilterType, QueryFilter, SortBy,
};
use crate::common::errors::MarketplaceError;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

pub const EXTENSION_QUERY_API: &str =
    "https://marketplace.visualstudio.com/_apis/public/gallery/extensionquery";
const ACCEPT_EXTENSION_QUERY: &str = "application/json;api-version=5.2-preview.1;excludeUrls=true";
const QUERY_FLAGS: u32 = 870;
const VSCODE_TARGET: &str = "Microsoft.VisualStudio.Code";

/// Build the JSON body for `options`.
pub fn build_request_body(options: &ExtensionQueryOptions) -> ExtensionQueryRequest {
    ExtensionQueryRequest {
        asset_types: None,
        filters: vec![QueryFilter {
            criteria: options.criteria.clone(),
            direction: options.direction,
            page_size: options.page_size,
            page_number: options.page_number,
            sort_by: options.sort_by.code(),
            sort_order: 0,
            paging_token: None,
        }],
        flags: QUERY_FLAGS,
    }
}

/// Criteria selecting VS Code theme extensions.
pub fn updated_extensions_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(FilterType::Target, VSCODE_TARGET),
        Criterion::new(
            FilterType::SearchText,
            format!("target:\"{VSCODE_TARGET}\" "),
        ),
        Criterion::new(FilterType::ExcludeWithFlags, "37888"),
        Criterion::new(FilterType::Category, "Themes"),
    ]
}

/// Client for the Visual Studio Marketplace extension query API.
///
/// Every call is a single POST; failures are returned as-is without retries.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl Default for MarketplaceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketplaceClient {
    pub fn new() -> Self {
        Self::with_endpoint(EXTENSION_QUERY_API)
    }

    /// Client talking to another endpoint, e.g. a local test server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &MarketplaceConfig) -> Self {
        Self::with_endpoint(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one extension query and return the first result set.
    pub async fn query(
        &self,
        options: ExtensionQueryOptions,
    ) -> Result<Vec<ExtensionQueryResult>, MarketplaceError> {
        let body = build_request_body(&options);

        log::debug!(
            "Querying marketplace page {} (size {}, sort {:?}, {} criteria)",
            options.page_number,
            options.page_size,
            options.sort_by,
            options.criteria.len()
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, ACCEPT_EXTENSION_QUERY)
            .header(CONTENT_TYPE, "application/json")
            // The marketplace rejects some default user agents
            .header(USER_AGENT, "")
            .json(&body)
            .send()
            .await
            .map_err(|e| MarketplaceError::RequestFailed {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let status_text = status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_string();
            log::warn!("Marketplace API responded with {status}");
            return Err(MarketplaceError::Transport {
                status: status.as_u16(),
                status_text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| MarketplaceError::RequestFailed {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let data: ExtensionQueryResponse =
            serde_json::from_str(&text).map_err(|e| MarketplaceError::InvalidResponse {
                expected: "extension query JSON".to_string(),
                actual: e.to_string(),
            })?;

        let extensions = data
            .results
            .into_iter()
            .next()
            .ok_or_else(|| MarketplaceError::InvalidResponse {
                expected: "at least one result set".to_string(),
                actual: "empty results".to_string(),
            })?
            .extensions;

        log::info!("Marketplace query returned {} extensions", extensions.len());
        Ok(extensions)
    }

    /// Recently updated theme extensions, newest first.
    pub async fn query_updated_extensions(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Vec<ExtensionQueryResult>, MarketplaceError> {
        let options = ExtensionQueryOptions {
            page_number,
            page_size,
            sort_by: SortBy::LastUpdated,
            direction: 2,
            criteria: updated_extensions_criteria(),
        };

        self.query(options)
            .await
            .map_err(|source| MarketplaceError::UpdatedExtensionsQuery {
                source: Box::new(source),
            })
    }

    /// Look an extension up by its marketplace id.
    pub async fn query_extension_id(
        &self,
        extension_id: &str,
    ) -> Result<Vec<ExtensionQueryResult>, MarketplaceError> {
        let options = ExtensionQueryOptions {
            direction: 2,
            criteria: vec![Criterion::new(FilterType::ExtensionId, extension_id)],
            ..Default::default()
        };

        self.query(options)
            .await
            .map_err(|source| MarketplaceError::ExtensionIdQuery {
                extension_id: extension_id.to_string(),
                source: Box::new(source),
            })
    }

    /// Look an extension up by its `publisher.extension` slug.
    pub async fn query_extension_slug(
        &self,
        extension_slug: &str,
    ) -> Result<Vec<ExtensionQueryResult>, MarketplaceError> {
        let options = ExtensionQueryOptions {
            direction: 2,
            criteria: vec![Criterion::new(FilterType::ExtensionName, extension_slug)],
            ..Default::default()
        };

        self.query(options)
            .await
            .map_err(|source| MarketplaceError::ExtensionSlugQuery {
                slug: extension_slug.to_string(),
                source: Box::new(source),
            })
    }
}
