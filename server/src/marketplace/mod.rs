//! # Marketplace Client
//!
//! Queries the public Visual Studio Marketplace for theme extensions.
//!
//! [`MarketplaceClient::query`] sends one POST built from
//! [`ExtensionQueryOptions`]; the canned queries fill in the criteria for
//! the three lookups the crawler needs:
//!
//! - [`MarketplaceClient::query_updated_extensions`] - theme extensions by last update
//! - [`MarketplaceClient::query_extension_id`] - one extension by id
//! - [`MarketplaceClient::query_extension_slug`] - one extension by `publisher.name`
//!
//! ```no_run
//! use server::marketplace::MarketplaceClient;
//! use server::model::Extension;
//!
//! # async fn run() -> Result<(), server::common::MarketplaceError> {
//! let client = MarketplaceClient::new();
//! for result in client.query_updated_extensions(1, 50).await? {
//!     let extension = Extension::from(&result);
//!     println!("{}.{}", extension.publisher_name, extension.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{EXTENSION_QUERY_API, MarketplaceClient, build_request_body};
pub use types::{
    Criterion, ExtensionQueryOptions, ExtensionQueryRequest, ExtensionQueryResult, FilterType,
    QueryFilter, SortBy,
};

use serde::Deserialize;

/// Marketplace settings read from the application config.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct MarketplaceConfig {
    /// Extension query endpoint (default: the public marketplace)
    endpoint: Option<String>,
    /// Page size for listing queries (default: 100)
    page_size: Option<u32>,
}

impl MarketplaceConfig {
    pub fn new(endpoint: Option<String>, page_size: Option<u32>) -> Self {
        Self {
            endpoint,
            page_size,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(EXTENSION_QUERY_API)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(100)
    }
}
