use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use serde::Deserialize;
use server::marketplace::MarketplaceConfig;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    marketplace: MarketplaceConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let page_size = self.marketplace.page_size();
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            errors.push(ConfigValidationError::PageSize {
                configured: page_size,
                min_limit: MIN_PAGE_SIZE,
                max_limit: MAX_PAGE_SIZE,
            });
        }

        let endpoint = self.marketplace.endpoint();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            errors.push(ConfigValidationError::Endpoint {
                configured: endpoint.to_string(),
            });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn marketplace(&self) -> &MarketplaceConfig {
        &self.marketplace
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn page_size(&self) -> u32 {
        self.marketplace.page_size()
    }
}
