use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid page_size: {configured} (min: {min_limit}, max: {max_limit})")]
    PageSize {
        configured: u32,
        min_limit: u32,
        max_limit: u32,
    },
    #[error("Invalid marketplace endpoint: '{configured}'")]
    Endpoint { configured: String },
    #[error("Invalid logging level: '{configured}'")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::PageSize {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Page size out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update [marketplace] page_size in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::Endpoint { configured } => {
                format!(
                    "Marketplace endpoint is not an HTTP URL!\n\n\
                    Your configured value: '{configured}'\n\n\
                    Please update [marketplace] endpoint in config.toml to an http:// or https:// URL."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown logging level!\n\n\
                    Your configured value: '{configured}'\n\
                    Valid levels: trace, debug, info, warn, error\n\n\
                    Please update [logging] level in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
