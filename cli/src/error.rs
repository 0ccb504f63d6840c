use server::common::{ColorError, ColorQueryError, KvError, MarketplaceError};
use std::fmt::Display;

/// Errors surfaced by the command line front end.
///
/// Library errors are converted with `From`, so command handlers can use `?`
/// on any `server` call. `main` reports the error and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Color(#[from] ColorError),

    #[error("{0}")]
    ColorQuery(#[from] ColorQueryError),

    #[error("{0}")]
    Marketplace(#[from] MarketplaceError),

    #[error("{0}")]
    Kv(#[from] KvError),

    #[error("Invalid input in {source_name}: {reason}")]
    InvalidInput { source_name: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl AppError {
    pub fn invalid_input(source_name: impl Display, reason: impl Display) -> Self {
        AppError::InvalidInput {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for CLI operations
pub type AppResult<T> = Result<T, AppError>;
