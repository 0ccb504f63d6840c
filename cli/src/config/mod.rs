use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod limits;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `VSCODETHEMES__MARKETPLACE__PAGE_SIZE=50`
pub const ENV_PREFIX: &str = "VSCODETHEMES";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Config files in the order they are layered; later files override earlier ones.
///
/// `config.toml` in the working directory comes first, then the user config
/// under `<config_dir>/vscodethemes/`.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("vscodethemes").join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Load and validate configuration from `files` (all optional) plus the environment.
pub fn load_config_from(files: &[impl AsRef<Path>]) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    for file in files {
        builder = builder.add_source(File::from(file.as_ref()).required(false));
    }

    // environment entries override file values when present
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

fn load_config() -> ConfigLoadResult {
    load_config_from(&config_file_candidates())
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
