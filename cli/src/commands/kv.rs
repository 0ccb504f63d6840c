use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use server::kv::{KvRecord, create_kv_data};
use server::model::{Extension, ThemeTokens};
use server::theme::ThemeValidator;
use server::validation::Validator;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::invalid_input(path.display(), e))
}

/// Read an extension and its rendered themes, validate every theme and
/// build the KV records.
pub fn run(extension_path: &Path, themes_path: &Path) -> AppResult<Vec<KvRecord>> {
    let extension: Extension = read_json(extension_path)?;
    let themes: Vec<ThemeTokens> = read_json(themes_path)?;

    for (index, theme) in themes.iter().enumerate() {
        ThemeValidator.validate(&theme.theme).map_err(|e| {
            AppError::invalid_input(
                format!("{} (theme #{index})", themes_path.display()),
                e.user_message(),
            )
        })?;
    }

    let records = create_kv_data(&extension, &themes)?;
    log::info!(
        "Built {} KV records for {}.{}",
        records.len(),
        extension.publisher_name,
        extension.name
    );
    Ok(records)
}
