//! # KV Record Builder
//!
//! Reshapes one extension and its rendered themes into flat key-value pairs,
//! one per language, ready to be written to a key-value store:
//!
//! ```text
//! key:   dracula-theme.theme-dracula/javascript
//! value: {"extension": {...}, "themes": {"dracula": {"theme": {...}, "tokens": [...]}}}
//! ```

use crate::common::errors::KvError;
use crate::model::{Extension, Theme, ThemeTokens};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// One key-value pair; `value` is a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvRecord {
    pub key: String,
    pub value: String,
}

#[derive(Serialize)]
struct ThemeEntry<'a> {
    theme: &'a Theme,
    tokens: &'a Value,
}

#[derive(Serialize)]
struct KvValue<'a> {
    extension: &'a Extension,
    themes: &'a BTreeMap<&'a str, ThemeEntry<'a>>,
}

/// `publisher.extension/language`
pub fn kv_key(extension: &Extension, language: &str) -> String {
    format!("{}.{}/{}", extension.publisher_name, extension.name, language)
}

/// One record per language found across `themes`, in first-seen order.
///
/// Within a language, themes are keyed by slug; a later theme with the same
/// slug replaces an earlier one. The `themes` object of each value lists
/// slugs in sorted order, not in input order.
pub fn create_kv_data(
    extension: &Extension,
    themes: &[ThemeTokens],
) -> Result<Vec<KvRecord>, KvError> {
    let mut languages: Vec<&str> = Vec::new();
    let mut themes_by_language: HashMap<&str, BTreeMap<&str, ThemeEntry<'_>>> = HashMap::new();

    for ThemeTokens {
        theme,
        language_tokens,
    } in themes
    {
        for language_tokens in language_tokens {
            let language = language_tokens.language.as_str();
            let themes_by_slug = themes_by_language.entry(language).or_insert_with(|| {
                languages.push(language);
                BTreeMap::new()
            });
            themes_by_slug.insert(
                theme.slug.as_str(),
                ThemeEntry {
                    theme,
                    tokens: &language_tokens.tokens,
                },
            );
        }
    }

    languages
        .into_iter()
        .map(|language| {
            let key = kv_key(extension, language);
            let value = serde_json::to_string(&KvValue {
                extension,
                themes: &themes_by_language[language],
            })
            .map_err(|source| KvError::Serialize {
                key: key.clone(),
                source,
            })?;
            Ok(KvRecord { key, value })
        })
        .collect()
}
