//! # Color Query Codec
//!
//! A color query pins one of five well-known workbench slots to a color and
//! travels as compact `type|color` text, e.g. in URLs:
//!
//! ```text
//! editorBackground|#1e1e1e
//! ```
//!
//! Callers fill the slots one by one. [`next`] always hands out the first
//! free slot in the canonical [`ColorQueryType::ALL`] order, no matter in
//! which order earlier slots were filled.
//!
//! ```no_run
//! use server::color_query::{self, ColorQueryType};
//!
//! let query = color_query::parse("statusBarBackground|#007ACC80")?;
//! assert_eq!(query.kind, ColorQueryType::StatusBarBackground);
//! assert_eq!(query.color.as_deref(), Some("#007acc"));
//!
//! let free = color_query::next(&[query]).unwrap();
//! assert_eq!(free.kind, ColorQueryType::EditorBackground);
//! # Ok::<(), server::common::ColorQueryError>(())
//! ```

use crate::color::Color;
use crate::common::errors::ColorQueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use crate::color::is_valid_color;

const SEPARATOR: char = '|';

/// Workbench slot a color query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorQueryType {
    #[serde(rename = "editorBackground")]
    EditorBackground,
    #[serde(rename = "activityBarBackground")]
    ActivityBarBackground,
    #[serde(rename = "statusBarBackground")]
    StatusBarBackground,
    #[serde(rename = "tabActiveBackground")]
    TabActiveBackground,
    #[serde(rename = "titleBarActiveBackground")]
    TitleBarActiveBackground,
}

impl ColorQueryType {
    /// Every slot, in the order [`next`] fills them.
    pub const ALL: [ColorQueryType; 5] = [
        ColorQueryType::EditorBackground,
        ColorQueryType::ActivityBarBackground,
        ColorQueryType::StatusBarBackground,
        ColorQueryType::TabActiveBackground,
        ColorQueryType::TitleBarActiveBackground,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorQueryType::EditorBackground => "editorBackground",
            ColorQueryType::ActivityBarBackground => "activityBarBackground",
            ColorQueryType::StatusBarBackground => "statusBarBackground",
            ColorQueryType::TabActiveBackground => "tabActiveBackground",
            ColorQueryType::TitleBarActiveBackground => "titleBarActiveBackground",
        }
    }
}

impl FromStr for ColorQueryType {
    type Err = ColorQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorQueryType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ColorQueryError::InvalidType {
                kind: s.to_string(),
            })
    }
}

impl fmt::Display for ColorQueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slot paired with an optional color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorQuery {
    #[serde(rename = "type")]
    pub kind: ColorQueryType,
    pub color: Option<String>,
}

impl ColorQuery {
    pub fn new(kind: ColorQueryType, color: impl Into<String>) -> Self {
        Self {
            kind,
            color: Some(color.into()),
        }
    }

    /// A slot with no color yet.
    pub fn empty(kind: ColorQueryType) -> Self {
        Self { kind, color: None }
    }
}

impl fmt::Display for ColorQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}",
            self.kind,
            self.color.as_deref().unwrap_or_default()
        )
    }
}

impl FromStr for ColorQuery {
    type Err = ColorQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse `type|color`. The color is stored opaque, as lowercase hex.
pub fn parse(value: &str) -> Result<ColorQuery, ColorQueryError> {
    let mut parts = value.split(SEPARATOR);
    let kind = parts.next().unwrap_or_default();
    let color = match parts.next() {
        Some(color) if !color.is_empty() => color,
        _ => return Err(ColorQueryError::MissingColor),
    };

    let kind = kind.parse::<ColorQueryType>()?;
    let color = Color::parse(color)?.opaque().to_hex();

    Ok(ColorQuery {
        kind,
        color: Some(color),
    })
}

/// Encode anything that looks like a color query, or return an empty string.
///
/// `value` must be an object carrying both a `type` and a `color` key, and
/// `type` must name a slot. A falsy color (null, `false`, `0`, `""`)
/// encodes as `type|`.
pub fn stringify(value: &Value) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };
    if !object.contains_key("type") || !object.contains_key("color") {
        return String::new();
    }

    let Some(kind) = object
        .get("type")
        .and_then(Value::as_str)
        .and_then(|kind| kind.parse::<ColorQueryType>().ok())
    else {
        return String::new();
    };

    let color = match object.get("color") {
        Some(Value::String(color)) => color.clone(),
        Some(Value::Null | Value::Bool(false)) | None => String::new(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string(),
    };

    format!("{kind}{SEPARATOR}{color}")
}

/// Color of the first query targeting `kind`.
pub fn find(colors: &[ColorQuery], kind: ColorQueryType) -> Option<&str> {
    colors
        .iter()
        .find(|query| query.kind == kind)
        .and_then(|query| query.color.as_deref())
}

/// First slot without a query, in canonical order, or `None` when all are taken.
pub fn next(colors: &[ColorQuery]) -> Option<ColorQuery> {
    ColorQueryType::ALL
        .into_iter()
        .find(|kind| !colors.iter().any(|query| query.kind == *kind))
        .map(ColorQuery::empty)
}

/// Form field name for the query at `index`: `color1`, `color2`, ...
pub fn name(index: usize) -> String {
    format!("color{}", index + 1)
}

pub fn is_valid_color_type(value: &str) -> bool {
    value.parse::<ColorQueryType>().is_ok()
}
