use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marketplace metadata for one extension, flattened for storage.
///
/// Produced from a marketplace query result (see
/// [`ExtensionQueryResult`](crate::marketplace::ExtensionQueryResult)) and
/// otherwise carried through untouched.
///
/// # Examples
///
/// ```no_run
/// use server::model::Extension;
///
/// let extension: Extension = serde_json::from_str(r#"{
///     "name": "theme-dracula",
///     "displayName": "Dracula Official",
///     "publisherId": "a1b2",
///     "publisherName": "dracula-theme",
///     "publisherDisplayName": "Dracula Theme",
///     "installs": 5000000,
///     "trendingDaily": 0.1,
///     "trendingWeekly": 0.5,
///     "trendingMonthly": 1.2,
///     "weightedRating": 4.8
/// }"#)?;
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Extension name, unique within its publisher
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub publisher_id: String,
    /// Publisher name, the first half of the `publisher.extension` slug
    pub publisher_name: String,
    pub publisher_display_name: String,
    pub installs: u64,
    pub trending_daily: f64,
    pub trending_weekly: f64,
    pub trending_monthly: f64,
    pub weighted_rating: f64,
}

/// Workbench colors of one theme contributed by an extension.
///
/// Optional slots are the borders a theme may leave unset. Every other color
/// slot is expected to hold a hex color; see
/// [`ThemeValidator`](crate::theme::ThemeValidator).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Path of the theme file inside the extension package
    pub path: String,
    pub display_name: String,
    /// URL-safe identifier, unique within an extension
    pub slug: String,

    // === Activity Bar ===
    pub activity_bar_background: String,
    pub activity_bar_border: Option<String>,
    pub activity_bar_foreground: String,

    // === Editor ===
    pub editor_background: String,
    pub editor_foreground: String,
    pub editor_group_header_tabs_background: String,
    pub editor_group_header_tabs_border: Option<String>,

    // === Status Bar ===
    pub status_bar_background: String,
    pub status_bar_foreground: String,
    pub status_bar_border: Option<String>,

    // === Tabs ===
    pub tab_active_background: String,
    pub tab_active_border: Option<String>,
    pub tab_active_foreground: String,
    pub tab_border: String,

    // === Title Bar ===
    pub title_bar_active_background: String,
    pub title_bar_active_foreground: String,
    pub title_bar_border: Option<String>,
}

impl Theme {
    /// Required color slots as `(field name, value)` pairs.
    pub fn required_colors(&self) -> [(&'static str, &str); 12] {
        [
            ("activityBarBackground", self.activity_bar_background.as_str()),
            ("activityBarForeground", self.activity_bar_foreground.as_str()),
            ("editorBackground", self.editor_background.as_str()),
            ("editorForeground", self.editor_foreground.as_str()),
            (
                "editorGroupHeaderTabsBackground",
                self.editor_group_header_tabs_background.as_str(),
            ),
            ("statusBarBackground", self.status_bar_background.as_str()),
            ("statusBarForeground", self.status_bar_foreground.as_str()),
            ("tabActiveBackground", self.tab_active_background.as_str()),
            ("tabActiveForeground", self.tab_active_foreground.as_str()),
            ("tabBorder", self.tab_border.as_str()),
            ("titleBarActiveBackground", self.title_bar_active_background.as_str()),
            ("titleBarActiveForeground", self.title_bar_active_foreground.as_str()),
        ]
    }

    /// Optional border slots as `(field name, value)` pairs.
    pub fn optional_colors(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("activityBarBorder", self.activity_bar_border.as_deref()),
            (
                "editorGroupHeaderTabsBorder",
                self.editor_group_header_tabs_border.as_deref(),
            ),
            ("statusBarBorder", self.status_bar_border.as_deref()),
            ("tabActiveBorder", self.tab_active_border.as_deref()),
            ("titleBarBorder", self.title_bar_border.as_deref()),
        ]
    }
}

/// Tokenized sample code for one language, rendered with a theme.
///
/// `tokens` is opaque to this crate and stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageTokens {
    pub language: String,
    pub tokens: Value,
}

/// A theme together with its per-language token samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub theme: Theme,
    pub language_tokens: Vec<LanguageTokens>,
}
