use claims::{assert_err, assert_ok};
use serde_json::{Value, json};
use server::kv::{create_kv_data, kv_key};
use server::model::{Extension, ThemeTokens};
use server::theme::{ThemeValidationError, ThemeValidator};
use server::validation::Validator;

fn extension() -> Extension {
    serde_json::from_value(json!({
        "name": "theme-dracula",
        "displayName": "Dracula Official",
        "publisherId": "pub-1",
        "publisherName": "dracula-theme",
        "publisherDisplayName": "Dracula Theme",
        "installs": 5000000,
        "trendingDaily": 0.5,
        "trendingWeekly": 1.0,
        "trendingMonthly": 2.0,
        "weightedRating": 4.8
    }))
    .unwrap()
}

fn theme_json(slug: &str, background: &str) -> Value {
    json!({
        "path": format!("./themes/{slug}.json"),
        "displayName": slug,
        "slug": slug,
        "activityBarBackground": background,
        "activityBarForeground": "#f8f8f2",
        "editorBackground": background,
        "editorForeground": "#f8f8f2",
        "editorGroupHeaderTabsBackground": background,
        "statusBarBackground": "#191a21",
        "statusBarForeground": "#f8f8f2",
        "statusBarBorder": "#191a21",
        "tabActiveBackground": background,
        "tabActiveForeground": "#f8f8f2",
        "tabBorder": "#191a21",
        "titleBarActiveBackground": "#21222c",
        "titleBarActiveForeground": "#f8f8f2"
    })
}

fn rendered(slug: &str, background: &str, languages: &[&str]) -> ThemeTokens {
    let language_tokens: Vec<Value> = languages
        .iter()
        .map(|language| json!({"language": language, "tokens": [[{"text": slug, "color": background}]]}))
        .collect();

    serde_json::from_value(json!({
        "theme": theme_json(slug, background),
        "languageTokens": language_tokens
    }))
    .unwrap()
}

#[test]
fn test_rendered_themes_become_per_language_records() {
    let extension = extension();
    let themes = vec![
        rendered("dracula", "#282a36", &["javascript", "rust"]),
        rendered("dracula-soft", "#286a36", &["rust", "python"]),
    ];

    for theme in &themes {
        assert_ok!(ThemeValidator.validate(&theme.theme));
    }

    let records = assert_ok!(create_kv_data(&extension, &themes));
    let keys: Vec<&str> = records.iter().map(|record| record.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "dracula-theme.theme-dracula/javascript",
            "dracula-theme.theme-dracula/rust",
            "dracula-theme.theme-dracula/python",
        ]
    );

    let rust: Value = serde_json::from_str(&records[1].value).unwrap();
    assert_eq!(rust["extension"]["name"], "theme-dracula");
    assert_eq!(rust["extension"]["installs"], 5000000);

    let slugs: Vec<&String> = rust["themes"].as_object().unwrap().keys().collect();
    assert_eq!(slugs, vec!["dracula", "dracula-soft"]);
    assert_eq!(rust["themes"]["dracula-soft"]["theme"]["editorBackground"], "#286a36");
    assert_eq!(
        rust["themes"]["dracula-soft"]["tokens"][0][0]["text"],
        "dracula-soft"
    );

    let javascript: Value = serde_json::from_str(&records[0].value).unwrap();
    assert_eq!(javascript["themes"].as_object().unwrap().len(), 1);
}

#[test]
fn test_kv_key_format() {
    assert_eq!(
        kv_key(&extension(), "typescript"),
        "dracula-theme.theme-dracula/typescript"
    );
}

#[test]
fn test_invalid_theme_color_is_reported() {
    let mut theme = rendered("broken", "#282a36", &["javascript"]).theme;
    theme.status_bar_border = Some("blue".to_string());

    let error = assert_err!(ThemeValidator.validate(&theme));
    assert_eq!(
        error,
        ThemeValidationError::InvalidColor {
            field: "statusBarBorder".to_string(),
            value: "blue".to_string(),
        }
    );
    assert!(error.user_message().contains("statusBarBorder"));
}
