use crate::color::Color;
use crate::model::Theme;
use crate::validation::Validator;

/// Validation errors specific to theme records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    MissingMetadata { field: String },
    InvalidColor { field: String, value: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Please ensure the theme record contains all required metadata fields."
                )
            }
            ThemeValidationError::InvalidColor { field, value } => {
                format!(
                    "Invalid theme color for '{field}': '{value}'\n\n\
                    Expected a hex color such as '#1e1e1e' or '#1e1e1e80'."
                )
            }
        }
    }
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValidationError::MissingMetadata { field } => {
                write!(f, "Missing theme metadata: {field}")
            }
            ThemeValidationError::InvalidColor { field, value } => {
                write!(f, "Invalid theme color for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ThemeValidationError {}

/// Validator for a single hex color value (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
pub struct HexColorValidator;

impl Validator<str> for HexColorValidator {
    type Error = ();

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if !input.starts_with('#') || input.trim() != input {
            return Err(());
        }
        Color::parse(input).map(|_| ()).map_err(|_| ())
    }
}

/// Validator for theme records
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        if input.slug.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "slug".to_string(),
            });
        }

        // Display name can contain anything, it only has to be present
        if input.display_name.trim().is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "displayName".to_string(),
            });
        }

        let required = input
            .required_colors()
            .into_iter()
            .map(|(field, value)| (field, Some(value)));
        let optional = input.optional_colors().into_iter().filter(|(_, value)| value.is_some());

        for (field, value) in required.chain(optional) {
            let value = value.unwrap_or_default();
            if HexColorValidator.validate(value).is_err() {
                return Err(ThemeValidationError::InvalidColor {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}
