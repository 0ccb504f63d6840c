//! # Theme Module
//!
//! Color derivation and validation for editor theme metadata.
//!
//! - [`derive`] computes the semantic colors (primary, muted foreground,
//!   muted border, border, active background, background) a theme page is
//!   painted with, from one base color and an [`Appearance`].
//! - [`validation`] checks that a [`Theme`](crate::model::Theme) record only
//!   holds hex colors before it is stored.
//!
//! ```no_run
//! use server::theme::{Appearance, DerivedColors};
//!
//! let colors = DerivedColors::derive("#282a36", Appearance::Dark)?;
//! println!("background: {}", colors.background);
//! # Ok::<(), server::common::ColorError>(())
//! ```

pub mod derive;
pub mod validation;

pub use derive::{
    DerivedColors, background_active_color, background_color, border_color,
    muted_border_color, muted_foreground_color, primary_color,
};
pub use validation::{ThemeValidationError, ThemeValidator};

use serde::{Deserialize, Serialize};

/// Whether colors are derived for a dark or a light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}
