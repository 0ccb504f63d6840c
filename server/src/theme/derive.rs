//! Semantic UI colors derived from a single base color.
//!
//! Each rule reads the base color as HSL, pins or caps saturation and
//! lightness, keeps the hue, and writes an opaque `#rrggbb` string. The
//! `adjust_*` functions expose the rules on [`Hsl`] values directly.

use super::Appearance;
use crate::color::{Color, Hsl};
use crate::common::errors::ColorError;
use serde::Serialize;

/// Minimum lightness distance between a dark background and its base color.
const MIN_BACKGROUND_CONTRAST: f32 = 5.0;

pub fn adjust_primary(hsl: Hsl, appearance: Appearance) -> Hsl {
    // Same lightness in both modes.
    let l = match appearance {
        Appearance::Dark => 35.0,
        Appearance::Light => 35.0,
    };
    Hsl { l, ..hsl }
}

pub fn adjust_muted_foreground(hsl: Hsl, appearance: Appearance) -> Hsl {
    let l = match appearance {
        Appearance::Dark => 35.0,
        Appearance::Light => 70.0,
    };
    Hsl {
        s: hsl.s.min(30.0),
        l,
        ..hsl
    }
}

pub fn adjust_muted_border(hsl: Hsl, appearance: Appearance) -> Hsl {
    let l = match appearance {
        Appearance::Dark => 15.0,
        Appearance::Light => 60.0,
    };
    Hsl { l, ..hsl }
}

pub fn adjust_border(hsl: Hsl, appearance: Appearance) -> Hsl {
    // Same lightness in both modes.
    let l = match appearance {
        Appearance::Dark => 35.0,
        Appearance::Light => 35.0,
    };
    Hsl { l, ..hsl }
}

pub fn adjust_background_active(hsl: Hsl, appearance: Appearance) -> Hsl {
    let l = match appearance {
        Appearance::Dark => hsl.l.min(9.0),
        Appearance::Light => hsl.l.max(90.0),
    };
    Hsl {
        s: hsl.s.min(60.0),
        l,
        ..hsl
    }
}

pub fn adjust_background(hsl: Hsl, appearance: Appearance) -> Hsl {
    let l = match appearance {
        Appearance::Dark => {
            let clamped = hsl.l.min(7.0);
            let delta = hsl.l - clamped;
            if delta < MIN_BACKGROUND_CONTRAST {
                // Keep darkening until the background sits far enough below its base.
                (clamped - (MIN_BACKGROUND_CONTRAST - delta)).max(0.0)
            } else {
                clamped
            }
        }
        Appearance::Light => hsl.l.max(95.0),
    };
    Hsl {
        s: hsl.s.min(30.0),
        l,
        ..hsl
    }
}

fn derive_hex(color: &Color, appearance: Appearance, rule: fn(Hsl, Appearance) -> Hsl) -> String {
    Color::from_hsl(rule(color.to_hsl(), appearance)).to_hex()
}

/// Accent color for buttons and links.
pub fn primary_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_primary)
}

/// Low-emphasis text.
pub fn muted_foreground_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_muted_foreground)
}

/// Hairline separators.
pub fn muted_border_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_muted_border)
}

pub fn border_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_border)
}

/// Background of hovered or selected items.
pub fn background_active_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_background_active)
}

/// Page background.
pub fn background_color(color: &Color, appearance: Appearance) -> String {
    derive_hex(color, appearance, adjust_background)
}

/// All derived colors for one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedColors {
    pub primary: String,
    pub muted_foreground: String,
    pub muted_border: String,
    pub border: String,
    pub background_active: String,
    pub background: String,
}

impl DerivedColors {
    pub fn from_color(color: &Color, appearance: Appearance) -> Self {
        Self {
            primary: primary_color(color, appearance),
            muted_foreground: muted_foreground_color(color, appearance),
            muted_border: muted_border_color(color, appearance),
            border: border_color(color, appearance),
            background_active: background_active_color(color, appearance),
            background: background_color(color, appearance),
        }
    }

    /// Parse `base` and derive every color from it.
    pub fn derive(base: &str, appearance: Appearance) -> Result<Self, ColorError> {
        let color = Color::parse(base)?;
        Ok(Self::from_color(&color, appearance))
    }
}
