//! # Color Model Adapter
//!
//! Thin wrapper around the [`palette`] crate that speaks the color formats
//! theme metadata is written in. A [`Color`] is parsed from CSS-like text,
//! converted to HSL for derivation arithmetic or to CIE L*a*b* for
//! perceptual comparisons, and written back out as lowercase hex.
//!
//! HSL components read from a color are rounded to whole degrees and whole
//! percentages so derived colors are stable across platforms.
//!
//! ```no_run
//! use server::color::{Color, Hsl};
//!
//! let base = Color::parse("#3b82f6")?;
//! let Hsl { h, s, .. } = base.to_hsl();
//! let darker = Color::from_hsl(Hsl { h, s, l: 20.0 });
//! println!("{}", darker.to_hex());
//! # Ok::<(), server::common::ColorError>(())
//! ```

mod parse;

use crate::common::errors::ColorError;
use palette::{FromColor, Hsl as PaletteHsl, Lab, Mix, Srgb};
use std::fmt;
use std::str::FromStr;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: Srgb<f32>,
    alpha: f32,
}

impl Color {
    /// Parse hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`,
    /// `hsl()`/`hsla()` or a CSS color name.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse::parse_color(input).ok_or_else(|| ColorError::InvalidColor {
            input: input.to_string(),
        })
    }

    /// Build from 8-bit channels.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            rgb: Srgb::new(red, green, blue).into_format(),
            alpha: f32::from(alpha) / 255.0,
        }
    }

    pub(crate) fn from_unit_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            rgb: Srgb::new(
                red.clamp(0.0, 1.0),
                green.clamp(0.0, 1.0),
                blue.clamp(0.0, 1.0),
            ),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Build an opaque color from HSL. Saturation and lightness are clamped
    /// to `0..=100` and hue wraps around 360.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hue = if hsl.h.is_finite() {
            hsl.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let hsl: PaletteHsl = PaletteHsl::new(
            hue,
            hsl.s.clamp(0.0, 100.0) / 100.0,
            hsl.l.clamp(0.0, 100.0) / 100.0,
        );

        Self {
            rgb: Srgb::from_color(hsl),
            alpha: 1.0,
        }
    }

    /// Convert to HSL, rounded to whole degrees and percentages.
    pub fn to_hsl(&self) -> Hsl {
        let hsl: PaletteHsl = PaletteHsl::from_color(self.rgb);

        Hsl {
            h: hsl.hue.into_positive_degrees().round(),
            s: (hsl.saturation * 100.0).round(),
            l: (hsl.lightness * 100.0).round(),
        }
    }

    /// CIE L*a*b* (D65) components rounded to integers.
    pub fn to_lab(&self) -> [i32; 3] {
        let lab: Lab = Lab::from_color(self.rgb);
        [
            lab.l.round() as i32,
            lab.a.round() as i32,
            lab.b.round() as i32,
        ]
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color, fully opaque.
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            to_channel(self.rgb.red),
            to_channel(self.rgb.green),
            to_channel(self.rgb.blue),
            to_channel(self.alpha),
        ]
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Mix with `other` in L*a*b* space. `ratio` 0 keeps `self`, 1 gives `other`.
    pub fn mix(&self, other: &Color, ratio: f32) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let from: Lab = Lab::from_color(self.rgb);
        let to: Lab = Lab::from_color(other.rgb);

        Self {
            rgb: Srgb::from_color(from.mix(to, ratio)),
            alpha: self.alpha + (other.alpha - self.alpha) * ratio,
        }
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// True when `input` parses as a color. Never fails.
pub fn is_valid_color(input: &str) -> bool {
    Color::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::parse("#1E1E1E").unwrap();
        assert_eq!(color.to_hex(), "#1e1e1e");

        let short = Color::parse("#fff").unwrap();
        assert_eq!(short.to_hex(), "#ffffff");
    }

    #[test]
    fn test_alpha_is_kept_until_stripped() {
        let color = Color::parse("#ff000080").unwrap();
        assert_eq!(color.to_hex(), "#ff000080");
        assert_eq!(color.opaque().to_hex(), "#ff0000");
    }

    #[test]
    fn test_to_hsl_rounds_components() {
        let hsl = Color::parse("#3b82f6").unwrap().to_hsl();
        assert_eq!(hsl, Hsl { h: 217.0, s: 91.0, l: 60.0 });

        let grey = Color::parse("#808080").unwrap().to_hsl();
        assert_eq!(grey.s, 0.0);
        assert_eq!(grey.l, 50.0);
    }

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Color::from_hsl(Hsl { h: 0.0, s: 100.0, l: 50.0 }).to_hex(), "#ff0000");
        assert_eq!(Color::from_hsl(Hsl { h: 120.0, s: 100.0, l: 50.0 }).to_hex(), "#00ff00");
        assert_eq!(Color::from_hsl(Hsl { h: 240.0, s: 100.0, l: 50.0 }).to_hex(), "#0000ff");
    }

    #[test]
    fn test_from_hsl_clamps_and_wraps() {
        let wrapped = Color::from_hsl(Hsl { h: 480.0, s: 100.0, l: 50.0 });
        assert_eq!(wrapped.to_hex(), "#00ff00");

        let clamped = Color::from_hsl(Hsl { h: 0.0, s: 150.0, l: -10.0 });
        assert_eq!(clamped.to_hex(), "#000000");
    }

    #[test]
    fn test_to_lab() {
        assert_eq!(Color::parse("#ffffff").unwrap().to_lab(), [100, 0, 0]);
        assert_eq!(Color::parse("#000000").unwrap().to_lab(), [0, 0, 0]);

        let [l, a, b] = Color::parse("#ff0000").unwrap().to_lab();
        assert_eq!(l, 53);
        assert!((79..=81).contains(&a));
        assert!((66..=68).contains(&b));
    }

    #[test]
    fn test_mix_endpoints() {
        let black = Color::parse("#000000").unwrap();
        let white = Color::parse("#ffffff").unwrap();

        assert_eq!(black.mix(&white, 0.0).to_hex(), "#000000");
        assert_eq!(black.mix(&white, 1.0).to_hex(), "#ffffff");

        let [r, g, b, _] = black.mix(&white, 0.5).to_rgba8();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!(r > 100 && r < 140);
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#abc"));
        assert!(is_valid_color("rebeccapurple"));
        assert!(!is_valid_color("#abcde"));
        assert!(!is_valid_color(""));
    }
}
