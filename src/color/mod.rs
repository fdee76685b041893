//! Color capability
//!
//! The palette machinery never does color science itself. It talks to colors
//! through [`ColorModel`]: build from hue/saturation/lightness channels, read
//! them back, and measure relative luminance. Contrast ratios follow from
//! luminance with the WCAG 2.x formula.
//!
//! [`Color`] is the implementation used by the CLI. It holds sRGB HSL
//! channels and leaves conversions to the `palette` crate and CSS parsing to
//! `csscolorparser`.

use palette::{FromColor, Hsl, IntoColor, LinSrgb, Oklch, Srgb};
use serde::{Deserialize, Serialize};

use crate::{Result, ShadeError};

/// Hue (degrees, `[0, 360)`), saturation and lightness (both `[0, 1]`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Channels {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Channels {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// What the shade search needs from a color type
pub trait ColorModel: Clone + std::fmt::Debug + Send + Sync {
    /// Build a color from channel values, normalizing out-of-range input
    fn from_channels(channels: Channels) -> Self;

    fn channels(&self) -> Channels;

    /// WCAG relative luminance in `[0, 1]`
    fn relative_luminance(&self) -> f64;

    /// Lowercase `#rrggbb`
    fn to_hex(&self) -> String;

    /// WCAG contrast ratio against another color, always `>= 1`
    fn contrast_with(&self, other: &Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Contrast against pure black, in `[1, 21]`
    fn contrast_against_black(&self) -> f64 {
        (self.relative_luminance() + 0.05) / 0.05
    }

    /// Contrast against pure white, in `[1, 21]`
    fn contrast_against_white(&self) -> f64 {
        1.05 / (self.relative_luminance() + 0.05)
    }
}

/// An sRGB color stored as HSL channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    channels: Channels,
}

impl Color {
    pub fn black() -> Self {
        Self::from_channels(Channels::new(0.0, 0.0, 0.0))
    }

    pub fn white() -> Self {
        Self::from_channels(Channels::new(0.0, 0.0, 1.0))
    }

    /// Parse any CSS color string: named colors, hex, `rgb()`, `hsl()`, ...
    ///
    /// Alpha is dropped.
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(value).map_err(|e| ShadeError::InvalidColor {
            input: value.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_srgb(Srgb::new(
            parsed.r as f64,
            parsed.g as f64,
            parsed.b as f64,
        )))
    }

    pub fn from_srgb(color: Srgb<f64>) -> Self {
        let hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(color);
        Self::from_channels(Channels::new(
            hsl.hue.into_positive_degrees(),
            hsl.saturation,
            hsl.lightness,
        ))
    }

    pub fn hue(&self) -> f64 {
        self.channels.hue
    }

    pub fn saturation(&self) -> f64 {
        self.channels.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.channels.lightness
    }

    /// Same hue and saturation, different lightness
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Self::from_channels(Channels {
            lightness,
            ..self.channels
        })
    }

    pub fn to_srgb(&self) -> Srgb<f64> {
        let hsl = Hsl::<palette::encoding::Srgb, f64>::new(
            self.channels.hue,
            self.channels.saturation,
            self.channels.lightness,
        );
        Srgb::<f64>::from_color(hsl)
    }

    pub fn to_oklch(&self) -> Oklch<f64> {
        let lin: LinSrgb<f64> = self.to_srgb().into_linear();
        lin.into_color()
    }
}

impl ColorModel for Color {
    fn from_channels(channels: Channels) -> Self {
        Self {
            channels: Channels {
                hue: normalize_hue(channels.hue),
                saturation: clamp_unit(channels.saturation),
                lightness: clamp_unit(channels.lightness),
            },
        }
    }

    fn channels(&self) -> Channels {
        self.channels
    }

    fn relative_luminance(&self) -> f64 {
        let lin: LinSrgb<f64> = self.to_srgb().into_linear();
        0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
    }

    fn to_hex(&self) -> String {
        srgb_to_hex(&self.to_srgb())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

// =============================================================================
// Channel Utilities
// =============================================================================

/// Wrap a hue in degrees into `[0, 360)`
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert Srgb<f64> to hex string.
fn srgb_to_hex(color: &Srgb<f64>) -> String {
    let r = (color.red.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (color.green.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (color.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
