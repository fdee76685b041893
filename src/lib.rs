/*!
shadescale - contrast-scaled color palettes

Derives a sequence of shades from a single base color so that every shade's
contrast ratio against black lands on a predictable numeric scale: shade 0 is
black, shade 200 is white, and a difference of 100 between two shades always
means a contrast factor of about 4.5.

# Architecture

```text
base color + ChannelAnchors ──► manipulate::assemble ──► ChannelManipulator
                                                              │
shade indices ──► shade::shade_to_contrast ──► targets ──► search::suggest_shades
                                                              │
                                                              ▼
                                                         Vec<Color>
```

- [`interpolate`] - monotone cubic (Fritsch-Carlson) interpolant
- [`shade`] - shade index ↔ contrast ratio scale and shade-list helpers
- [`color`] - the [`ColorModel`] capability and an HSL [`Color`]
- [`manipulate`] - per-channel hue/saturation curves indexed by lightness
- [`search`] - bisection that resolves target contrasts to colors
- [`generate`] - end-to-end palette generation
- [`config`] - TOML configuration

# Example

```
use shadescale::{assemble, shade_to_contrast, suggest_shades, ChannelAnchors, Color, ColorModel, SearchConfig};

let base = Color::parse("#3366cc").unwrap();
let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
let targets: Vec<f64> = [50.0, 100.0, 150.0].iter().map(|&s| shade_to_contrast(s)).collect();
let colors = suggest_shades(&manipulator, &targets, &SearchConfig::default()).unwrap();
assert_eq!(colors.len(), 3);
assert!((colors[1].contrast_against_black() - targets[1]).abs() < 1e-3);
```
*/

pub mod color;
pub mod config;
pub mod generate;
pub mod interpolate;
pub mod manipulate;
pub mod search;
pub mod shade;

pub use color::{Channels, Color, ColorModel};
pub use config::PaletteConfig;
pub use generate::{generate_palette, PaletteRequest, Swatch};
pub use interpolate::{build_interpolant, Interpolant};
pub use manipulate::{assemble, ChannelAnchors, ChannelManipulator, Manipulation};
pub use search::{suggest_shade, suggest_shades, SearchConfig};
pub use shade::{contrast_to_shade, shade_to_contrast};

#[cfg(feature = "parallel")]
pub use search::par_suggest_shades;

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors produced by palette construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShadeError {
    /// Interpolant sample sequences had different lengths
    #[error("Need an equal count of xs and ys (got {xs} xs and {ys} ys)")]
    LengthMismatch { xs: usize, ys: usize },

    /// Bisection ran out of iterations before reaching the tolerance
    #[error(
        "Search for contrast {target} did not converge after {iterations} iterations (closest: {closest})"
    )]
    SearchNotConverged {
        target: f64,
        iterations: usize,
        closest: f64,
    },

    /// The target lies outside the contrast range spanned by the search domain
    #[error("Contrast {target} is unreachable: the search domain spans {min} to {max}")]
    UnreachableTarget { target: f64, min: f64, max: f64 },

    #[error("Invalid color '{input}': {message}")]
    InvalidColor { input: String, message: String },

    #[error("Invalid shade list: {0}")]
    InvalidShades(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, ShadeError>;
