//! Palette generation
//!
//! Runs the whole pipeline for one base color: assemble the manipulator,
//! turn shade indices into contrast targets, search each target, and label
//! the results as [`Swatch`]es.

use serde::Serialize;
use tracing::debug;

use crate::color::{Color, ColorModel};
use crate::manipulate::{assemble, ChannelAnchors};
use crate::search::{suggest_shades, SearchConfig};
use crate::shade::{contrast_to_shade, default_shades, shade_to_contrast};
use crate::Result;

/// Everything needed to build one palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRequest {
    pub base: Color,
    /// Shade indices, rendered in this order
    pub shades: Vec<i32>,
    pub anchors: ChannelAnchors,
    pub search: SearchConfig,
}

impl PaletteRequest {
    /// Request the default shade list, which includes the base color's own shade
    pub fn new(base: Color) -> Self {
        Self {
            shades: default_shades(base_shade(&base)),
            base,
            anchors: ChannelAnchors::default(),
            search: SearchConfig::default(),
        }
    }

    pub fn with_shades(mut self, shades: Vec<i32>) -> Self {
        self.shades = shades;
        self
    }

    pub fn with_anchors(mut self, anchors: ChannelAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// One resolved palette entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub shade: i32,
    /// Contrast the shade asked for
    pub target: f64,
    /// Contrast the resolved color measures against black
    pub contrast: f64,
    pub hex: String,
    pub color: Color,
    /// Whether this is the base color's own shade
    pub is_base: bool,
}

/// The base color's position on the shade scale, rounded to an integer
pub fn base_shade<C: ColorModel>(color: &C) -> i32 {
    contrast_to_shade(color.contrast_against_black()).round() as i32
}

/// Resolve every requested shade. Output follows `request.shades` order.
pub fn generate_palette(request: &PaletteRequest) -> Result<Vec<Swatch>> {
    let manipulator = assemble(&request.base, &request.anchors)?;
    let targets: Vec<f64> = request
        .shades
        .iter()
        .map(|&shade| shade_to_contrast(shade as f64))
        .collect();
    let colors = suggest_shades(&manipulator, &targets, &request.search)?;

    let own_shade = base_shade(&request.base);
    debug!(
        "Generated {} shade(s) for {} (shade {})",
        colors.len(),
        request.base,
        own_shade
    );

    Ok(request
        .shades
        .iter()
        .zip(targets)
        .zip(colors)
        .map(|((&shade, target), color)| Swatch {
            shade,
            target,
            contrast: color.contrast_against_black(),
            hex: color.to_hex(),
            color,
            is_base: shade == own_shade,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade::DEFAULT_SHADES;
    use crate::ShadeError;

    #[test]
    fn test_base_shade_references() {
        assert_eq!(base_shade(&Color::black()), 0);
        assert_eq!(base_shade(&Color::white()), 200);
    }

    #[test]
    fn test_default_request_includes_base_shade() {
        let base = Color::parse("#3366cc").unwrap();
        let own = base_shade(&base);
        let request = PaletteRequest::new(base);
        assert!(request.shades.contains(&own));
        assert!(request.shades.len() >= DEFAULT_SHADES.len());
    }

    #[test]
    fn test_generate_default_palette() {
        let base = Color::parse("#3366cc").unwrap();
        let swatches = generate_palette(&PaletteRequest::new(base)).unwrap();

        assert_eq!(swatches.iter().filter(|s| s.is_base).count(), 1);
        for swatch in &swatches {
            assert!((swatch.contrast - swatch.target).abs() < 1e-3);
            assert_eq!(swatch.hex, swatch.color.to_hex());
        }
        for pair in swatches.windows(2) {
            assert!(pair[0].shade < pair[1].shade);
            assert!(pair[0].contrast < pair[1].contrast);
        }
    }

    #[test]
    fn test_generate_keeps_requested_order() {
        let base = Color::parse("seagreen").unwrap();
        let request = PaletteRequest::new(base).with_shades(vec![150, 10, 100]);
        let swatches = generate_palette(&request).unwrap();
        let shades: Vec<i32> = swatches.iter().map(|s| s.shade).collect();
        assert_eq!(shades, vec![150, 10, 100]);
        assert!(swatches[0].contrast > swatches[2].contrast);
        assert!(swatches[2].contrast > swatches[1].contrast);
    }

    #[test]
    fn test_out_of_scale_shade_is_unreachable() {
        let base = Color::parse("#3366cc").unwrap();
        let request = PaletteRequest::new(base).with_shades(vec![50, 250]);
        assert!(matches!(
            generate_palette(&request),
            Err(ShadeError::UnreachableTarget { .. })
        ));
    }

    #[test]
    fn test_anchors_shift_hue_of_dark_shades() {
        let base = Color::parse("#3366cc").unwrap();
        let anchors = ChannelAnchors {
            hue_start: Some(260.0),
            ..Default::default()
        };
        let request = PaletteRequest::new(base)
            .with_shades(vec![10, 190])
            .with_anchors(anchors);
        let swatches = generate_palette(&request).unwrap();
        assert!(swatches[0].color.hue() > base.hue());
        assert!((swatches[1].color.hue() - base.hue()).abs() < 1e-9);
    }

    #[test]
    fn test_swatch_serializes() {
        let base = Color::parse("#3366cc").unwrap();
        let request = PaletteRequest::new(base).with_shades(vec![100]);
        let swatches = generate_palette(&request).unwrap();
        let json = serde_json::to_value(&swatches).unwrap();
        assert_eq!(json[0]["shade"], 100);
        assert!(json[0]["hex"].as_str().unwrap().starts_with('#'));
        assert!(json[0]["color"]["channels"]["lightness"].is_number());
    }
}
