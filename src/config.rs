//! Palette configuration
//!
//! A [`PaletteConfig`] can be loaded from a TOML file and then overridden by
//! command-line flags:
//!
//! ```toml
//! shades = [10, 50, 100, 150]
//!
//! [anchors]
//! hue_start = 250.0
//! saturation_end = 0.2
//!
//! [search]
//! tolerance = 1e-5
//! max_iterations = 200
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::generate::PaletteRequest;
use crate::manipulate::ChannelAnchors;
use crate::search::SearchConfig;
use crate::{Result, ShadeError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Shades to render; the default list is used when unset
    pub shades: Option<Vec<i32>>,
    pub anchors: ChannelAnchors,
    pub search: SearchConfig,
}

/// Values given on the command line, which win over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub shades: Option<Vec<i32>>,
    pub anchors: ChannelAnchors,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl PaletteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PaletteConfig =
            toml_edit::de::from_str(text).map_err(|e| ShadeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShadeError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn merge_cli(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(shades) = &overrides.shades {
            self.shades = Some(shades.clone());
        }
        self.anchors = overrides.anchors.or(self.anchors);
        if let Some(tolerance) = overrides.tolerance {
            self.search.tolerance = tolerance;
        }
        if let Some(max_iterations) = overrides.max_iterations {
            self.search.max_iterations = max_iterations;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if !(search.tolerance.is_finite() && search.tolerance > 0.0) {
            return Err(ShadeError::ConfigError(format!(
                "search.tolerance must be a positive number, got {}",
                search.tolerance
            )));
        }
        if search.max_iterations == 0 {
            return Err(ShadeError::ConfigError(
                "search.max_iterations must be at least 1".to_string(),
            ));
        }
        let (start, end) = search.domain;
        if !(start.is_finite() && end.is_finite()) || start == end {
            return Err(ShadeError::ConfigError(format!(
                "search.domain must be two different finite numbers, got [{}, {}]",
                start, end
            )));
        }
        if let Some(shades) = &self.shades {
            if shades.is_empty() {
                return Err(ShadeError::ConfigError(
                    "shades must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Palette request for `base` under this configuration
    pub fn to_request(&self, base: Color) -> PaletteRequest {
        let request = PaletteRequest::new(base)
            .with_anchors(self.anchors)
            .with_search(self.search);
        match &self.shades {
            Some(shades) => request.with_shades(shades.clone()),
            None => request,
        }
    }
}
