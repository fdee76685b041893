//! Shade search
//!
//! Resolves target contrast ratios to colors by bisecting the input of a
//! [`Manipulation`]. Each target is searched independently and results come
//! back in target order.
//!
//! The manipulation's contrast against black must be monotonic over
//! [`SearchConfig::domain`]. That is the caller's responsibility: with a
//! non-monotonic manipulation the search may return a wrong root or fail to
//! converge.
//!
//! # Example
//!
//! ```
//! use shadescale::{assemble, suggest_shades, ChannelAnchors, Color, ColorModel, SearchConfig};
//!
//! let base = Color::parse("teal").unwrap();
//! let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
//! let colors = suggest_shades(&manipulator, &[3.0, 7.0], &SearchConfig::default()).unwrap();
//! assert!((colors[0].contrast_against_black() - 3.0).abs() < 1e-3);
//! assert!((colors[1].contrast_against_black() - 7.0).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::color::ColorModel;
use crate::manipulate::Manipulation;
use crate::{Result, ShadeError};

/// Bisection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Accepted distance between measured and target contrast
    pub tolerance: f64,
    /// Bisection steps per target before giving up
    pub max_iterations: usize,
    /// Manipulation input range searched, as (start, end)
    pub domain: (f64, f64),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
            domain: (0.0, 1.0),
        }
    }
}

/// Resolve every target. Output is index-aligned with `targets`.
///
/// Stops at the first target that fails.
pub fn suggest_shades<M: Manipulation>(
    manipulation: &M,
    targets: &[f64],
    config: &SearchConfig,
) -> Result<Vec<M::Color>> {
    debug!("Searching {} contrast target(s)", targets.len());
    targets
        .iter()
        .map(|&target| suggest_shade(manipulation, target, config))
        .collect()
}

/// [`suggest_shades`] with targets spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn par_suggest_shades<M>(
    manipulation: &M,
    targets: &[f64],
    config: &SearchConfig,
) -> Result<Vec<M::Color>>
where
    M: Manipulation + Sync,
{
    use rayon::prelude::*;

    debug!("Searching {} contrast target(s) in parallel", targets.len());
    targets
        .par_iter()
        .map(|&target| suggest_shade(manipulation, target, config))
        .collect()
}

/// Find the color whose contrast against black is `target`.
///
/// Fails with [`ShadeError::UnreachableTarget`] before searching when the
/// target lies outside the contrasts of the two domain endpoints, and with
/// [`ShadeError::SearchNotConverged`] when the iteration budget runs out.
pub fn suggest_shade<M: Manipulation>(
    manipulation: &M,
    target: f64,
    config: &SearchConfig,
) -> Result<M::Color> {
    let tolerance = config.tolerance;
    let (start, end) = config.domain;

    let start_color = manipulation.apply(start);
    let end_color = manipulation.apply(end);
    let start_contrast = start_color.contrast_against_black();
    let end_contrast = end_color.contrast_against_black();

    let min = start_contrast.min(end_contrast);
    let max = start_contrast.max(end_contrast);
    // Written so that a NaN target is rejected too
    if !(target >= min - tolerance && target <= max + tolerance) {
        warn!(
            "Contrast {} is outside the reachable range {}..{}",
            target, min, max
        );
        return Err(ShadeError::UnreachableTarget { target, min, max });
    }

    if (start_contrast - target).abs() <= tolerance {
        return Ok(start_color);
    }
    if (end_contrast - target).abs() <= tolerance {
        return Ok(end_color);
    }

    let increasing = end_contrast >= start_contrast;
    let (mut low, mut high) = (start, end);
    let mut closest = if (start_contrast - target).abs() <= (end_contrast - target).abs() {
        start_contrast
    } else {
        end_contrast
    };

    for iteration in 1..=config.max_iterations {
        let mid = 0.5 * (low + high);
        let color = manipulation.apply(mid);
        let contrast = color.contrast_against_black();
        trace!(
            "target {} iteration {}: change {} gives contrast {}",
            target,
            iteration,
            mid,
            contrast
        );

        if (contrast - target).abs() <= tolerance {
            return Ok(color);
        }
        if (contrast - target).abs() < (closest - target).abs() {
            closest = contrast;
        }

        if (contrast < target) == increasing {
            low = mid;
        } else {
            high = mid;
        }
    }

    Err(ShadeError::SearchNotConverged {
        target,
        iterations: config.max_iterations,
        closest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Channels, Color};
    use crate::manipulate::{assemble, ChannelAnchors};
    use crate::shade::{contrast_to_shade, shade_to_contrast};
    use proptest::prelude::*;

    /// A color whose contrast against black is whatever it was built with
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Measured(f64);

    impl ColorModel for Measured {
        fn from_channels(channels: Channels) -> Self {
            Measured(1.0 + 20.0 * channels.lightness)
        }

        fn channels(&self) -> Channels {
            Channels::new(0.0, 0.0, (self.0 - 1.0) / 20.0)
        }

        fn relative_luminance(&self) -> f64 {
            (self.0 - 1.0) * 0.05
        }

        fn to_hex(&self) -> String {
            format!("contrast:{}", self.0)
        }
    }

    fn identity_config() -> SearchConfig {
        SearchConfig {
            domain: (1.0, 21.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.domain, (0.0, 1.0));
    }

    #[test]
    fn test_identity_manipulation_hits_targets_in_order() {
        let targets = [1.0, 4.5, 21.0];
        let colors = suggest_shades(&|x: f64| Measured(x), &targets, &identity_config()).unwrap();
        assert_eq!(colors.len(), 3);
        for (color, target) in colors.iter().zip(targets.iter()) {
            assert!((color.contrast_against_black() - target).abs() < 1e-3);
        }
    }

    #[test]
    fn test_order_is_not_sorted() {
        let targets = [15.0, 2.0, 8.0];
        let colors = suggest_shades(&|x: f64| Measured(x), &targets, &identity_config()).unwrap();
        for (color, target) in colors.iter().zip(targets.iter()) {
            assert!((color.0 - target).abs() < 1e-3);
        }
    }

    #[test]
    fn test_decreasing_manipulation() {
        let colors =
            suggest_shades(&|x: f64| Measured(22.0 - x), &[3.0, 20.0], &identity_config()).unwrap();
        assert!((colors[0].0 - 3.0).abs() < 1e-3);
        assert!((colors[1].0 - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_targets() {
        let colors = suggest_shades(&|x: f64| Measured(x), &[], &identity_config()).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_unreachable_target() {
        let result = suggest_shade(&|x: f64| Measured(x), 25.0, &identity_config());
        match result {
            Err(ShadeError::UnreachableTarget { target, min, max }) => {
                assert_eq!(target, 25.0);
                assert!((min - 1.0).abs() < 1e-9);
                assert!((max - 21.0).abs() < 1e-9);
            }
            other => panic!("expected UnreachableTarget, got {:?}", other),
        }

        assert!(matches!(
            suggest_shade(&|x: f64| Measured(x), 0.5, &identity_config()),
            Err(ShadeError::UnreachableTarget { .. })
        ));
        assert!(matches!(
            suggest_shade(&|x: f64| Measured(x), f64::NAN, &identity_config()),
            Err(ShadeError::UnreachableTarget { .. })
        ));
    }

    #[test]
    fn test_unreachable_target_fails_whole_palette() {
        let result = suggest_shades(&|x: f64| Measured(x), &[2.0, 30.0, 5.0], &identity_config());
        assert!(matches!(result, Err(ShadeError::UnreachableTarget { .. })));
    }

    #[test]
    fn test_not_converged() {
        let config = SearchConfig {
            tolerance: 1e-12,
            max_iterations: 2,
            domain: (1.0, 21.0),
        };
        match suggest_shade(&|x: f64| Measured(x), 4.5, &config) {
            Err(ShadeError::SearchNotConverged {
                target,
                iterations,
                closest,
            }) => {
                assert_eq!(target, 4.5);
                assert_eq!(iterations, 2);
                // Midpoints tried: 11, then 6
                assert!((closest - 6.0).abs() < 1e-9);
            }
            other => panic!("expected SearchNotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_real_color_palette() {
        let base = Color::parse("#3366cc").unwrap();
        let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
        let shades = [0.0, 10.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0];
        let targets: Vec<f64> = shades.iter().map(|&s| shade_to_contrast(s)).collect();
        let colors = suggest_shades(&manipulator, &targets, &SearchConfig::default()).unwrap();

        assert_eq!(colors.len(), shades.len());
        assert_eq!(colors[0].to_hex(), "#000000");
        assert_eq!(colors[shades.len() - 1].to_hex(), "#ffffff");
        for (color, target) in colors.iter().zip(targets.iter()) {
            assert!((color.contrast_against_black() - target).abs() < 1e-3);
        }
        // Lighter shades come out lighter
        for pair in colors.windows(2) {
            assert!(pair[0].lightness() <= pair[1].lightness());
        }
    }

    #[test]
    fn test_real_color_keeps_hue() {
        let base = Color::parse("#cc3300").unwrap();
        let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
        let color = suggest_shade(&manipulator, 4.5, &SearchConfig::default()).unwrap();
        assert!((color.hue() - base.hue()).abs() < 1e-9);
        assert!((color.saturation() - base.saturation()).abs() < 1e-9);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let base = Color::parse("#3366cc").unwrap();
        let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
        let targets: Vec<f64> = (0..=20).map(|i| shade_to_contrast(i as f64 * 10.0)).collect();
        let config = SearchConfig::default();
        let sequential = suggest_shades(&manipulator, &targets, &config).unwrap();
        let parallel = par_suggest_shades(&manipulator, &targets, &config).unwrap();
        assert_eq!(sequential, parallel);
    }

    proptest! {
        #[test]
        fn prop_shade_roundtrips_through_search(shade in 0.0f64..=200.0, hue in 0.0f64..360.0, saturation in 0.0f64..=1.0) {
            let base = Color::from_channels(Channels::new(hue, saturation, 0.5));
            let manipulator = assemble(&base, &ChannelAnchors::default()).unwrap();
            let target = shade_to_contrast(shade);
            let color = suggest_shade(&manipulator, target, &SearchConfig::default()).unwrap();
            let measured = color.contrast_against_black();
            prop_assert!((measured - target).abs() < 1e-3);
            prop_assert!((contrast_to_shade(measured) - shade).abs() < 0.05);
        }
    }
}
