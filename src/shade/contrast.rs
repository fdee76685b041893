//! Shade index ↔ contrast ratio
//!
//! Contrast ratios combine multiplicatively, so the additive shade scale is
//! mapped through an exponential: equal shade differences always mean equal
//! contrast factors.
//!
//! * 4.5 contrast: difference of about 100
//! * 3.0 contrast: difference of about 75

/// Shade of the black reference color
pub const BLACK_SHADE: f64 = 0.0;

/// Shade of the white reference color
pub const WHITE_SHADE: f64 = 200.0;

/// Contrast of white against black
pub const MAX_CONTRAST: f64 = 21.0;

/// Target contrast against black for a shade index.
///
/// Equal to `exp((shade / 200) * ln 21)`. Computed as a power of 21 so that
/// shade 0 and shade 200 come out as exactly 1 and 21. Values outside
/// `[0, 200]` extrapolate along the same curve.
///
/// ```
/// use shadescale::shade_to_contrast;
///
/// assert_eq!(shade_to_contrast(0.0), 1.0);
/// assert_eq!(shade_to_contrast(200.0), 21.0);
/// ```
pub fn shade_to_contrast(shade: f64) -> f64 {
    MAX_CONTRAST.powf(shade / WHITE_SHADE)
}

/// Shade index whose target contrast is `ratio`. Inverse of [`shade_to_contrast`].
///
/// Ratios at or below zero have no shade and give NaN or negative infinity.
pub fn contrast_to_shade(ratio: f64) -> f64 {
    WHITE_SHADE * ratio.ln() / MAX_CONTRAST.ln()
}

/// Shade difference that corresponds to a contrast factor of `ratio`
/// between two shades.
pub fn shade_delta_for_contrast(ratio: f64) -> f64 {
    contrast_to_shade(ratio)
}
