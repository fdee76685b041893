//! Shade scale
//!
//! Shades are labels on a 0 (black) to 200 (white) scale. See
//! [`shade_to_contrast`] for the mapping to contrast ratios.

mod contrast;
mod list;

pub use contrast::{
    contrast_to_shade, shade_delta_for_contrast, shade_to_contrast, BLACK_SHADE, MAX_CONTRAST,
    WHITE_SHADE,
};
pub use list::{default_shades, format_shades, is_shade_in_range, parse_shades, DEFAULT_SHADES};
