//! Shade lists
//!
//! A palette is requested as a list of integer shade indices, written in
//! text as a dash-separated list such as `10-25-50-100`.

use crate::{Result, ShadeError};

/// Shades shown when the caller does not ask for specific ones
pub const DEFAULT_SHADES: &[i32] = &[10, 25, 50, 75, 100, 125, 150, 175];

/// The default shade list with the base color's own shade merged in,
/// deduplicated and sorted ascending.
pub fn default_shades(base_shade: i32) -> Vec<i32> {
    let mut shades: Vec<i32> = DEFAULT_SHADES.to_vec();
    shades.push(base_shade);
    shades.sort_unstable();
    shades.dedup();
    shades
}

/// Parse a dash-separated shade list.
///
/// Order is kept as written. Whitespace around entries is ignored; empty
/// entries and non-integers are rejected.
///
/// ```
/// use shadescale::shade::parse_shades;
///
/// assert_eq!(parse_shades("10-25-150").unwrap(), vec![10, 25, 150]);
/// assert!(parse_shades("10--25").is_err());
/// ```
pub fn parse_shades(input: &str) -> Result<Vec<i32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShadeError::InvalidShades(
            "at least one shade is required".to_string(),
        ));
    }

    trimmed
        .split('-')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>().map_err(|_| {
                ShadeError::InvalidShades(format!("'{}' is not an integer shade", part))
            })
        })
        .collect()
}

/// Format shades the way [`parse_shades`] reads them.
pub fn format_shades(shades: &[i32]) -> String {
    shades
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether a shade lies on the 0 (black) to 200 (white) scale
pub fn is_shade_in_range(shade: i32) -> bool {
    (0..=200).contains(&shade)
}
