//! Channel manipulation along lightness
//!
//! A manipulation maps one scalar to a color. The shade search walks that
//! scalar to hit a contrast target, so anything implementing [`Manipulation`]
//! can be searched: a [`ChannelManipulator`] built by [`assemble`], or any
//! `Fn(f64) -> C` closure.
//!
//! [`assemble`] bends hue and saturation along the lightness axis. Each
//! channel gets a monotone cubic [`Interpolant`] through three knots:
//!
//! ```text
//! lightness   0.0          base.lightness      1.0
//! value       start  ───►  base value    ───►  end
//! ```
//!
//! Unset anchors fall back to the base color's own channel value, so with
//! [`ChannelAnchors::default`] both curves are flat and only lightness moves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Channels, Color, ColorModel};
use crate::interpolate::Interpolant;
use crate::Result;

/// A function from a scalar "change" parameter to a color
///
/// Searching assumes the resulting contrast is monotonic in the parameter
/// over the search domain. Nothing checks this.
pub trait Manipulation {
    type Color: ColorModel;

    fn apply(&self, change: f64) -> Self::Color;
}

impl<F, C> Manipulation for F
where
    F: Fn(f64) -> C,
    C: ColorModel,
{
    type Color = C;

    fn apply(&self, change: f64) -> C {
        self(change)
    }
}

/// Optional hue/saturation overrides at the dark and light ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelAnchors {
    /// Hue in degrees at lightness 0
    pub hue_start: Option<f64>,
    /// Hue in degrees at lightness 1
    pub hue_end: Option<f64>,
    /// Saturation at lightness 0
    pub saturation_start: Option<f64>,
    /// Saturation at lightness 1
    pub saturation_end: Option<f64>,
}

impl ChannelAnchors {
    pub fn is_empty(&self) -> bool {
        self.hue_start.is_none()
            && self.hue_end.is_none()
            && self.saturation_start.is_none()
            && self.saturation_end.is_none()
    }

    /// Fill fields unset here from `other`
    pub fn or(self, other: ChannelAnchors) -> ChannelAnchors {
        ChannelAnchors {
            hue_start: self.hue_start.or(other.hue_start),
            hue_end: self.hue_end.or(other.hue_end),
            saturation_start: self.saturation_start.or(other.saturation_start),
            saturation_end: self.saturation_end.or(other.saturation_end),
        }
    }
}

/// Moves a base color along lightness with interpolated hue and saturation
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelManipulator<C: ColorModel = Color> {
    base: C,
    hue: Interpolant,
    saturation: Interpolant,
}

impl<C: ColorModel> ChannelManipulator<C> {
    /// The color with the given lightness, clamped to `[0, 1]`
    pub fn set_lightness(&self, lightness: f64) -> C {
        let lightness = if lightness.is_nan() {
            0.0
        } else {
            lightness.clamp(0.0, 1.0)
        };
        C::from_channels(Channels {
            hue: self.hue.evaluate(lightness),
            saturation: self.saturation.evaluate(lightness),
            lightness,
        })
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn hue_curve(&self) -> &Interpolant {
        &self.hue
    }

    pub fn saturation_curve(&self) -> &Interpolant {
        &self.saturation
    }

    /// Range of lightness values the manipulator accepts
    pub fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl<C: ColorModel> Manipulation for ChannelManipulator<C> {
    type Color = C;

    fn apply(&self, change: f64) -> C {
        self.set_lightness(change)
    }
}

/// Build the hue and saturation curves for `base`.
pub fn assemble<C: ColorModel>(
    base: &C,
    anchors: &ChannelAnchors,
) -> Result<ChannelManipulator<C>> {
    let channels = base.channels();

    let hue_start = anchors
        .hue_start
        .map_or(channels.hue, |h| unwrap_hue(h, channels.hue));
    let hue_end = anchors
        .hue_end
        .map_or(channels.hue, |h| unwrap_hue(h, channels.hue));
    let (xs, ys) = channel_knots(channels.lightness, hue_start, channels.hue, hue_end);
    let hue = Interpolant::new(&xs, &ys)?;

    let (xs, ys) = channel_knots(
        channels.lightness,
        anchors.saturation_start.unwrap_or(channels.saturation),
        channels.saturation,
        anchors.saturation_end.unwrap_or(channels.saturation),
    );
    let saturation = Interpolant::new(&xs, &ys)?;

    debug!(
        "Assembled manipulator around {} (hue knots {:?}, saturation knots {:?})",
        base.to_hex(),
        hue.knots(),
        saturation.knots()
    );

    Ok(ChannelManipulator {
        base: base.clone(),
        hue,
        saturation,
    })
}

/// Knots at lightness 0, the base lightness and 1. A base sitting on either
/// end replaces that end's anchor.
fn channel_knots(base_lightness: f64, start: f64, base: f64, end: f64) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(3);
    let mut ys = Vec::with_capacity(3);
    if base_lightness > 0.0 {
        xs.push(0.0);
        ys.push(start);
    }
    xs.push(base_lightness);
    ys.push(base);
    if base_lightness < 1.0 {
        xs.push(1.0);
        ys.push(end);
    }
    (xs, ys)
}

/// Shift `hue` by whole turns to within 180 degrees of `reference`
fn unwrap_hue(hue: f64, reference: f64) -> f64 {
    let mut delta = (hue - reference).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    reference + delta
}
