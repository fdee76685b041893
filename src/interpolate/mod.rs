//! Interpolants built from sample points
//!
//! [`Interpolant`] is the value returned by [`build_interpolant`]: an
//! immutable function of one real variable holding its precomputed
//! coefficients. It is cheap to evaluate many times and safe to share across
//! threads.
//!
//! # Example
//!
//! ```
//! use shadescale::interpolate::build_interpolant;
//!
//! let f = build_interpolant(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
//! assert_eq!(f.evaluate(4.0), 16.0);
//! let y = f.evaluate(2.5);
//! assert!(y > 4.0 && y < 9.0);
//! ```

use crate::{Result, ShadeError};

mod monotone;

pub use monotone::MonotoneCubic;

/// A function from `f64` to `f64` defined by sample points
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolant {
    /// No samples - evaluates to 0 everywhere
    Empty,
    /// A single sample - evaluates to its y everywhere
    Constant { x: f64, y: f64 },
    /// Two or more samples
    Cubic(MonotoneCubic),
}

impl Interpolant {
    /// Build a monotone cubic interpolant through `(xs[i], ys[i])`.
    ///
    /// Samples may be given in any x order. Fails with
    /// [`ShadeError::LengthMismatch`] when the slices differ in length.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ShadeError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        Ok(match xs.len() {
            0 => Interpolant::Empty,
            1 => Interpolant::Constant { x: xs[0], y: ys[0] },
            _ => Interpolant::Cubic(MonotoneCubic::from_samples(xs, ys)),
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Interpolant::Empty => 0.0,
            Interpolant::Constant { y, .. } => *y,
            Interpolant::Cubic(spline) => spline.evaluate(x),
        }
    }

    /// Knots in ascending x order
    pub fn knots(&self) -> Vec<(f64, f64)> {
        match self {
            Interpolant::Empty => vec![],
            Interpolant::Constant { x, y } => vec![(*x, *y)],
            Interpolant::Cubic(spline) => spline
                .xs()
                .iter()
                .copied()
                .zip(spline.ys().iter().copied())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Interpolant::Empty => 0,
            Interpolant::Constant { .. } => 1,
            Interpolant::Cubic(spline) => spline.xs().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Interpolant::Empty)
    }

    /// Smallest and largest knot x, or None without knots
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self {
            Interpolant::Empty => None,
            Interpolant::Constant { x, .. } => Some((*x, *x)),
            Interpolant::Cubic(spline) => {
                let xs = spline.xs();
                Some((xs[0], xs[xs.len() - 1]))
            }
        }
    }
}

/// Build an [`Interpolant`] from sample points. See [`Interpolant::new`].
pub fn build_interpolant(xs: &[f64], ys: &[f64]) -> Result<Interpolant> {
    Interpolant::new(xs, ys)
}
