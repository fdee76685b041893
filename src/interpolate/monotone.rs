//! Monotone cubic spline (Fritsch-Carlson)
//!
//! Per-segment cubic Hermite polynomials whose tangents are chosen so that
//! monotonic input data never overshoots between knots.

use std::cmp::Ordering;

/// Piecewise cubic interpolant over at least two knots.
///
/// Segment `i` covers `[xs[i], xs[i + 1]]` and evaluates
/// `ys[i] + c1s[i]*d + c2s[i]*d^2 + c3s[i]*d^3` with `d = x - xs[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    c1s: Vec<f64>,
    c2s: Vec<f64>,
    c3s: Vec<f64>,
}

impl MonotoneCubic {
    /// Build from equal-length samples with at least two entries.
    ///
    /// The caller's slices are copied, never reordered in place. Samples are
    /// stably sorted by x, so equal x values keep the order they were given in.
    pub(crate) fn from_samples(xs: &[f64], ys: &[f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.len() >= 2);

        let mut order: Vec<usize> = (0..xs.len()).collect();
        order.sort_by(|&a, &b| xs[a].partial_cmp(&xs[b]).unwrap_or(Ordering::Equal));
        let xs: Vec<f64> = order.iter().map(|&i| xs[i]).collect();
        let ys: Vec<f64> = order.iter().map(|&i| ys[i]).collect();

        let segments = xs.len() - 1;
        let mut dxs = Vec::with_capacity(segments);
        let mut ms = Vec::with_capacity(segments);
        for i in 0..segments {
            let dx = xs[i + 1] - xs[i];
            let dy = ys[i + 1] - ys[i];
            dxs.push(dx);
            ms.push(dy / dx);
        }

        // Degree-1 coefficients: secants at the ends, weighted harmonic mean
        // inside, zero wherever the data changes direction or flattens.
        let mut c1s = Vec::with_capacity(xs.len());
        c1s.push(ms[0]);
        for i in 0..segments - 1 {
            let (m, m_next) = (ms[i], ms[i + 1]);
            if m * m_next <= 0.0 {
                c1s.push(0.0);
            } else {
                let (dx, dx_next) = (dxs[i], dxs[i + 1]);
                let common = dx + dx_next;
                c1s.push(3.0 * common / ((common + dx_next) / m + (common + dx) / m_next));
            }
        }
        c1s.push(ms[segments - 1]);

        let mut c2s = Vec::with_capacity(segments);
        let mut c3s = Vec::with_capacity(segments);
        for i in 0..segments {
            let c1 = c1s[i];
            let m = ms[i];
            let inv_dx = 1.0 / dxs[i];
            let common = c1 + c1s[i + 1] - m - m;
            c2s.push((m - c1 - common) * inv_dx);
            c3s.push(common * inv_dx * inv_dx);
        }

        Self {
            xs,
            ys,
            c1s,
            c2s,
            c3s,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        // The rightmost knot must come back exactly
        let last = self.xs.len() - 1;
        if x == self.xs[last] {
            return self.ys[last];
        }

        // Binary search over the segment start knots; an exact hit returns
        // the stored y untouched.
        let mut low = 0;
        let mut high = self.c3s.len();
        while low < high {
            let mid = (low + high) / 2;
            match self.xs[mid].partial_cmp(&x) {
                Some(Ordering::Less) => low = mid + 1,
                Some(Ordering::Greater) => high = mid,
                _ => return self.ys[mid],
            }
        }
        // Outside the knot range this clamps to the first or last segment,
        // which extrapolates with that segment's cubic.
        let i = low.saturating_sub(1);

        let diff = x - self.xs[i];
        let diff_sq = diff * diff;
        self.ys[i] + self.c1s[i] * diff + self.c2s[i] * diff_sq + self.c3s[i] * diff * diff_sq
    }

    /// Knot x positions in ascending order
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Knot y values, aligned with [`xs`](Self::xs)
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Tangent (degree-1 coefficient) at every knot
    pub fn tangents(&self) -> &[f64] {
        &self.c1s
    }

    pub fn segment_count(&self) -> usize {
        self.c3s.len()
    }
}
