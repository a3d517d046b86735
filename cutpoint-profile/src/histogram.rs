//! Equal-width score binning.
//!
//! A [`BinGrid`] is computed once per profile and reused for every fill, so
//! the positive and negative histograms share bit-identical edges.

use cutpoint_core::{Binned, CutpointError, Result};

/// An equal-width binning of a score interval.
///
/// Bins are half-open `[edges[k], edges[k+1])` except the last, which also
/// includes its upper edge. NaN and out-of-range values fall into no bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinGrid {
    edges: Vec<f64>,
}

impl BinGrid {
    /// Build a grid of `bins` equal-width bins covering `[low, high]`.
    ///
    /// A zero-width span expands to `(low - 0.5, high + 0.5)` so a constant
    /// score column still bins cleanly. The final edge is set exactly to
    /// `high`, never to an accumulated `low + bins * width`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `bins == 0`, if either bound is not finite, if
    /// `low > high`, or if the span is too narrow for `bins` strictly
    /// increasing edges.
    pub fn new(bins: usize, low: f64, high: f64) -> Result<Self> {
        if bins == 0 {
            return Err(CutpointError::InvalidInput(
                "bins must be at least 1".into(),
            ));
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(CutpointError::InvalidInput(format!(
                "score range bounds must be finite, got ({}, {})",
                low, high,
            )));
        }
        if low > high {
            return Err(CutpointError::InvalidInput(format!(
                "score range low {} exceeds high {}",
                low, high,
            )));
        }
        let (low, high) = if low == high {
            (low - 0.5, high + 0.5)
        } else {
            (low, high)
        };

        let width = (high - low) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| low + i as f64 * width).collect();
        edges[bins] = high;

        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CutpointError::InvalidInput(format!(
                "range ({}, {}) is too narrow for {} strictly increasing bins",
                low, high, bins,
            )));
        }
        Ok(Self { edges })
    }

    /// Build a grid over the observed range of `scores`.
    ///
    /// The range is the min and max of the finite scores; NaN and infinite
    /// values are ignored here (and will fall outside the grid).
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no finite score exists to infer a range from, or
    /// for the same parameter errors as [`BinGrid::new`].
    pub fn from_scores(bins: usize, scores: &[f64]) -> Result<Self> {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for &s in scores {
            if s.is_finite() {
                low = low.min(s);
                high = high.max(s);
            }
        }
        if low > high {
            return Err(CutpointError::InvalidInput(
                "cannot infer a score range: no finite scores".into(),
            ));
        }
        Self::new(bins, low, high)
    }

    /// The ascending bin edges.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Consume the grid, returning its edges.
    pub fn into_edges(self) -> Vec<f64> {
        self.edges
    }

    /// Bin midpoints, one per bin.
    pub fn mids(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// The bin index of `x`, or `None` if `x` is NaN or outside the range.
    pub fn bin_of(&self, x: f64) -> Option<usize> {
        let bins = self.n_bins();
        let low = self.edges[0];
        let high = self.edges[bins];
        if !(x >= low && x <= high) {
            // NaN fails both comparisons and is excluded here too.
            return None;
        }
        let mut k = (((x - low) / (high - low)) * bins as f64) as usize;
        if k >= bins {
            k = bins - 1;
        }
        // Snap the float fast path to the edge convention
        // edges[k] <= x < edges[k+1] (last bin also takes x == high).
        if x < self.edges[k] {
            k -= 1;
        } else if k + 1 < bins && x >= self.edges[k + 1] {
            k += 1;
        }
        Some(k)
    }

    /// Count `scores` into per-bin totals, skipping out-of-range values.
    pub fn fill<I>(&self, scores: I) -> Vec<usize>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts = vec![0usize; self.n_bins()];
        for s in scores {
            if let Some(k) = self.bin_of(s) {
                counts[k] += 1;
            }
        }
        counts
    }
}

impl Binned for BinGrid {
    fn edges(&self) -> &[f64] {
        &self.edges
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
