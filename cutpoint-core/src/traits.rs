//! Core traits shared across the cutpoint ecosystem.

/// A type laid out over an ordered set of score bins.
///
/// Implementors expose their bin edges; bin counts, widths and midpoints are
/// derived. Edges are ascending and `n + 1` edges delimit `n` bins.
pub trait Binned {
    /// The ascending bin edges.
    fn edges(&self) -> &[f64];

    /// Number of bins.
    fn n_bins(&self) -> usize {
        self.edges().len().saturating_sub(1)
    }

    /// Lowest and highest edge.
    fn span(&self) -> (f64, f64) {
        let edges = self.edges();
        (
            edges.first().copied().unwrap_or(0.0),
            edges.last().copied().unwrap_or(0.0),
        )
    }

    /// Width of bin `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_bins()`.
    fn bin_width(&self, i: usize) -> f64 {
        let edges = self.edges();
        edges[i + 1] - edges[i]
    }

    /// Midpoint of bin `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_bins()`.
    fn bin_mid(&self, i: usize) -> f64 {
        let edges = self.edges();
        0.5 * (edges[i] + edges[i + 1])
    }
}

/// Types that can produce a one-line human-readable summary.
pub trait Summarize {
    /// A short, single-line description of the value.
    fn summary(&self) -> String;
}

// ── Tests ──────────────────────────────────────────────────────────────────
