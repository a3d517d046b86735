//! The operating-profile value object.

use cutpoint_core::{Binned, Summarize};

/// A binary classifier's operating profile over one shared binning.
///
/// Combines a score histogram split by true class with metric curves
/// evaluated at each bin midpoint, so the score distribution and the
/// operating characteristics line up on a single x-axis. Produced by
/// [`compute_operating_profile`](crate::compute_operating_profile); the
/// value is plain data with no mutation API.
///
/// The histograms count only scores inside the bin range, while the metric
/// curves divide by the full class totals, so out-of-range scores depress
/// the curves without appearing in a bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingProfile {
    /// Ascending bin edges (`n_bins + 1` of them), shared by both histograms.
    pub edges: Vec<f64>,
    /// Bin midpoints; each doubles as the threshold for the metric curves.
    pub mids: Vec<f64>,
    /// Per-bin counts of positive-labelled scores.
    pub pos_hist: Vec<usize>,
    /// Per-bin counts of negative-labelled scores.
    pub neg_hist: Vec<usize>,
    /// True positive rate at each midpoint threshold.
    pub tpr: Vec<f64>,
    /// False positive rate at each midpoint threshold.
    pub fpr: Vec<f64>,
    /// Accuracy at each midpoint threshold.
    pub accuracy: Vec<f64>,
}

impl OperatingProfile {
    /// Positive scores that landed inside the bin range.
    pub fn binned_positives(&self) -> usize {
        self.pos_hist.iter().sum()
    }

    /// Negative scores that landed inside the bin range.
    pub fn binned_negatives(&self) -> usize {
        self.neg_hist.iter().sum()
    }

    /// The `(threshold, accuracy)` pair at the accuracy curve's maximum.
    ///
    /// Ties resolve to the lowest threshold.
    ///
    /// # Panics
    ///
    /// Panics if the profile has no bins.
    pub fn peak_accuracy(&self) -> (f64, f64) {
        let mut best = 0;
        for (i, &acc) in self.accuracy.iter().enumerate() {
            if acc > self.accuracy[best] {
                best = i;
            }
        }
        (self.mids[best], self.accuracy[best])
    }
}

impl Binned for OperatingProfile {
    fn edges(&self) -> &[f64] {
        &self.edges
    }
}

impl Summarize for OperatingProfile {
    fn summary(&self) -> String {
        if self.mids.is_empty() {
            return "operating profile: 0 bins".into();
        }
        let (low, high) = self.span();
        let (threshold, accuracy) = self.peak_accuracy();
        format!(
            "operating profile: {} bins over [{}, {}], {} pos / {} neg binned, peak accuracy {:.4} at threshold {:.4}",
            self.n_bins(),
            low,
            high,
            self.binned_positives(),
            self.binned_negatives(),
            accuracy,
            threshold,
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_operating_profile;

    fn scenario() -> OperatingProfile {
        compute_operating_profile(
            &[false, false, true, true],
            &[0.1, 0.4, 0.6, 0.9],
            2,
            Some((0.0, 1.0)),
        )
        .unwrap()
    }

    #[test]
    fn binned_totals() {
        let profile = scenario();
        assert_eq!(profile.binned_positives(), 2);
        assert_eq!(profile.binned_negatives(), 2);
        assert_eq!(profile.n_bins(), 2);
        assert_eq!(profile.span(), (0.0, 1.0));
    }

    #[test]
    fn peak_accuracy_prefers_lowest_threshold_on_ties() {
        // Both midpoints reach accuracy 0.75 in the scenario.
        let profile = scenario();
        let (threshold, accuracy) = profile.peak_accuracy();
        assert!((threshold - 0.25).abs() < 1e-12);
        assert!((accuracy - 0.75).abs() < 1e-9);
    }

    #[test]
    fn peak_accuracy_finds_maximum() {
        let profile = compute_operating_profile(
            &[false, false, false, true],
            &[0.1, 0.2, 0.3, 0.9],
            2,
            Some((0.0, 1.0)),
        )
        .unwrap();
        // t = 0.75 classifies everything correctly.
        let (threshold, accuracy) = profile.peak_accuracy();
        assert!((threshold - 0.75).abs() < 1e-12);
        assert!((accuracy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_one_liner() {
        let s = scenario().summary();
        assert!(s.contains("2 bins"));
        assert!(s.contains("2 pos / 2 neg"));
        assert!(s.contains("peak accuracy"));
        assert!(!s.contains('\n'));
    }
}
