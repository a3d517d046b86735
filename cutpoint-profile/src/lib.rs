//! Operating-profile computation for binary classifiers.
//!
//! An operating profile ties together two views of a scored binary
//! classifier over one shared binning: a score histogram split by true
//! class, and TPR/FPR/accuracy curves evaluated with each bin midpoint as
//! the decision threshold. One pass produces both, so the score
//! distribution and the operating characteristics line up on a single
//! x-axis and a decision threshold can be read straight off the result.
//!
//! # Quick start
//!
//! ```
//! use cutpoint_profile::compute_operating_profile;
//!
//! let labels = [false, false, true, true];
//! let scores = [0.1, 0.4, 0.6, 0.9];
//! let profile = compute_operating_profile(&labels, &scores, 2, Some((0.0, 1.0))).unwrap();
//!
//! assert_eq!(profile.edges, vec![0.0, 0.5, 1.0]);
//! assert_eq!(profile.pos_hist, vec![0, 2]);
//! assert_eq!(profile.neg_hist, vec![2, 0]);
//! assert!((profile.tpr[0] - 1.0).abs() < 1e-9); // every positive clears t = 0.25
//! assert!(profile.fpr[1].abs() < 1e-9); // no negative clears t = 0.75
//! ```

pub mod histogram;
pub mod sweep;
pub mod types;

pub use histogram::BinGrid;
pub use sweep::{ThresholdCounts, ThresholdMetrics, ThresholdSweep};
pub use types::OperatingProfile;

use cutpoint_core::Result;

/// Compute a classifier's operating profile.
///
/// `labels` marks each sample's true class and `scores` carries the
/// classifier's score for the same sample, in the same order. Scores are
/// split by label into two histograms over `bins` equal-width bins spanning
/// `score_range` (inferred from the finite scores when `None`); each bin
/// midpoint is then applied as a decision threshold, with
/// `score >= threshold` predicting positive, to produce the TPR, FPR and
/// accuracy curves. Probability-like scores conventionally use `bins = 40`
/// and `score_range = Some((0.0, 1.0))`.
///
/// Scores outside the range (and NaN scores) are left out of the histograms
/// but still count toward the class totals in the metric denominators.
///
/// Runs in `O(n log n + bins log n)`: one descending sort, one prefix pass,
/// one binary search per midpoint. Identical inputs produce bit-identical
/// profiles.
///
/// # Errors
///
/// [`ShapeMismatch`](cutpoint_core::CutpointError::ShapeMismatch) if the
/// slices differ in length,
/// [`DegenerateInput`](cutpoint_core::CutpointError::DegenerateInput) if
/// either class is absent, and
/// [`InvalidInput`](cutpoint_core::CutpointError::InvalidInput) for
/// `bins == 0` or an unusable score range.
pub fn compute_operating_profile(
    labels: &[bool],
    scores: &[f64],
    bins: usize,
    score_range: Option<(f64, f64)>,
) -> Result<OperatingProfile> {
    let sweep = ThresholdSweep::new(labels, scores)?;
    let grid = match score_range {
        Some((low, high)) => BinGrid::new(bins, low, high)?,
        None => BinGrid::from_scores(bins, scores)?,
    };

    let pos_hist = grid.fill(
        labels
            .iter()
            .zip(scores)
            .filter(|&(&l, _)| l)
            .map(|(_, &s)| s),
    );
    let neg_hist = grid.fill(
        labels
            .iter()
            .zip(scores)
            .filter(|&(&l, _)| !l)
            .map(|(_, &s)| s),
    );

    let mids = grid.mids();
    let mut tpr = Vec::with_capacity(mids.len());
    let mut fpr = Vec::with_capacity(mids.len());
    let mut accuracy = Vec::with_capacity(mids.len());
    for &mid in &mids {
        let m = sweep.metrics_at(mid);
        tpr.push(m.tpr);
        fpr.push(m.fpr);
        accuracy.push(m.accuracy);
    }

    Ok(OperatingProfile {
        edges: grid.into_edges(),
        mids,
        pos_hist,
        neg_hist,
        tpr,
        fpr,
        accuracy,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cutpoint_core::CutpointError;

    const TOL: f64 = 1e-9;

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
    fn worked_scenario() {
        let p = scenario();
        assert_eq!(p.edges, vec![0.0, 0.5, 1.0]);
        assert_eq!(p.mids, vec![0.25, 0.75]);
        assert_eq!(p.pos_hist, vec![0, 2]);
        assert_eq!(p.neg_hist, vec![2, 0]);

        // t = 0.25: TP=2 FP=1 TN=1; t = 0.75: TP=1 FP=0 TN=2.
        assert!((p.tpr[0] - 1.0).abs() < TOL);
        assert!((p.fpr[0] - 0.5).abs() < TOL);
        assert!((p.accuracy[0] - 0.75).abs() < TOL);
        assert!((p.tpr[1] - 0.5).abs() < TOL);
        assert!(p.fpr[1].abs() < TOL);
        assert!((p.accuracy[1] - 0.75).abs() < TOL);
    }

    #[test]
    fn vector_lengths_are_consistent() {
        let labels = [true, false, true, false, true, false];
        let scores = [0.9, 0.2, 0.7, 0.4, 0.55, 0.1];
        let p = compute_operating_profile(&labels, &scores, 7, Some((0.0, 1.0))).unwrap();
        assert_eq!(p.edges.len(), 8);
        assert_eq!(p.mids.len(), 7);
        assert_eq!(p.pos_hist.len(), 7);
        assert_eq!(p.neg_hist.len(), 7);
        assert_eq!(p.tpr.len(), 7);
        assert_eq!(p.fpr.len(), 7);
        assert_eq!(p.accuracy.len(), 7);
    }

    #[test]
    fn edges_increase_and_mids_sit_between() {
        let labels = [true, false, true, false];
        let scores = [0.8, 0.3, 0.6, 0.2];
        let p = compute_operating_profile(&labels, &scores, 5, Some((0.0, 1.0))).unwrap();
        for w in p.edges.windows(2) {
            assert!(w[0] < w[1]);
        }
        for (i, &mid) in p.mids.iter().enumerate() {
            assert!((mid - 0.5 * (p.edges[i] + p.edges[i + 1])).abs() < 1e-12);
        }
    }

    #[test]
    fn shape_mismatch_rejected() {
        let err =
            compute_operating_profile(&[true, false, true], &[0.1, 0.2], 4, None).unwrap_err();
        assert!(matches!(
            err,
            CutpointError::ShapeMismatch {
                labels: 3,
                scores: 2
            }
        ));
    }

    #[test]
    fn single_class_rejected() {
        let err = compute_operating_profile(&[true, true], &[0.1, 0.9], 4, None).unwrap_err();
        assert!(matches!(err, CutpointError::DegenerateInput(_)));
        let err = compute_operating_profile(&[false, false], &[0.1, 0.9], 4, None).unwrap_err();
        assert!(matches!(err, CutpointError::DegenerateInput(_)));
    }

    #[test]
    fn invalid_binning_rejected() {
        let labels = [true, false];
        let scores = [0.2, 0.8];
        assert!(matches!(
            compute_operating_profile(&labels, &scores, 0, Some((0.0, 1.0))),
            Err(CutpointError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_operating_profile(&labels, &scores, 4, Some((1.0, 0.0))),
            Err(CutpointError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_operating_profile(&labels, &scores, 4, Some((0.0, f64::INFINITY))),
            Err(CutpointError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_range_scores_stay_in_denominators() {
        // One positive at 1.5 and one negative at -0.3 fall outside the
        // histograms but still count toward P and N.
        let labels = [true, false, true, false];
        let scores = [0.2, 0.8, 1.5, -0.3];
        let p = compute_operating_profile(&labels, &scores, 2, Some((0.0, 1.0))).unwrap();
        assert_eq!(p.pos_hist, vec![1, 0]);
        assert_eq!(p.neg_hist, vec![0, 1]);
        assert_eq!(p.binned_positives() + p.binned_negatives(), 2);

        // t = 0.25: 1.5 and 0.8 pass, so TP=1 FP=1 with P=N=2.
        assert!((p.tpr[0] - 0.5).abs() < TOL);
        assert!((p.fpr[0] - 0.5).abs() < TOL);
        assert!((p.accuracy[0] - 0.5).abs() < TOL);
    }

    #[test]
    fn inferred_range_spans_finite_scores() {
        let labels = [true, false, true, false];
        let scores = [0.25, 0.5, 0.75, 1.0];
        let p = compute_operating_profile(&labels, &scores, 3, None).unwrap();
        assert!((p.edges[0] - 0.25).abs() < 1e-12);
        assert!((p.edges[3] - 1.0).abs() < 1e-12);
        assert_eq!(p.binned_positives() + p.binned_negatives(), 4);
    }

    #[test]
    fn constant_scores_bin_cleanly() {
        let labels = [true, false, true];
        let scores = [0.7, 0.7, 0.7];
        let p = compute_operating_profile(&labels, &scores, 2, None).unwrap();
        assert!((p.edges[0] - 0.2).abs() < 1e-12);
        assert!((p.edges[2] - 1.2).abs() < 1e-12);
        assert_eq!(p.binned_positives() + p.binned_negatives(), 3);
    }

    #[test]
    fn ties_count_as_passing() {
        // A positive exactly on a midpoint threshold must be predicted
        // positive there.
        let labels = [true, false];
        let scores = [0.25, 0.8];
        let p = compute_operating_profile(&labels, &scores, 2, Some((0.0, 1.0))).unwrap();
        assert!((p.tpr[0] - 1.0).abs() < TOL);
    }

    #[test]
    fn tpr_fpr_monotone_nonincreasing() {
        let labels = [true, false, true, false, true, false, true, false];
        let scores = [0.95, 0.85, 0.7, 0.6, 0.5, 0.4, 0.2, 0.05];
        let p = compute_operating_profile(&labels, &scores, 10, Some((0.0, 1.0))).unwrap();
        for w in p.tpr.windows(2) {
            assert!(w[1] <= w[0]);
        }
        for w in p.fpr.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn accuracy_is_not_monotone() {
        // Three low negatives and one high positive: accuracy climbs as the
        // threshold rises past the negatives.
        let labels = [false, false, false, true];
        let scores = [0.1, 0.2, 0.3, 0.9];
        let p = compute_operating_profile(&labels, &scores, 2, Some((0.0, 1.0))).unwrap();
        assert!(p.accuracy[1] > p.accuracy[0]);
    }

    #[test]
    fn identical_inputs_identical_profiles() {
        let labels = [true, false, true, false, true];
        let scores = [0.9, 0.9, 0.5, 0.5, 0.1];
        let a = compute_operating_profile(&labels, &scores, 4, Some((0.0, 1.0))).unwrap();
        let b = compute_operating_profile(&labels, &scores, 4, Some((0.0, 1.0))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn curves_stay_inside_unit_interval() {
        let labels = [true, false, true, false, true, false];
        let scores = [0.9, 0.8, 0.7, 0.3, 0.2, 0.1];
        let p = compute_operating_profile(&labels, &scores, 40, Some((0.0, 1.0))).unwrap();
        for i in 0..p.mids.len() {
            assert!(p.tpr[i] >= 0.0 && p.tpr[i] < 1.0);
            assert!(p.fpr[i] >= 0.0 && p.fpr[i] < 1.0);
            assert!(p.accuracy[i] >= 0.0 && p.accuracy[i] < 1.0);
        }
    }
}
