//! Threshold sweep over descending-sorted scores.
//!
//! Sorting once and keeping prefix class counts lets every threshold query
//! run in `O(log n)`, so a full profile costs one sort plus one binary
//! search per bin midpoint instead of a rescan per threshold.

use cutpoint_core::{CutpointError, Result};

/// Guard added to metric denominators; ratios stay strictly below 1, so
/// comparisons against the curves use a tolerance.
const EPS: f64 = 1e-12;

/// Confusion counts at one threshold, with `score >= threshold` predicting
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

/// Metric values at one threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdMetrics {
    pub tpr: f64,
    pub fpr: f64,
    pub accuracy: f64,
}

/// A reusable threshold sweep over one `(labels, scores)` pair.
///
/// Construction sorts the scores descending and accumulates prefix class
/// counts; [`counts_at`](Self::counts_at) then answers any threshold with a
/// single binary search. Tied scores count as satisfying the threshold, and
/// the cut between "passing" and "failing" never splits a tie group, so the
/// result does not depend on how the sort orders equal scores.
#[derive(Debug, Clone)]
pub struct ThresholdSweep {
    /// Scores sorted descending; NaN inputs are stored as `NEG_INFINITY`.
    scores: Vec<f64>,
    /// `tp_cum[k]`: positives among the `k` highest scores.
    tp_cum: Vec<usize>,
    /// `fp_cum[k]`: negatives among the `k` highest scores.
    fp_cum: Vec<usize>,
    positives: usize,
    negatives: usize,
}

impl ThresholdSweep {
    /// Build a sweep from parallel label and score slices.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the slices differ in length; `DegenerateInput` if
    /// either class is absent (TPR or FPR would be undefined).
    pub fn new(labels: &[bool], scores: &[f64]) -> Result<Self> {
        if labels.len() != scores.len() {
            return Err(CutpointError::ShapeMismatch {
                labels: labels.len(),
                scores: scores.len(),
            });
        }
        let positives = labels.iter().filter(|&&l| l).count();
        let negatives = labels.len() - positives;
        if positives == 0 {
            return Err(CutpointError::DegenerateInput(
                "no positive labels; TPR is undefined".into(),
            ));
        }
        if negatives == 0 {
            return Err(CutpointError::DegenerateInput(
                "no negative labels; FPR is undefined".into(),
            ));
        }

        // NaN never satisfies a threshold; order it below every finite score.
        let mut order: Vec<(f64, bool)> = scores
            .iter()
            .zip(labels)
            .map(|(&s, &l)| (if s.is_nan() { f64::NEG_INFINITY } else { s }, l))
            .collect();
        order.sort_unstable_by(|a, b| b.0.total_cmp(&a.0));

        let n = order.len();
        let mut tp_cum = Vec::with_capacity(n + 1);
        let mut fp_cum = Vec::with_capacity(n + 1);
        tp_cum.push(0);
        fp_cum.push(0);
        let (mut tp, mut fp) = (0usize, 0usize);
        for &(_, label) in &order {
            if label {
                tp += 1;
            } else {
                fp += 1;
            }
            tp_cum.push(tp);
            fp_cum.push(fp);
        }

        Ok(Self {
            scores: order.into_iter().map(|(s, _)| s).collect(),
            tp_cum,
            fp_cum,
            positives,
            negatives,
        })
    }

    /// Number of scored samples.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Total positives, including scores outside any histogram range.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Total negatives, including scores outside any histogram range.
    pub fn negatives(&self) -> usize {
        self.negatives
    }

    /// Confusion counts with `score >= threshold` predicting positive.
    pub fn counts_at(&self, threshold: f64) -> ThresholdCounts {
        let cut = self.scores.partition_point(|&s| s >= threshold);
        let tp = self.tp_cum[cut];
        let fp = self.fp_cum[cut];
        ThresholdCounts {
            true_positives: tp,
            false_positives: fp,
            true_negatives: self.negatives - fp,
            false_negatives: self.positives - tp,
        }
    }

    /// TPR, FPR and accuracy with `score >= threshold` predicting positive.
    pub fn metrics_at(&self, threshold: f64) -> ThresholdMetrics {
        let c = self.counts_at(threshold);
        let p = self.positives as f64;
        let n = self.negatives as f64;
        ThresholdMetrics {
            tpr: c.true_positives as f64 / (p + EPS),
            fpr: c.false_positives as f64 / (n + EPS),
            accuracy: (c.true_positives + c.true_negatives) as f64 / (p + n + EPS),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
