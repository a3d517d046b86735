//! Error types for the cutpoint ecosystem.

use thiserror::Error;

/// Unified error type for all cutpoint operations.
#[derive(Debug, Error)]
pub enum CutpointError {
    /// Label and score vectors have different lengths.
    #[error("shape mismatch: {labels} labels vs {scores} scores")]
    ShapeMismatch { labels: usize, scores: usize },

    /// The input cannot support the computation (e.g. a single-class label
    /// vector, for which TPR or FPR is undefined).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A structurally invalid parameter (zero bins, inverted range, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A drawing backend failed while rendering a chart.
    #[error("render error: {0}")]
    Render(String),
}

/// Convenience result type for cutpoint operations.
pub type Result<T> = std::result::Result<T, CutpointError>;

// ── Tests ──────────────────────────────────────────────────────────────────
