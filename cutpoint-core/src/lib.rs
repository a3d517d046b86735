//! Shared primitives for the cutpoint ecosystem.
//!
//! `cutpoint-core` provides the foundation the other cutpoint crates build on:
//!
//! - **Error types** — [`CutpointError`] and [`Result`] for structured error handling
//! - **Traits** — [`Binned`] for types laid out over score bins, [`Summarize`]
//!   for one-line descriptions of computed artifacts

pub mod error;
pub mod traits;

pub use error::{CutpointError, Result};
pub use traits::*;
