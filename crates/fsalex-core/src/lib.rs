//! Shared value types for fsalex.
//!
//! - [`state`] -- State identifiers
//! - [`verdict`] -- Evaluation outcome and rejection reasons

pub mod state;
pub mod verdict;

pub use state::StateId;
pub use verdict::{Rejection, Verdict};
