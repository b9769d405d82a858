//! Decision module - accumulation of stage choices.
//!
//! The decision is owned by the active attempt and mutated only through
//! full-replace merges of a stage submission.

#[allow(clippy::module_inception)]
mod decision;
mod errors;
mod selection;

pub use decision::{Decision, DesignSubmission, StrategySubmission};
pub use errors::{DecisionError, DesignField, StrategyField};
pub use selection::Selection;
