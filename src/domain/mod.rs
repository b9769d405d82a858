//! Domain layer containing the training exercise logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, score, timestamp, errors, state machine)
//! - `catalog` - Challenges, options and ambition levels
//! - `decision` - Accumulation of stage choices into a decision
//! - `scoring` - Rule-based evaluation of a completed decision
//! - `history` - Completed attempts of a session
//! - `flow` - Screen state machine driving a session
//! - `dashboard` - Read-only summaries of the history

pub mod catalog;
pub mod dashboard;
pub mod decision;
pub mod flow;
pub mod foundation;
pub mod history;
pub mod scoring;
