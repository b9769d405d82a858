//! Dashboard module - read-only summaries of a session's history.

pub mod overview;

pub use overview::{HistoryRow, HistorySummary};
