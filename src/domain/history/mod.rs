//! History module - completed attempts of one session.

#[allow(clippy::module_inception)]
mod history;
mod record;

pub use history::SessionHistory;
pub use record::CompletedRecord;
