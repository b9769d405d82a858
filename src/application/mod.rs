//! Application layer - the session-facing service.
//!
//! Orchestrates the flow controller over a shared content catalog.

mod errors;
mod snapshot;
mod trainer;

pub use errors::TrainerError;
pub use snapshot::{ChallengeListing, StateSnapshot};
pub use trainer::Trainer;
