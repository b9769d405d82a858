//! Catalog module - read-only training content.
//!
//! Challenges, their option lists, the catalog-wide safeguards and the
//! ambition levels a learner can declare. Nothing here is mutated after load.

#[allow(clippy::module_inception)]
mod catalog;
mod ambition;
mod challenge;
mod option;

pub use ambition::AmbitionLevel;
pub use catalog::Catalog;
pub use challenge::{Challenge, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use option::{find_option, OptionItem, OptionKind, MAX_RISK_FACTOR, MIN_RISK_FACTOR};
