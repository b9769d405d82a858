//! Catalog - the validated, immutable set of challenges and safeguards.

use std::collections::HashSet;

use super::challenge::{validate_option_list, Challenge};
use super::option::{find_option, OptionItem};
use crate::domain::foundation::{ChallengeId, OptionId, ValidationError};

/// Immutable content dataset.
///
/// # Invariants
///
/// - at least one challenge, challenge ids unique
/// - every challenge passes [`Challenge::validate`]
/// - safeguard list non-empty with unique ids
///
/// Only constructed through [`Catalog::new`]; the YAML adapter parses its own
/// document shape and validates through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    challenges: Vec<Challenge>,
    safeguards: Vec<OptionItem>,
}

impl Catalog {
    /// Builds a validated catalog.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no challenges or no safeguards
    /// - `InvalidFormat` on duplicate challenge or safeguard ids
    /// - any error from [`Challenge::validate`]
    pub fn new(
        challenges: Vec<Challenge>,
        safeguards: Vec<OptionItem>,
    ) -> Result<Self, ValidationError> {
        if challenges.is_empty() {
            return Err(ValidationError::empty_field("challenges"));
        }
        let mut seen = HashSet::new();
        for challenge in &challenges {
            challenge.validate()?;
            if !seen.insert(&challenge.id) {
                return Err(ValidationError::invalid_format(
                    "challenges",
                    format!("duplicate challenge id '{}'", challenge.id),
                ));
            }
        }
        validate_option_list("safeguards", &safeguards)?;

        Ok(Self {
            challenges,
            safeguards,
        })
    }

    /// Returns challenges in catalog order.
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Returns the catalog-wide safeguards.
    pub fn safeguards(&self) -> &[OptionItem] {
        &self.safeguards
    }

    /// Finds a challenge by id.
    pub fn find_challenge(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| &c.id == id)
    }

    /// Finds a safeguard by id.
    pub fn find_safeguard(&self, id: &OptionId) -> Option<&OptionItem> {
        find_option(&self.safeguards, id)
    }

    /// Number of challenges.
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Always false for a validated catalog; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
