use std::path::PathBuf;

use crate::domain::catalog::{Challenge, OptionItem};
use crate::domain::foundation::{ChallengeId, DomainError, ErrorCode, OptionId, ValidationError};

/// Read-only port for the training content.
///
/// Loaded once and shared between sessions, hence `Send + Sync`.
pub trait ContentCatalog: Send + Sync {
    /// Challenges in catalog order.
    fn challenges(&self) -> &[Challenge];

    /// Safeguards offered on every challenge.
    fn safeguards(&self) -> &[OptionItem];

    fn find_challenge(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges().iter().find(|c| &c.id == id)
    }

    fn find_safeguard(&self, id: &OptionId) -> Option<&OptionItem> {
        self.safeguards().iter().find(|s| &s.id == id)
    }

    fn challenge_count(&self) -> usize {
        self.challenges().len()
    }
}

/// Errors that can occur while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::CatalogInvalid
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCatalog {
        challenges: Vec<Challenge>,
        safeguards: Vec<OptionItem>,
    }

    impl ContentCatalog for FixedCatalog {
        fn challenges(&self) -> &[Challenge] {
            &self.challenges
        }

        fn safeguards(&self) -> &[OptionItem] {
            &self.safeguards
        }
    }

    #[test]
    fn default_lookups_use_the_lists() {
        let catalog = FixedCatalog {
            challenges: vec![Challenge::new("c1", "One", 1), Challenge::new("c2", "Two", 2)],
            safeguards: vec![OptionItem::new("privacy", "GDPR")],
        };

        assert_eq!(catalog.challenge_count(), 2);
        assert_eq!(
            catalog.find_challenge(&ChallengeId::from("c2")).map(|c| c.title.as_str()),
            Some("Two")
        );
        assert!(catalog.find_challenge(&ChallengeId::from("c9")).is_none());
        assert!(catalog.find_safeguard(&OptionId::from("privacy")).is_some());
    }

    #[test]
    fn errors_map_to_catalog_invalid() {
        let err: DomainError = CatalogError::Invalid(ValidationError::empty_field("challenges")).into();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
        assert!(err.message.contains("challenges"));
    }
}
