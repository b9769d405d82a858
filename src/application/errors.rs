//! Application error types.

use thiserror::Error;

use crate::domain::catalog::OptionKind;
use crate::domain::flow::FlowError;
use crate::domain::foundation::{ChallengeId, DomainError, ErrorCode, OptionId};

/// Errors returned by [`Trainer`](super::Trainer) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    #[error("Challenge not found: {0}")]
    UnknownChallenge(ChallengeId),

    #[error("Unknown option '{id}' for {field}")]
    UnknownOption { field: OptionKind, id: OptionId },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl TrainerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TrainerError::UnknownChallenge(_) => ErrorCode::ChallengeNotFound,
            TrainerError::UnknownOption { .. } => ErrorCode::OptionNotFound,
            TrainerError::Flow(err) => err.code(),
        }
    }
}

impl From<TrainerError> for DomainError {
    fn from(err: TrainerError) -> Self {
        match err {
            TrainerError::Flow(inner) => inner.into(),
            TrainerError::UnknownChallenge(ref id) => {
                DomainError::new(err.code(), err.to_string()).with_detail("challenge_id", id.as_str())
            }
            TrainerError::UnknownOption { field, ref id } => {
                DomainError::new(err.code(), err.to_string())
                    .with_detail("field", field.field_name())
                    .with_detail("id", id.as_str())
            }
        }
    }
}
