//! Flow-specific error types.

use thiserror::Error;

use super::ScreenKind;
use crate::domain::decision::DecisionError;
use crate::domain::foundation::{ChallengeId, DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: ScreenKind, to: ScreenKind },

    #[error("Challenge {0} is already completed")]
    ChallengeAlreadyCompleted(ChallengeId),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

impl FlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            FlowError::ChallengeAlreadyCompleted(_) => ErrorCode::ChallengeAlreadyCompleted,
            FlowError::Decision(err) => err.code(),
        }
    }
}

impl From<FlowError> for DomainError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Decision(inner) => inner.into(),
            FlowError::InvalidTransition { from, to } => {
                DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
                    .with_detail("from", from.to_string())
                    .with_detail("to", to.to_string())
            }
            FlowError::ChallengeAlreadyCompleted(ref id) => {
                DomainError::new(err.code(), err.to_string()).with_detail("challenge_id", id.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DesignField;

    #[test]
    fn invalid_transition_message_names_both_screens() {
        let err = FlowError::InvalidTransition {
            from: ScreenKind::Home,
            to: ScreenKind::Dashboard,
        };
        assert_eq!(err.to_string(), "Cannot move from Home to Dashboard");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn decision_errors_keep_their_code() {
        let err: FlowError = DecisionError::IncompleteDesign {
            missing: vec![DesignField::Data],
        }
        .into();
        assert_eq!(err.code(), ErrorCode::IncompleteDesign);

        let domain: DomainError = err.into();
        assert_eq!(domain.details.get("missing"), Some(&"selected_data".to_string()));
    }
}
