//! Decision-specific error types.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Fields checked before leaving the design stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignField {
    UseCase,
    Benefits,
    Data,
    Risks,
}

impl fmt::Display for DesignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DesignField::UseCase => "use_case",
            DesignField::Benefits => "selected_benefits",
            DesignField::Data => "selected_data",
            DesignField::Risks => "selected_risks",
        };
        f.write_str(s)
    }
}

/// Fields checked before leaving the strategy stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyField {
    Ambition,
    Safeguards,
}

impl fmt::Display for StrategyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyField::Ambition => "ambition",
            StrategyField::Safeguards => "selected_safeguards",
        };
        f.write_str(s)
    }
}

/// A stage submission that does not satisfy the stage's completeness rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("Design stage incomplete, missing: {}", join(.missing))]
    IncompleteDesign { missing: Vec<DesignField> },

    #[error("Strategy stage incomplete, missing: {}", join(.missing))]
    IncompleteStrategy { missing: Vec<StrategyField> },
}

fn join<T: fmt::Display>(fields: &[T]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DecisionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::IncompleteDesign { .. } => ErrorCode::IncompleteDesign,
            DecisionError::IncompleteStrategy { .. } => ErrorCode::IncompleteStrategy,
        }
    }

    /// Comma-separated names of the missing fields.
    pub fn missing_fields(&self) -> String {
        match self {
            DecisionError::IncompleteDesign { missing } => join(missing),
            DecisionError::IncompleteStrategy { missing } => join(missing),
        }
    }
}

impl From<DecisionError> for DomainError {
    fn from(err: DecisionError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("missing", err.missing_fields())
    }
}
