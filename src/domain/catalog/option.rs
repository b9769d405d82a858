//! Selectable options offered by a challenge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{OptionId, ValidationError};

/// Lowest risk factor an option may carry.
pub const MIN_RISK_FACTOR: u8 = 1;

/// Highest risk factor an option may carry.
pub const MAX_RISK_FACTOR: u8 = 5;

/// A single selectable option.
///
/// `risk_factor` is only meaningful on risk options and only feeds the
/// risk forecast; scoring never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: OptionId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factor: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_feedback: Option<String>,
}

impl OptionItem {
    /// Creates an option with no risk factor and no feedback.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: OptionId::from(id.into().as_str()),
            label: label.into(),
            risk_factor: None,
            educational_feedback: None,
        }
    }

    /// Attaches a risk factor.
    pub fn with_risk_factor(mut self, risk_factor: u8) -> Self {
        self.risk_factor = Some(risk_factor);
        self
    }

    /// Attaches educational feedback text.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.educational_feedback = Some(feedback.into());
        self
    }

    /// Validates label and risk factor bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.label", self.id)));
        }
        if let Some(rf) = self.risk_factor {
            if !(MIN_RISK_FACTOR..=MAX_RISK_FACTOR).contains(&rf) {
                return Err(ValidationError::out_of_range(
                    format!("{}.risk_factor", self.id),
                    MIN_RISK_FACTOR as i32,
                    MAX_RISK_FACTOR as i32,
                    rf as i32,
                ));
            }
        }
        Ok(())
    }
}

/// The option lists a learner picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    UseCase,
    Benefit,
    Data,
    Risk,
    Safeguard,
}

impl OptionKind {
    /// Returns the decision field fed by this option list.
    pub fn field_name(&self) -> &'static str {
        match self {
            OptionKind::UseCase => "use_case",
            OptionKind::Benefit => "selected_benefits",
            OptionKind::Data => "selected_data",
            OptionKind::Risk => "selected_risks",
            OptionKind::Safeguard => "selected_safeguards",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Finds an option by id in a list.
pub fn find_option<'a>(options: &'a [OptionItem], id: &OptionId) -> Option<&'a OptionItem> {
    options.iter().find(|o| &o.id == id)
}
