//! Challenge - one self-contained training scenario with its own options.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::option::{find_option, OptionItem, OptionKind};
use crate::domain::foundation::{ChallengeId, OptionId, ValidationError};

/// Easiest difficulty rating.
pub const MIN_DIFFICULTY: u8 = 1;

/// Hardest difficulty rating.
pub const MAX_DIFFICULTY: u8 = 3;

/// A training scenario describing an AI-adoption dilemma.
///
/// # Invariants
///
/// - `difficulty` is 1-3
/// - every option list is non-empty with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub context: String,
    #[serde(default)]
    pub publics: Vec<String>,
    pub difficulty: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert_comment: Option<String>,
    pub use_cases: Vec<OptionItem>,
    pub benefits: Vec<OptionItem>,
    pub data: Vec<OptionItem>,
    pub risks: Vec<OptionItem>,
}

impl Challenge {
    /// Creates a challenge with empty option lists.
    pub fn new(id: impl Into<String>, title: impl Into<String>, difficulty: u8) -> Self {
        Self {
            id: ChallengeId::from(id.into().as_str()),
            title: title.into(),
            description: String::new(),
            context: String::new(),
            publics: Vec::new(),
            difficulty,
            expert_comment: None,
            use_cases: Vec::new(),
            benefits: Vec::new(),
            data: Vec::new(),
            risks: Vec::new(),
        }
    }

    /// Returns the option list of the given kind.
    ///
    /// Safeguards are catalog-wide, so they yield an empty slice here.
    pub fn options(&self, kind: OptionKind) -> &[OptionItem] {
        match kind {
            OptionKind::UseCase => &self.use_cases,
            OptionKind::Benefit => &self.benefits,
            OptionKind::Data => &self.data,
            OptionKind::Risk => &self.risks,
            OptionKind::Safeguard => &[],
        }
    }

    /// Finds an option of the given kind.
    pub fn find_option(&self, kind: OptionKind, id: &OptionId) -> Option<&OptionItem> {
        find_option(self.options(kind), id)
    }

    /// Finds a use-case option.
    pub fn find_use_case(&self, id: &OptionId) -> Option<&OptionItem> {
        find_option(&self.use_cases, id)
    }

    /// Finds a risk option.
    pub fn find_risk(&self, id: &OptionId) -> Option<&OptionItem> {
        find_option(&self.risks, id)
    }

    /// Validates difficulty and option lists.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.title", self.id)));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(ValidationError::out_of_range(
                format!("{}.difficulty", self.id),
                MIN_DIFFICULTY as i32,
                MAX_DIFFICULTY as i32,
                self.difficulty as i32,
            ));
        }
        for kind in [
            OptionKind::UseCase,
            OptionKind::Benefit,
            OptionKind::Data,
            OptionKind::Risk,
        ] {
            let field = format!("{}.{}", self.id, kind);
            validate_option_list(&field, self.options(kind))?;
        }
        Ok(())
    }
}

/// Checks that an option list is non-empty, has unique ids and valid entries.
pub(crate) fn validate_option_list(
    field: &str,
    options: &[OptionItem],
) -> Result<(), ValidationError> {
    if options.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let mut seen = HashSet::new();
    for option in options {
        option.validate()?;
        if !seen.insert(&option.id) {
            return Err(ValidationError::invalid_format(
                field,
                format!("duplicate option id '{}'", option.id),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Challenge {
        let mut c = Challenge::new("c9", "Test ridge", 2);
        c.use_cases = vec![OptionItem::new("chat", "Chatbot")];
        c.benefits = vec![OptionItem::new("eff", "Time saved")];
        c.data = vec![OptionItem::new("grades", "Grades")];
        c.risks = vec![OptionItem::new("bias", "Bias").with_risk_factor(5)];
        c
    }

    #[test]
    fn minimal_challenge_is_valid() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn difficulty_out_of_range_is_rejected() {
        let mut c = minimal();
        c.difficulty = 4;
        assert!(matches!(
            c.validate(),
            Err(ValidationError::OutOfRange { actual: 4, .. })
        ));
    }

    #[test]
    fn empty_option_list_is_rejected() {
        let mut c = minimal();
        c.risks.clear();
        assert_eq!(
            c.validate(),
            Err(ValidationError::empty_field("c9.selected_risks"))
        );
    }

    #[test]
    fn duplicate_option_ids_are_rejected() {
        let mut c = minimal();
        c.benefits.push(OptionItem::new("eff", "Again"));
        assert!(matches!(
            c.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn safeguards_are_not_challenge_options() {
        assert!(minimal().options(OptionKind::Safeguard).is_empty());
    }

    #[test]
    fn find_option_by_kind() {
        let c = minimal();
        assert!(c.find_option(OptionKind::Data, &OptionId::from("grades")).is_some());
        assert!(c.find_option(OptionKind::Risk, &OptionId::from("grades")).is_none());
    }
}
