//! Decision - the learner's accumulated choices for the active challenge.

use serde::{Deserialize, Serialize};

use super::errors::{DecisionError, DesignField, StrategyField};
use super::selection::Selection;
use crate::domain::catalog::{AmbitionLevel, Challenge};
use crate::domain::foundation::{ChallengeId, OptionId};

/// Choices submitted when leaving the design stage.
///
/// Every field fully replaces its counterpart in the decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSubmission {
    pub use_case: Option<OptionId>,
    #[serde(default)]
    pub benefits: Selection,
    #[serde(default)]
    pub data: Selection,
    #[serde(default)]
    pub risks: Selection,
}

/// Choices submitted when leaving the strategy stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySubmission {
    pub ambition: Option<AmbitionLevel>,
    #[serde(default)]
    pub safeguards: Selection,
}

/// In-progress decision record.
///
/// # Invariants (enforced by the flow, checked here)
///
/// - leaving design: `use_case` set, benefits/data/risks non-empty
/// - leaving strategy: `ambition` set; safeguards non-empty unless the
///   ambition is [`AmbitionLevel::None`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    challenge_id: ChallengeId,
    use_case: Option<OptionId>,
    selected_benefits: Selection,
    selected_data: Selection,
    selected_risks: Selection,
    selected_safeguards: Selection,
    ambition: Option<AmbitionLevel>,
}

impl Decision {
    /// Returns an empty decision stamped with the challenge id.
    ///
    /// Whether the challenge may be started at all is decided by the flow.
    pub fn start(challenge: &Challenge) -> Self {
        Self::empty(challenge.id.clone())
    }

    /// Returns an empty decision for a challenge id.
    pub fn empty(challenge_id: ChallengeId) -> Self {
        Self {
            challenge_id,
            use_case: None,
            selected_benefits: Selection::new(),
            selected_data: Selection::new(),
            selected_risks: Selection::new(),
            selected_safeguards: Selection::new(),
            ambition: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn challenge_id(&self) -> &ChallengeId {
        &self.challenge_id
    }

    pub fn use_case(&self) -> Option<&OptionId> {
        self.use_case.as_ref()
    }

    pub fn selected_benefits(&self) -> &Selection {
        &self.selected_benefits
    }

    pub fn selected_data(&self) -> &Selection {
        &self.selected_data
    }

    pub fn selected_risks(&self) -> &Selection {
        &self.selected_risks
    }

    pub fn selected_safeguards(&self) -> &Selection {
        &self.selected_safeguards
    }

    pub fn ambition(&self) -> Option<AmbitionLevel> {
        self.ambition
    }

    /// Returns the design fields as a submission, for re-editing the stage.
    pub fn design_draft(&self) -> DesignSubmission {
        DesignSubmission {
            use_case: self.use_case.clone(),
            benefits: self.selected_benefits.clone(),
            data: self.selected_data.clone(),
            risks: self.selected_risks.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the four design fields.
    pub fn merge_design(&mut self, submission: DesignSubmission) -> &Self {
        self.use_case = submission.use_case;
        self.selected_benefits = submission.benefits;
        self.selected_data = submission.data;
        self.selected_risks = submission.risks;
        self
    }

    /// Replaces ambition and safeguards.
    ///
    /// Safeguards submitted alongside `AmbitionLevel::None` are kept as given;
    /// they are simply not required.
    pub fn merge_strategy(&mut self, submission: StrategySubmission) -> &Self {
        self.ambition = submission.ambition;
        self.selected_safeguards = submission.safeguards;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completeness
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_design_complete(&self) -> bool {
        self.missing_design_fields().is_empty()
    }

    pub fn is_strategy_complete(&self) -> bool {
        self.missing_strategy_fields().is_empty()
    }

    /// # Errors
    ///
    /// - `IncompleteDesign` naming every missing field
    pub fn check_design(&self) -> Result<(), DecisionError> {
        let missing = self.missing_design_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DecisionError::IncompleteDesign { missing })
        }
    }

    /// # Errors
    ///
    /// - `IncompleteStrategy` naming every missing field
    pub fn check_strategy(&self) -> Result<(), DecisionError> {
        let missing = self.missing_strategy_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DecisionError::IncompleteStrategy { missing })
        }
    }

    fn missing_design_fields(&self) -> Vec<DesignField> {
        let mut missing = Vec::new();
        if self.use_case.as_ref().map_or(true, OptionId::is_blank) {
            missing.push(DesignField::UseCase);
        }
        if self.selected_benefits.is_empty() {
            missing.push(DesignField::Benefits);
        }
        if self.selected_data.is_empty() {
            missing.push(DesignField::Data);
        }
        if self.selected_risks.is_empty() {
            missing.push(DesignField::Risks);
        }
        missing
    }

    fn missing_strategy_fields(&self) -> Vec<StrategyField> {
        match self.ambition {
            None => vec![StrategyField::Ambition],
            Some(level) if level.deploys_ai() && self.selected_safeguards.is_empty() => {
                vec![StrategyField::Safeguards]
            }
            Some(_) => Vec::new(),
        }
    }
}
