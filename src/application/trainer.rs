//! Trainer - the external interface of one training session.
//!
//! Resolves ids against the content catalog, validates submitted option ids
//! and delegates every state change to the [`FlowController`].

use std::sync::Arc;
use tracing::warn;

use super::errors::TrainerError;
use super::snapshot::{ChallengeListing, StateSnapshot};
use crate::adapters::YamlCatalog;
use crate::config::AppConfig;
use crate::domain::catalog::{Challenge, OptionItem, OptionKind};
use crate::domain::dashboard::HistorySummary;
use crate::domain::decision::{DesignSubmission, Selection, StrategySubmission};
use crate::domain::flow::{FlowController, ScreenKind};
use crate::domain::foundation::{ChallengeId, OptionId, SessionId};
use crate::domain::history::{CompletedRecord, SessionHistory};
use crate::domain::scoring::{Evaluation, RiskOutlook, ScoringEngine};
use crate::ports::{CatalogError, ContentCatalog};

pub struct Trainer {
    catalog: Arc<dyn ContentCatalog>,
    flow: FlowController,
}

impl Trainer {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self::with_engine(catalog, ScoringEngine::new())
    }

    pub fn with_engine(catalog: Arc<dyn ContentCatalog>, engine: ScoringEngine) -> Self {
        Self {
            catalog,
            flow: FlowController::with_engine(engine),
        }
    }

    /// Builds a trainer over the configured catalog, or the embedded one.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog.path {
            Some(path) => YamlCatalog::from_path(path)?,
            None => YamlCatalog::builtin()?,
        };
        Ok(Self::new(Arc::new(catalog)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> SessionId {
        self.flow.session_id()
    }

    pub fn get_challenge(&self, id: &ChallengeId) -> Result<&Challenge, TrainerError> {
        self.catalog
            .find_challenge(id)
            .ok_or_else(|| TrainerError::UnknownChallenge(id.clone()))
    }

    /// Challenges in catalog order, tagged with completion.
    pub fn list_challenges(&self) -> Vec<ChallengeListing> {
        let history = self.flow.history();
        self.catalog
            .challenges()
            .iter()
            .map(|challenge| {
                let record = history.get(&challenge.id);
                ChallengeListing {
                    challenge: challenge.clone(),
                    completed: record.is_some(),
                    score: record.map(CompletedRecord::score),
                }
            })
            .collect()
    }

    pub fn safeguards(&self) -> &[OptionItem] {
        self.catalog.safeguards()
    }

    pub fn screen(&self) -> ScreenKind {
        self.flow.screen_kind()
    }

    pub fn history(&self) -> &SessionHistory {
        self.flow.history()
    }

    pub fn history_summary(&self) -> HistorySummary {
        HistorySummary::build(self.flow.history(), self.catalog.challenges())
    }

    pub fn current_state(&self) -> StateSnapshot {
        let active_challenge = self.flow.active_challenge();
        let decision = self.flow.decision();
        let risk_outlook = active_challenge
            .zip(decision)
            .map(|(challenge, decision)| RiskOutlook::for_selection(challenge, decision.selected_risks()));

        StateSnapshot {
            session_id: self.flow.session_id(),
            screen: self.flow.screen_kind(),
            active_challenge: active_challenge.cloned(),
            decision: decision.cloned(),
            evaluation: self.flow.evaluation().cloned(),
            risk_outlook,
            history_summary: self.history_summary(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn start(&mut self) -> Result<(), TrainerError> {
        Ok(self.flow.start()?)
    }

    pub fn select_challenge(&mut self, id: &ChallengeId) -> Result<(), TrainerError> {
        let challenge = self
            .catalog
            .find_challenge(id)
            .ok_or_else(|| TrainerError::UnknownChallenge(id.clone()))?;
        Ok(self.flow.select_challenge(challenge)?)
    }

    /// Validates option ids against the active challenge, then submits.
    pub fn submit_design(&mut self, submission: DesignSubmission) -> Result<(), TrainerError> {
        if self.flow.screen_kind() == ScreenKind::Design {
            if let Some(challenge) = self.flow.active_challenge() {
                self.check_design_options(challenge, &submission)?;
            }
        }
        Ok(self.flow.submit_design(submission)?)
    }

    pub fn back_to_design(&mut self) -> Result<(), TrainerError> {
        Ok(self.flow.back_to_design()?)
    }

    /// Validates safeguard ids against the catalog, then submits and scores.
    pub fn submit_strategy(
        &mut self,
        submission: StrategySubmission,
    ) -> Result<&Evaluation, TrainerError> {
        if self.flow.screen_kind() == ScreenKind::Strategy {
            self.check_options(
                OptionKind::Safeguard,
                self.catalog.safeguards(),
                &submission.safeguards,
            )?;
        }
        Ok(self.flow.submit_strategy(submission)?)
    }

    pub fn finalize_and_save(&mut self) -> Result<CompletedRecord, TrainerError> {
        Ok(self.flow.finalize_and_save()?)
    }

    pub fn open_dashboard(&mut self) -> Result<(), TrainerError> {
        Ok(self.flow.open_dashboard()?)
    }

    pub fn replay(&mut self) -> Result<(), TrainerError> {
        Ok(self.flow.replay()?)
    }

    pub fn go_home(&mut self) -> Result<(), TrainerError> {
        Ok(self.flow.go_home()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    fn check_design_options(
        &self,
        challenge: &Challenge,
        submission: &DesignSubmission,
    ) -> Result<(), TrainerError> {
        // A blank use case is reported as missing by the flow, not as unknown.
        if let Some(use_case) = submission.use_case.as_ref().filter(|id| !id.is_blank()) {
            self.check_option(OptionKind::UseCase, &challenge.use_cases, use_case)?;
        }
        self.check_options(OptionKind::Benefit, &challenge.benefits, &submission.benefits)?;
        self.check_options(OptionKind::Data, &challenge.data, &submission.data)?;
        self.check_options(OptionKind::Risk, &challenge.risks, &submission.risks)?;
        Ok(())
    }

    fn check_options(
        &self,
        field: OptionKind,
        options: &[OptionItem],
        selection: &Selection,
    ) -> Result<(), TrainerError> {
        selection
            .iter()
            .try_for_each(|id| self.check_option(field, options, id))
    }

    fn check_option(
        &self,
        field: OptionKind,
        options: &[OptionItem],
        id: &OptionId,
    ) -> Result<(), TrainerError> {
        if options.iter().any(|o| &o.id == id) {
            return Ok(());
        }
        warn!(
            session_id = %self.flow.session_id(),
            %field,
            id = %id,
            "unknown option submitted"
        );
        Err(TrainerError::UnknownOption {
            field,
            id: id.clone(),
        })
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod trainer_test;
