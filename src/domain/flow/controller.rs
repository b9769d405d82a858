//! Flow controller - the only owner of mutable training state.
//!
//! Every operation validates the requested transition against
//! [`ScreenKind`] first and builds the next screen from clones, so a
//! rejected request leaves the controller exactly as it was.

use tracing::{info, warn};

use super::{ActiveAttempt, FlowError, Screen, ScreenKind};
use crate::domain::catalog::Challenge;
use crate::domain::decision::{Decision, DesignSubmission, StrategySubmission};
use crate::domain::foundation::{SessionId, StateMachine, Timestamp};
use crate::domain::history::{CompletedRecord, SessionHistory};
use crate::domain::scoring::{Evaluation, ScoringEngine};

#[derive(Debug)]
pub struct FlowController {
    session_id: SessionId,
    screen: Screen,
    history: SessionHistory,
    engine: ScoringEngine,
}

impl FlowController {
    /// New session on the home screen with the standard scoring rules.
    pub fn new() -> Self {
        Self::with_engine(ScoringEngine::new())
    }

    pub fn with_engine(engine: ScoringEngine) -> Self {
        Self {
            session_id: SessionId::new(),
            screen: Screen::Home,
            history: SessionHistory::new(),
            engine,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.screen.attempt().map(|a| &a.challenge)
    }

    pub fn decision(&self) -> Option<&Decision> {
        self.screen.attempt().map(|a| &a.decision)
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.screen.evaluation()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Home -> Map.
    pub fn start(&mut self) -> Result<(), FlowError> {
        self.guard(ScreenKind::Map)?;
        self.enter(Screen::Map);
        Ok(())
    }

    /// Map -> Design with a fresh decision for `challenge`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the map
    /// - `ChallengeAlreadyCompleted` if the challenge is in history
    pub fn select_challenge(&mut self, challenge: &Challenge) -> Result<(), FlowError> {
        self.guard(ScreenKind::Design)?;
        if self.history.is_challenge_completed(&challenge.id) {
            warn!(
                session_id = %self.session_id,
                challenge_id = %challenge.id,
                "challenge already completed"
            );
            return Err(FlowError::ChallengeAlreadyCompleted(challenge.id.clone()));
        }
        self.enter(Screen::Design(ActiveAttempt::new(challenge.clone())));
        Ok(())
    }

    /// Design -> Strategy, replacing the design fields of the decision.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the design stage
    /// - `Decision(IncompleteDesign)` naming every missing field; the
    ///   stored decision is untouched
    pub fn submit_design(&mut self, submission: DesignSubmission) -> Result<(), FlowError> {
        self.guard(ScreenKind::Strategy)?;
        let Screen::Design(attempt) = &self.screen else {
            return Err(self.reject(ScreenKind::Strategy));
        };

        let mut decision = attempt.decision.clone();
        decision.merge_design(submission);
        decision.check_design()?;

        let next = Screen::Strategy(attempt.with_decision(decision));
        self.enter(next);
        Ok(())
    }

    /// Strategy -> Design. The decision is kept as is.
    pub fn back_to_design(&mut self) -> Result<(), FlowError> {
        self.guard(ScreenKind::Design)?;
        let Screen::Strategy(attempt) = &self.screen else {
            return Err(self.reject(ScreenKind::Design));
        };
        let next = Screen::Design(attempt.clone());
        self.enter(next);
        Ok(())
    }

    /// Strategy -> Result. Merges the strategy and scores the decision.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the strategy stage
    /// - `Decision(IncompleteStrategy)`; the stored decision is untouched
    pub fn submit_strategy(&mut self, submission: StrategySubmission) -> Result<&Evaluation, FlowError> {
        self.guard(ScreenKind::Result)?;
        let Screen::Strategy(attempt) = &self.screen else {
            return Err(self.reject(ScreenKind::Result));
        };

        let mut decision = attempt.decision.clone();
        decision.merge_strategy(submission);
        decision.check_strategy()?;
        let evaluation = self.engine.evaluate(&attempt.challenge, &decision)?;

        let next = Screen::Result {
            attempt: attempt.with_decision(decision),
            evaluation,
        };
        self.enter(next);
        self.screen.evaluation().ok_or(FlowError::InvalidTransition {
            from: ScreenKind::Strategy,
            to: ScreenKind::Result,
        })
    }

    /// Result -> Map. Records the attempt in history and returns the record.
    ///
    /// A previous record for the same challenge is replaced.
    pub fn finalize_and_save(&mut self) -> Result<CompletedRecord, FlowError> {
        self.guard(ScreenKind::Map)?;
        let Screen::Result {
            attempt,
            evaluation,
        } = &self.screen
        else {
            return Err(self.reject(ScreenKind::Map));
        };

        let record = CompletedRecord::new(attempt.decision.clone(), evaluation, Timestamp::now());
        let replaced = self.history.record(record.clone());
        info!(
            session_id = %self.session_id,
            challenge_id = %record.challenge_id(),
            score = record.score().value(),
            replaced = replaced.is_some(),
            "attempt saved"
        );
        self.enter(Screen::Map);
        Ok(record)
    }

    /// Any non-home screen -> Dashboard. An attempt in progress is paused.
    pub fn open_dashboard(&mut self) -> Result<(), FlowError> {
        self.guard(ScreenKind::Dashboard)?;
        let paused = self.screen.attempt().cloned();
        self.enter(Screen::Dashboard { paused });
        Ok(())
    }

    /// Dashboard -> Map, abandoning any paused attempt.
    pub fn replay(&mut self) -> Result<(), FlowError> {
        if self.screen_kind() != ScreenKind::Dashboard {
            return Err(self.reject(ScreenKind::Map));
        }
        self.guard(ScreenKind::Map)?;
        self.enter(Screen::Map);
        Ok(())
    }

    /// Any non-home screen -> Home. History is kept.
    pub fn go_home(&mut self) -> Result<(), FlowError> {
        self.guard(ScreenKind::Home)?;
        self.enter(Screen::Home);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn guard(&self, to: ScreenKind) -> Result<(), FlowError> {
        self.screen_kind()
            .transition_to(to)
            .map(|_| ())
            .map_err(|_| self.reject(to))
    }

    fn reject(&self, to: ScreenKind) -> FlowError {
        let from = self.screen_kind();
        warn!(session_id = %self.session_id, %from, %to, "transition rejected");
        FlowError::InvalidTransition { from, to }
    }

    fn enter(&mut self, next: Screen) {
        let from = self.screen_kind();
        self.screen = next;
        info!(
            session_id = %self.session_id,
            %from,
            to = %self.screen_kind(),
            "screen changed"
        );
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}
