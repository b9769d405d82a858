//! Scoring engine - folds the ordered rules over a running score sheet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::feedback::{FeedbackItem, Severity};
use super::rules::{challenge_rules, standard_rules, RuleContext, RuleOutcome, ScoringRule, BASE_SCORE};
use crate::domain::catalog::Challenge;
use crate::domain::decision::{Decision, DecisionError, StrategyField};
use crate::domain::foundation::{Score, ScoreBand};

/// Running accumulator threaded through the rule fold.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreSheet {
    running: i32,
    feedback: Vec<FeedbackItem>,
}

impl ScoreSheet {
    fn apply(mut self, outcome: RuleOutcome) -> Self {
        self.running = outcome.adjustment.apply(self.running);
        self.feedback.extend(outcome.feedback);
        self
    }

    fn finish(self) -> Evaluation {
        Evaluation {
            score: Score::clamped(self.running),
            feedback: self.feedback,
        }
    }
}

/// Final score and feedback, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    score: Score,
    feedback: Vec<FeedbackItem>,
}

impl Evaluation {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn band(&self) -> ScoreBand {
        self.score.band()
    }

    pub fn feedback(&self) -> &[FeedbackItem] {
        &self.feedback
    }

    /// Flattened `"<title>: <message>"` lines, as stored in history.
    pub fn feedback_lines(&self) -> Vec<String> {
        self.feedback.iter().map(ToString::to_string).collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.feedback.iter().filter(|f| f.severity == severity).count()
    }
}

/// Pure, deterministic scorer.
///
/// Rules run in the order they were added: the standard rules, then the
/// challenge-specific rules, then anything appended with [`with_rule`].
/// The running total is clamped to 0-100 only once, at the end.
///
/// [`with_rule`]: ScoringEngine::with_rule
#[derive(Debug)]
pub struct ScoringEngine {
    rules: Vec<ScoringRule>,
}

impl ScoringEngine {
    /// Engine with the standard and challenge-specific rules.
    pub fn new() -> Self {
        let mut rules = standard_rules();
        rules.extend(challenge_rules());
        Self { rules }
    }

    /// Engine with an explicit rule list, starting from the base score.
    pub fn with_rules(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    /// Appends a rule after the existing ones.
    pub fn with_rule(mut self, rule: ScoringRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(ScoringRule::name).collect()
    }

    /// Scores a completed decision.
    ///
    /// # Errors
    ///
    /// - `IncompleteStrategy` if the decision has no ambition yet
    pub fn evaluate(
        &self,
        challenge: &Challenge,
        decision: &Decision,
    ) -> Result<Evaluation, DecisionError> {
        let ambition = decision
            .ambition()
            .ok_or_else(|| DecisionError::IncompleteStrategy {
                missing: vec![StrategyField::Ambition],
            })?;

        let ctx = RuleContext {
            challenge,
            decision,
            ambition,
        };

        let start = ScoreSheet {
            running: BASE_SCORE,
            feedback: Vec::new(),
        };
        let sheet = self.rules.iter().fold(start, |sheet, rule| {
            let outcome = rule.apply(&ctx);
            debug!(
                rule = rule.name(),
                adjustment = ?outcome.adjustment,
                items = outcome.feedback.len(),
                "scoring rule applied"
            );
            sheet.apply(outcome)
        });

        let evaluation = sheet.finish();
        debug!(
            challenge_id = %challenge.id,
            score = evaluation.score.value(),
            "decision evaluated"
        );
        Ok(evaluation)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
