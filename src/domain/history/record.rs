use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::foundation::{ChallengeId, Score, Timestamp, Verdict};
use crate::domain::scoring::Evaluation;

/// A saved attempt. Created once on save and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRecord {
    challenge_id: ChallengeId,
    decision: Decision,
    score: Score,
    feedback: Vec<String>,
    completed_at: Timestamp,
}

impl CompletedRecord {
    /// Freezes a decision together with its evaluation.
    pub fn new(decision: Decision, evaluation: &Evaluation, completed_at: Timestamp) -> Self {
        Self {
            challenge_id: decision.challenge_id().clone(),
            score: evaluation.score(),
            feedback: evaluation.feedback_lines(),
            decision,
            completed_at,
        }
    }

    pub fn challenge_id(&self) -> &ChallengeId {
        &self.challenge_id
    }

    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn verdict(&self) -> Verdict {
        self.score.verdict()
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn completed_at(&self) -> Timestamp {
        self.completed_at
    }
}
