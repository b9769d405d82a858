//! Scoring module - turns a completed decision into a score and feedback.
//!
//! Evaluation is pure: the same challenge and decision always produce the
//! same [`Evaluation`].

mod engine;
mod feedback;
mod forecast;
mod rules;

pub use engine::{Evaluation, ScoringEngine};
pub use feedback::{FeedbackItem, Severity};
pub use forecast::{RiskForecast, RiskOutlook};
pub use rules::{
    challenge_rules, is_sensitive_data, orientation_automation, standard_rules, ChallengeRule,
    RuleContext, RuleOutcome, ScoreAdjustment, ScoringRule, BASE_SCORE, NO_AI_SCORE,
};
