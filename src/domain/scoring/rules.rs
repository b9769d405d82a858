//! Scoring rules.
//!
//! Each rule looks at the challenge and the completed decision and returns a
//! [`RuleOutcome`]: a score adjustment plus zero or more feedback items. The
//! engine folds the rules in order, so rule order is feedback order.

use std::fmt;

use super::feedback::FeedbackItem;
use crate::domain::catalog::{AmbitionLevel, Challenge};
use crate::domain::decision::Decision;
use crate::domain::foundation::ChallengeId;

/// Starting score before any rule runs.
pub const BASE_SCORE: i32 = 50;

/// Score assigned outright when the learner declines to deploy AI.
pub const NO_AI_SCORE: i32 = 70;

pub const PILOT_BONUS: i32 = 20;
pub const LOCAL_BONUS: i32 = 10;

/// Fewer than [`LIGHT_SAFEGUARD_COUNT`] safeguards.
pub const MISSING_SAFEGUARDS_PENALTY: i32 = -40;
/// At least [`LIGHT_SAFEGUARD_COUNT`] but fewer than [`FULL_SAFEGUARD_COUNT`].
pub const LIGHT_SAFEGUARDS_BONUS: i32 = 5;
/// [`FULL_SAFEGUARD_COUNT`] or more safeguards.
pub const FULL_SAFEGUARDS_BONUS: i32 = 20;

pub const LIGHT_SAFEGUARD_COUNT: usize = 2;
pub const FULL_SAFEGUARD_COUNT: usize = 4;

pub const SENSITIVE_DATA_PENALTY: i32 = -20;

/// Substrings of data option ids that mark personal or sensitive data.
pub const SENSITIVE_DATA_MARKERS: &[&str] = &["social", "medical", "grades", "softskills"];

/// Safeguard that covers sensitive data.
pub const PRIVACY_SAFEGUARD: &str = "privacy";

/// Safeguard banning fully automated decisions.
pub const NO_AUTOMATED_DECISION_SAFEGUARD: &str = "no_auto";

/// The orientation challenge and its recommendation use case.
pub const ORIENTATION_CHALLENGE: &str = "c1";
pub const RECOMMENDATION_USE_CASE: &str = "reco";
pub const ORIENTATION_AUTOMATION_PENALTY: i32 = -15;

/// What a rule sees.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub challenge: &'a Challenge,
    pub decision: &'a Decision,
    /// The decision's ambition; evaluation refuses decisions without one.
    pub ambition: AmbitionLevel,
}

/// How a rule changes the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAdjustment {
    Unchanged,
    Add(i32),
    /// Overwrites the running score.
    Set(i32),
}

impl ScoreAdjustment {
    pub fn apply(&self, running: i32) -> i32 {
        match self {
            ScoreAdjustment::Unchanged => running,
            ScoreAdjustment::Add(delta) => running + delta,
            ScoreAdjustment::Set(value) => *value,
        }
    }
}

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub adjustment: ScoreAdjustment,
    pub feedback: Vec<FeedbackItem>,
}

impl RuleOutcome {
    /// No score change, no feedback.
    pub fn skip() -> Self {
        Self {
            adjustment: ScoreAdjustment::Unchanged,
            feedback: Vec::new(),
        }
    }

    pub fn add(delta: i32, item: FeedbackItem) -> Self {
        Self {
            adjustment: ScoreAdjustment::Add(delta),
            feedback: vec![item],
        }
    }

    pub fn set(value: i32, item: FeedbackItem) -> Self {
        Self {
            adjustment: ScoreAdjustment::Set(value),
            feedback: vec![item],
        }
    }

    pub fn comment(items: Vec<FeedbackItem>) -> Self {
        Self {
            adjustment: ScoreAdjustment::Unchanged,
            feedback: items,
        }
    }
}

type RuleFn = dyn Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync;

/// A named scoring rule.
pub struct ScoringRule {
    name: &'static str,
    apply: Box<RuleFn>,
}

impl ScoringRule {
    pub fn new<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync + 'static,
    {
        Self {
            name,
            apply: Box::new(apply),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        (self.apply)(ctx)
    }
}

impl fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringRule").field("name", &self.name).finish()
    }
}

/// The general rules, in evaluation order.
pub fn standard_rules() -> Vec<ScoringRule> {
    vec![
        ScoringRule::new("ambition", ambition),
        ScoringRule::new("safeguard_adequacy", safeguard_adequacy),
        ScoringRule::new("use_case_commentary", use_case_commentary),
        ScoringRule::new("sensitive_data", sensitive_data),
        ScoringRule::new("risk_commentary", risk_commentary),
    ]
}

/// Scores the declared ambition. Declining AI overwrites the base score.
pub fn ambition(ctx: &RuleContext<'_>) -> RuleOutcome {
    match ctx.ambition {
        AmbitionLevel::None => RuleOutcome::set(
            NO_AI_SCORE,
            FeedbackItem::info(
                "Bivouac strategy",
                "Declining AI is a valid option. Sometimes technology is not the right answer \
                 to human problems. You favour stability, which is the decision of a careful manager.",
            ),
        ),
        AmbitionLevel::Pilot => RuleOutcome::add(
            PILOT_BONUS,
            FeedbackItem::info(
                "Traverse ambition (pilot)",
                "A multi-site pilot pools costs and lessons learned. It also demands much stricter \
                 data governance than a local trial.",
            ),
        ),
        AmbitionLevel::Local => RuleOutcome::add(
            LOCAL_BONUS,
            FeedbackItem::success(
                "Local trail ambition",
                "Local experimentation is ideal to build team familiarity and test the concept \
                 without systemic risk (proof of concept).",
            ),
        ),
    }
}

/// Grades the number of safeguards. Not applicable when no AI is deployed.
pub fn safeguard_adequacy(ctx: &RuleContext<'_>) -> RuleOutcome {
    if !ctx.ambition.deploys_ai() {
        return RuleOutcome::skip();
    }
    let count = ctx.decision.selected_safeguards().len();
    if count < LIGHT_SAFEGUARD_COUNT {
        RuleOutcome::add(
            MISSING_SAFEGUARDS_PENALTY,
            FeedbackItem::critical(
                "Danger: insufficient protection",
                "You are setting off without a rope! Launching an AI, even locally, without human \
                 oversight or transparency is serious professional misconduct given the ethical risks.",
            ),
        )
    } else if count < FULL_SAFEGUARD_COUNT {
        RuleOutcome::add(
            LIGHT_SAFEGUARDS_BONUS,
            FeedbackItem::warning(
                "Light equipment",
                "Your safeguards are a good start, but a public rollout will need stronger \
                 documentation and auditability.",
            ),
        )
    } else {
        RuleOutcome::add(
            FULL_SAFEGUARDS_BONUS,
            FeedbackItem::success(
                "Maximal safety",
                "Excellent waymarking! By combining safeguards (human, transparency, appeal) you \
                 create an essential framework of trust.",
            ),
        )
    }
}

/// Repeats the chosen use case's educational feedback, if any.
pub fn use_case_commentary(ctx: &RuleContext<'_>) -> RuleOutcome {
    let feedback = ctx
        .decision
        .use_case()
        .and_then(|id| ctx.challenge.find_use_case(id))
        .and_then(|option| option.educational_feedback.as_deref());

    match feedback {
        Some(text) => RuleOutcome::comment(vec![FeedbackItem::info("Use case analysis", text)]),
        None => RuleOutcome::skip(),
    }
}

/// Returns true if a data option id carries a sensitivity marker.
pub fn is_sensitive_data(id: &str) -> bool {
    SENSITIVE_DATA_MARKERS.iter().any(|marker| id.contains(marker))
}

/// Penalises sensitive data selected without the privacy safeguard.
pub fn sensitive_data(ctx: &RuleContext<'_>) -> RuleOutcome {
    let has_sensitive = ctx
        .decision
        .selected_data()
        .iter()
        .any(|id| is_sensitive_data(id.as_str()));

    if has_sensitive && !ctx.decision.selected_safeguards().contains(PRIVACY_SAFEGUARD) {
        RuleOutcome::add(
            SENSITIVE_DATA_PENALTY,
            FeedbackItem::critical(
                "GDPR alert",
                "You are handling sensitive personal data without selecting anonymisation/GDPR. \
                 That is illegal. Data minimisation is the golden rule.",
            ),
        )
    } else {
        RuleOutcome::skip()
    }
}

/// One warning per selected risk that carries feedback, in selection order.
pub fn risk_commentary(ctx: &RuleContext<'_>) -> RuleOutcome {
    let items = ctx
        .decision
        .selected_risks()
        .iter()
        .filter_map(|id| ctx.challenge.find_risk(id))
        .filter_map(|risk| {
            risk.educational_feedback
                .as_deref()
                .map(|text| FeedbackItem::warning(format!("Watch out: {}", risk.label), text))
        })
        .collect();
    RuleOutcome::comment(items)
}

/// A rule bound to one challenge: when the predicate holds, apply a penalty
/// or bonus and emit one feedback item.
#[derive(Clone)]
pub struct ChallengeRule {
    pub name: &'static str,
    pub challenge_id: ChallengeId,
    pub applies: fn(&Decision) -> bool,
    pub delta: i32,
    pub feedback: FeedbackItem,
}

impl fmt::Debug for ChallengeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallengeRule")
            .field("name", &self.name)
            .field("challenge_id", &self.challenge_id)
            .field("delta", &self.delta)
            .finish()
    }
}

impl ChallengeRule {
    pub fn into_rule(self) -> ScoringRule {
        let name = self.name;
        ScoringRule::new(name, move |ctx| {
            if ctx.challenge.id == self.challenge_id && (self.applies)(ctx.decision) {
                RuleOutcome::add(self.delta, self.feedback.clone())
            } else {
                RuleOutcome::skip()
            }
        })
    }
}

/// Orientation: recommending tracks without banning automated decisions.
pub fn orientation_automation() -> ChallengeRule {
    ChallengeRule {
        name: "orientation_automation",
        challenge_id: ChallengeId::from(ORIENTATION_CHALLENGE),
        applies: |decision| {
            decision
                .use_case()
                .is_some_and(|id| id == RECOMMENDATION_USE_CASE)
                && !decision
                    .selected_safeguards()
                    .contains(NO_AUTOMATED_DECISION_SAFEGUARD)
        },
        delta: ORIENTATION_AUTOMATION_PENALTY,
        feedback: FeedbackItem::critical(
            "Golden rule of guidance",
            "In guidance, purely automated decisions must be ruled out entirely. The AI must be a \
             support tool, not a verdict.",
        ),
    }
}

/// Challenge-specific rules, evaluated after the standard rules.
pub fn challenge_rules() -> Vec<ScoringRule> {
    vec![orientation_automation().into_rule()]
}
