//! Read-only views handed to the presentation layer.

use serde::Serialize;

use crate::domain::catalog::Challenge;
use crate::domain::dashboard::HistorySummary;
use crate::domain::decision::Decision;
use crate::domain::flow::ScreenKind;
use crate::domain::foundation::{Score, SessionId};
use crate::domain::scoring::{Evaluation, RiskOutlook};

/// Everything needed to render the current screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub session_id: SessionId,
    pub screen: ScreenKind,
    pub active_challenge: Option<Challenge>,
    pub decision: Option<Decision>,
    /// Only on the result screen
    pub evaluation: Option<Evaluation>,
    /// Weather display for the selected risks
    pub risk_outlook: Option<RiskOutlook>,
    pub history_summary: HistorySummary,
}

impl StateSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One entry of the challenge map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeListing {
    pub challenge: Challenge,
    pub completed: bool,
    /// Score of the saved attempt, if any
    pub score: Option<Score>,
}
