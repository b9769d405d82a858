use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::catalog::Challenge;
use crate::domain::foundation::{ChallengeId, Score, ScoreBand, Verdict};
use crate::domain::history::{CompletedRecord, SessionHistory};

/// Progress overview shown on the dashboard screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub completed_count: usize,

    /// Number of challenges in the catalog
    pub catalog_size: usize,

    pub total_score: u32,

    /// Mean score, rounded half up
    pub average_score: u32,

    /// Completed share of the catalog, 0-100
    pub progress_percent: u8,

    /// One row per completed challenge, in completion order
    pub rows: Vec<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub challenge_id: ChallengeId,
    /// Falls back to the id when the challenge left the catalog
    pub challenge_title: String,
    pub score: Score,
    pub band: ScoreBand,
    pub verdict: Verdict,
    pub completed_at: DateTime<Utc>,
}

impl HistorySummary {
    pub fn build(history: &SessionHistory, challenges: &[Challenge]) -> Self {
        let catalog_size = challenges.len();
        Self {
            completed_count: history.len(),
            catalog_size,
            total_score: history.total_score(),
            average_score: history.average_score(),
            progress_percent: history.progress_percent(catalog_size),
            rows: history
                .iter()
                .map(|record| HistoryRow::build(record, challenges))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl HistoryRow {
    fn build(record: &CompletedRecord, challenges: &[Challenge]) -> Self {
        let challenge_title = challenges
            .iter()
            .find(|c| &c.id == record.challenge_id())
            .map(|c| c.title.clone())
            .unwrap_or_else(|| record.challenge_id().to_string());

        Self {
            challenge_id: record.challenge_id().clone(),
            challenge_title,
            score: record.score(),
            band: record.score().band(),
            verdict: record.verdict(),
            completed_at: *record.completed_at().as_datetime(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
