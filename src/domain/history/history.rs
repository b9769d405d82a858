//! Session history - completed records keyed by challenge, in completion order.

use std::collections::{BTreeMap, HashMap};

use super::CompletedRecord;
use crate::domain::foundation::ChallengeId;

/// At most one record per challenge.
///
/// Records are kept in completion order. Re-recording a challenge removes the
/// previous record and appends the new one at the end.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    index: HashMap<ChallengeId, u64>,
    records: BTreeMap<u64, CompletedRecord>,
    next_seq: u64,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts a record, replacing any previous one for the same challenge.
    ///
    /// Returns the replaced record.
    pub fn record(&mut self, record: CompletedRecord) -> Option<CompletedRecord> {
        let replaced = self
            .index
            .remove(record.challenge_id())
            .and_then(|seq| self.records.remove(&seq));

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.challenge_id().clone(), seq);
        self.records.insert(seq, record);
        replaced
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get(&self, challenge_id: &ChallengeId) -> Option<&CompletedRecord> {
        self.index
            .get(challenge_id)
            .and_then(|seq| self.records.get(seq))
    }

    pub fn is_challenge_completed(&self, challenge_id: &ChallengeId) -> bool {
        self.index.contains_key(challenge_id)
    }

    /// Records in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &CompletedRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn total_score(&self) -> u32 {
        self.iter().map(|r| u32::from(r.score().value())).sum()
    }

    /// Mean score rounded half up; 0 for an empty history.
    pub fn average_score(&self) -> u32 {
        let count = self.len() as u32;
        if count == 0 {
            return 0;
        }
        (2 * self.total_score() + count) / (2 * count)
    }

    /// Completed count divided by `total_challenges`; zero for an empty catalog.
    pub fn progress_ratio(&self, total_challenges: usize) -> f64 {
        if total_challenges == 0 {
            return 0.0;
        }
        self.len() as f64 / total_challenges as f64
    }

    /// Completed share of `total_challenges` as a whole percentage.
    pub fn progress_percent(&self, total_challenges: usize) -> u8 {
        (self.progress_ratio(total_challenges) * 100.0).round() as u8
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a CompletedRecord;
    type IntoIter = std::collections::btree_map::Values<'a, u64, CompletedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
