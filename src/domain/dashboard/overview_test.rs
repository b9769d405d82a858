#[cfg(test)]
mod tests {
    use crate::domain::catalog::{AmbitionLevel, Challenge, OptionItem};
    use crate::domain::dashboard::overview::HistorySummary;
    use crate::domain::decision::{Decision, DesignSubmission, StrategySubmission};
    use crate::domain::foundation::{OptionId, Timestamp, Verdict};
    use crate::domain::history::{CompletedRecord, SessionHistory};
    use crate::domain::scoring::ScoringEngine;

    fn challenge(id: &str, title: &str) -> Challenge {
        let mut c = Challenge::new(id, title, 1);
        c.use_cases = vec![OptionItem::new("plain", "Plain")];
        c.benefits = vec![OptionItem::new("b", "B")];
        c.data = vec![OptionItem::new("interests", "Interests")];
        c.risks = vec![OptionItem::new("r", "R")];
        c
    }

    fn record(c: &Challenge, ambition: AmbitionLevel, safeguards: &[&str]) -> CompletedRecord {
        let mut d = Decision::start(c);
        d.merge_design(DesignSubmission {
            use_case: Some(OptionId::from("plain")),
            benefits: ["b"].into_iter().collect(),
            data: ["interests"].into_iter().collect(),
            risks: ["r"].into_iter().collect(),
        });
        d.merge_strategy(StrategySubmission {
            ambition: Some(ambition),
            safeguards: safeguards.iter().copied().collect(),
        });
        let eval = ScoringEngine::new().evaluate(c, &d).unwrap();
        CompletedRecord::new(d, &eval, Timestamp::now())
    }

    fn catalog() -> Vec<Challenge> {
        vec![
            challenge("c1", "Slopes of the Future"),
            challenge("c2", "Teaching Summit"),
            challenge("c3", "Inclusion Pass"),
        ]
    }

    #[test]
    fn test_empty_history_summary() {
        let summary = HistorySummary::build(&SessionHistory::new(), &catalog());
        assert!(summary.is_empty());
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.catalog_size, 3);
        assert_eq!(summary.average_score, 0);
        assert_eq!(summary.progress_percent, 0);
    }

    #[test]
    fn test_summary_aggregates_and_rows() {
        let challenges = catalog();
        let mut history = SessionHistory::new();
        // 70, then 50 + 20 + 20 = 90
        history.record(record(&challenges[1], AmbitionLevel::None, &[]));
        history.record(record(
            &challenges[0],
            AmbitionLevel::Pilot,
            &["a", "b", "c", "d"],
        ));

        let summary = HistorySummary::build(&history, &challenges);
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.total_score, 160);
        assert_eq!(summary.average_score, 80);
        assert_eq!(summary.progress_percent, 67);

        assert_eq!(summary.rows[0].challenge_title, "Teaching Summit");
        assert_eq!(summary.rows[0].verdict, Verdict::Average);
        assert_eq!(summary.rows[1].challenge_title, "Slopes of the Future");
        assert_eq!(summary.rows[1].verdict, Verdict::Validated);
    }

    #[test]
    fn test_row_falls_back_to_id_for_unknown_challenge() {
        let retired = challenge("c9", "Retired");
        let mut history = SessionHistory::new();
        history.record(record(&retired, AmbitionLevel::None, &[]));

        let summary = HistorySummary::build(&history, &catalog());
        assert_eq!(summary.rows[0].challenge_title, "c9");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let challenges = catalog();
        let mut history = SessionHistory::new();
        history.record(record(&challenges[0], AmbitionLevel::None, &[]));

        let json = serde_json::to_value(HistorySummary::build(&history, &challenges)).unwrap();
        assert_eq!(json["completedCount"], 1);
        assert_eq!(json["averageScore"], 70);
        assert_eq!(json["rows"][0]["challengeTitle"], "Slopes of the Future");
        assert_eq!(json["rows"][0]["verdict"], "average");
    }
}
