use super::*;
use crate::domain::catalog::{AmbitionLevel, Challenge, OptionItem};
use crate::domain::decision::{DecisionError, DesignField, DesignSubmission, StrategySubmission};
use crate::domain::foundation::{ChallengeId, OptionId};

fn challenge(id: &str) -> Challenge {
    let mut c = Challenge::new(id, "Slopes of the Future", 2);
    c.use_cases = vec![
        OptionItem::new("reco", "Recommendation").with_feedback("Reproduces past stereotypes."),
        OptionItem::new("chat", "Chatbot"),
    ];
    c.benefits = vec![OptionItem::new("match", "Fit")];
    c.data = vec![
        OptionItem::new("grades", "Grades"),
        OptionItem::new("interests", "Interests"),
    ];
    c.risks = vec![OptionItem::new("bias", "Bias").with_risk_factor(5)];
    c
}

fn design(use_case: &str) -> DesignSubmission {
    DesignSubmission {
        use_case: Some(OptionId::from(use_case)),
        benefits: ["match"].into_iter().collect(),
        data: ["interests"].into_iter().collect(),
        risks: ["bias"].into_iter().collect(),
    }
}

fn strategy(ambition: AmbitionLevel, safeguards: &[&str]) -> StrategySubmission {
    StrategySubmission {
        ambition: Some(ambition),
        safeguards: safeguards.iter().copied().collect(),
    }
}

fn at_strategy(c: &Challenge) -> FlowController {
    let mut flow = FlowController::new();
    flow.start().unwrap();
    flow.select_challenge(c).unwrap();
    flow.submit_design(design("chat")).unwrap();
    flow
}

fn play(flow: &mut FlowController, c: &Challenge, ambition: AmbitionLevel, safeguards: &[&str]) {
    flow.select_challenge(c).unwrap();
    flow.submit_design(design("chat")).unwrap();
    flow.submit_strategy(strategy(ambition, safeguards)).unwrap();
    flow.finalize_and_save().unwrap();
}

#[test]
fn starts_on_home_with_empty_history() {
    let flow = FlowController::new();
    assert_eq!(flow.screen_kind(), ScreenKind::Home);
    assert!(flow.history().is_empty());
    assert!(flow.decision().is_none());
}

#[test]
fn full_attempt_records_history_and_returns_to_map() {
    let c = challenge("c1");
    let mut flow = at_strategy(&c);

    let eval = flow
        .submit_strategy(strategy(AmbitionLevel::Local, &["privacy", "contest"]))
        .unwrap();
    assert_eq!(eval.score().value(), 65);
    assert_eq!(flow.screen_kind(), ScreenKind::Result);

    let record = flow.finalize_and_save().unwrap();
    assert_eq!(record.score().value(), 65);
    assert_eq!(flow.screen_kind(), ScreenKind::Map);
    assert!(flow.history().is_challenge_completed(&ChallengeId::from("c1")));
    assert!(flow.active_challenge().is_none());
    assert!(flow.decision().is_none());
}

#[test]
fn home_cannot_open_dashboard() {
    let mut flow = FlowController::new();
    assert_eq!(
        flow.open_dashboard(),
        Err(FlowError::InvalidTransition {
            from: ScreenKind::Home,
            to: ScreenKind::Dashboard,
        })
    );
    assert_eq!(flow.screen_kind(), ScreenKind::Home);
}

#[test]
fn out_of_order_requests_are_rejected() {
    let c = challenge("c1");
    let mut flow = FlowController::new();
    assert!(flow.select_challenge(&c).is_err());
    assert!(flow.submit_design(design("chat")).is_err());
    assert!(flow.finalize_and_save().is_err());
    assert!(flow.go_home().is_err());

    flow.start().unwrap();
    assert!(flow.start().is_err());
    assert!(flow.back_to_design().is_err());
    assert!(flow.replay().is_err());
    assert!(flow
        .submit_strategy(strategy(AmbitionLevel::None, &[]))
        .is_err());
}

#[test]
fn incomplete_design_leaves_decision_untouched() {
    let c = challenge("c1");
    let mut flow = FlowController::new();
    flow.start().unwrap();
    flow.select_challenge(&c).unwrap();

    let before = flow.decision().cloned();
    let err = flow
        .submit_design(DesignSubmission {
            use_case: Some(OptionId::from("chat")),
            benefits: ["match"].into_iter().collect(),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(
        err,
        FlowError::Decision(DecisionError::IncompleteDesign {
            missing: vec![DesignField::Data, DesignField::Risks],
        })
    );
    assert_eq!(flow.screen_kind(), ScreenKind::Design);
    assert_eq!(flow.decision().cloned(), before);
}

#[test]
fn incomplete_strategy_stays_on_strategy() {
    let c = challenge("c1");
    let mut flow = at_strategy(&c);

    let err = flow
        .submit_strategy(strategy(AmbitionLevel::Pilot, &[]))
        .unwrap_err();
    assert!(matches!(err, FlowError::Decision(DecisionError::IncompleteStrategy { .. })));
    assert_eq!(flow.screen_kind(), ScreenKind::Strategy);
    assert!(flow.decision().unwrap().ambition().is_none());
}

#[test]
fn blank_use_case_keeps_flow_on_design() {
    let c = challenge("c1");
    let mut flow = FlowController::new();
    flow.start().unwrap();
    flow.select_challenge(&c).unwrap();

    let err = flow
        .submit_design(DesignSubmission {
            use_case: Some(OptionId::from("")),
            ..design("chat")
        })
        .unwrap_err();

    assert_eq!(
        err,
        FlowError::Decision(DecisionError::IncompleteDesign {
            missing: vec![DesignField::UseCase],
        })
    );
    assert_eq!(flow.screen_kind(), ScreenKind::Design);
}

#[test]
fn back_to_design_preserves_decision() {
    let c = challenge("c1");
    let mut flow = at_strategy(&c);
    let before = flow.decision().cloned();

    flow.back_to_design().unwrap();
    assert_eq!(flow.screen_kind(), ScreenKind::Design);
    assert_eq!(flow.decision().cloned(), before);
    assert_eq!(
        flow.decision().unwrap().use_case(),
        Some(&OptionId::from("chat"))
    );
}

#[test]
fn completed_challenge_cannot_be_selected_again() {
    let c = challenge("c1");
    let mut flow = FlowController::new();
    flow.start().unwrap();
    play(&mut flow, &c, AmbitionLevel::None, &[]);

    assert_eq!(
        flow.select_challenge(&c),
        Err(FlowError::ChallengeAlreadyCompleted(ChallengeId::from("c1")))
    );
    assert_eq!(flow.screen_kind(), ScreenKind::Map);
}

#[test]
fn dashboard_pauses_attempt_and_replay_abandons_it() {
    let c = challenge("c1");
    let mut flow = at_strategy(&c);

    flow.open_dashboard().unwrap();
    assert_eq!(flow.screen_kind(), ScreenKind::Dashboard);
    assert_eq!(flow.active_challenge().map(|c| c.id.as_str()), Some("c1"));

    flow.replay().unwrap();
    assert_eq!(flow.screen_kind(), ScreenKind::Map);
    assert!(flow.decision().is_none());
    assert!(flow.history().is_empty());
}

#[test]
fn go_home_keeps_history() {
    let mut flow = FlowController::new();
    flow.start().unwrap();
    play(&mut flow, &challenge("c1"), AmbitionLevel::None, &[]);

    flow.select_challenge(&challenge("c2")).unwrap();
    flow.go_home().unwrap();
    assert_eq!(flow.screen_kind(), ScreenKind::Home);
    assert!(flow.decision().is_none());
    assert_eq!(flow.history().len(), 1);

    flow.start().unwrap();
    assert!(flow.select_challenge(&challenge("c1")).is_err());
}

#[test]
fn result_screen_holds_evaluation_until_saved() {
    let c = challenge("c1");
    let mut flow = at_strategy(&c);
    flow.submit_strategy(strategy(AmbitionLevel::None, &[])).unwrap();

    assert_eq!(flow.evaluation().map(|e| e.score().value()), Some(70));
    assert!(flow.history().is_empty());

    flow.open_dashboard().unwrap();
    assert!(flow.evaluation().is_none());
    assert!(flow.history().is_empty());
}
