//! Screens of the training flow.
//!
//! [`Screen`] carries the data valid in each stage; [`ScreenKind`] is its
//! `Copy` discriminant and owns the transition table.

use serde::Serialize;
use std::fmt;

use crate::domain::catalog::Challenge;
use crate::domain::decision::Decision;
use crate::domain::foundation::StateMachine;
use crate::domain::scoring::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Home,
    Map,
    Design,
    Strategy,
    Result,
    Dashboard,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Home,
        ScreenKind::Map,
        ScreenKind::Design,
        ScreenKind::Strategy,
        ScreenKind::Result,
        ScreenKind::Dashboard,
    ];
}

impl StateMachine for ScreenKind {
    /// Valid transitions:
    /// - Home -> Map
    /// - Map -> Design
    /// - Design -> Strategy
    /// - Strategy -> Design | Result
    /// - Result -> Map
    /// - Dashboard -> Map
    /// - any non-Home -> Dashboard | Home
    fn can_transition_to(&self, target: &Self) -> bool {
        use ScreenKind::*;
        match (self, target) {
            (Home, Map) => true,
            (Map, Design) => true,
            (Design, Strategy) => true,
            (Strategy, Design) | (Strategy, Result) => true,
            (Result, Map) => true,
            (Dashboard, Map) => true,
            (Home, _) => false,
            (_, Dashboard) | (_, Home) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScreenKind::Home => "Home",
            ScreenKind::Map => "Map",
            ScreenKind::Design => "Design",
            ScreenKind::Strategy => "Strategy",
            ScreenKind::Result => "Result",
            ScreenKind::Dashboard => "Dashboard",
        };
        write!(f, "{}", s)
    }
}

/// The challenge being played and the decision built for it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAttempt {
    pub challenge: Challenge,
    pub decision: Decision,
}

impl ActiveAttempt {
    pub fn new(challenge: Challenge) -> Self {
        let decision = Decision::start(&challenge);
        Self {
            challenge,
            decision,
        }
    }

    pub fn with_decision(&self, decision: Decision) -> Self {
        Self {
            challenge: self.challenge.clone(),
            decision,
        }
    }
}

/// Current screen with the data that is valid in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Map,
    Design(ActiveAttempt),
    Strategy(ActiveAttempt),
    Result {
        attempt: ActiveAttempt,
        evaluation: Evaluation,
    },
    /// An attempt in progress when the dashboard was opened is kept here
    /// until the learner replays or goes home.
    Dashboard { paused: Option<ActiveAttempt> },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Home => ScreenKind::Home,
            Screen::Map => ScreenKind::Map,
            Screen::Design(_) => ScreenKind::Design,
            Screen::Strategy(_) => ScreenKind::Strategy,
            Screen::Result { .. } => ScreenKind::Result,
            Screen::Dashboard { .. } => ScreenKind::Dashboard,
        }
    }

    /// The attempt in progress, including one paused behind the dashboard.
    pub fn attempt(&self) -> Option<&ActiveAttempt> {
        match self {
            Screen::Design(attempt) | Screen::Strategy(attempt) => Some(attempt),
            Screen::Result { attempt, .. } => Some(attempt),
            Screen::Dashboard { paused } => paused.as_ref(),
            Screen::Home | Screen::Map => None,
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Screen::Result { evaluation, .. } => Some(evaluation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScreenKind::*;

    #[test]
    fn home_only_leads_to_map() {
        assert_eq!(Home.valid_transitions(), vec![Map]);
        assert!(!Home.can_transition_to(&Dashboard));
        assert!(!Home.can_transition_to(&Home));
    }

    #[test]
    fn stage_progression() {
        assert!(Map.can_transition_to(&Design));
        assert!(Design.can_transition_to(&Strategy));
        assert!(Strategy.can_transition_to(&Design));
        assert!(Strategy.can_transition_to(&Result));
        assert!(Result.can_transition_to(&Map));

        assert!(!Map.can_transition_to(&Strategy));
        assert!(!Design.can_transition_to(&Result));
        assert!(!Design.can_transition_to(&Map));
        assert!(!Result.can_transition_to(&Design));
    }

    #[test]
    fn dashboard_and_home_reachable_from_every_non_home_screen() {
        for kind in [Map, Design, Strategy, Result, Dashboard] {
            assert!(kind.can_transition_to(&Dashboard), "{kind} -> Dashboard");
            assert!(kind.can_transition_to(&Home), "{kind} -> Home");
        }
    }

    #[test]
    fn dashboard_exits() {
        assert_eq!(Dashboard.valid_transitions(), vec![Home, Map, Dashboard]);
    }

    #[test]
    fn no_screen_is_terminal() {
        for kind in ScreenKind::ALL {
            assert!(!kind.is_terminal());
        }
    }

    #[test]
    fn transition_to_rejects_invalid_target() {
        assert!(Map.transition_to(Result).is_err());
        assert_eq!(Map.transition_to(Design), Ok(Design));
    }
}
