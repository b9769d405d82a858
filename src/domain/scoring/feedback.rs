//! Feedback items emitted while scoring a decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation tag of a feedback item. Has no effect on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Info,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Critical => "critical",
        }
    }
}

/// One itemized piece of educational feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl FeedbackItem {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    pub fn critical(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, title, message)
    }
}

/// Flattened `"<title>: <message>"` form stored in history.
impl fmt::Display for FeedbackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_flattens_title_and_message() {
        let item = FeedbackItem::critical("GDPR alert", "Sensitive data without anonymisation.");
        assert_eq!(item.to_string(), "GDPR alert: Sensitive data without anonymisation.");
        assert_eq!(item.severity, Severity::Critical);
    }
}
