//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Readiness score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Clamps a raw, possibly out-of-range, running total into a score.
    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range("score", 0, 100, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display band of this score.
    pub fn band(&self) -> ScoreBand {
        match self.0 {
            80..=100 => ScoreBand::High,
            50..=79 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }

    /// Returns the history verdict for this score.
    pub fn verdict(&self) -> Verdict {
        if self.0 > 75 {
            Verdict::Validated
        } else {
            Verdict::Average
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Colour band used when presenting a freshly computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

/// Verdict shown next to a completed attempt in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Validated,
    Average,
}

impl Verdict {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Validated => "Validated",
            Verdict::Average => "Average",
        }
    }
}
