//! AmbitionLevel enum - declared scale of AI deployment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far the learner intends to take the AI project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbitionLevel {
    /// Single-site experiment.
    Local,
    /// Multi-site pilot.
    Pilot,
    /// Do not deploy AI; strengthen what already exists.
    None,
}

impl AmbitionLevel {
    /// Returns true if an AI system is actually deployed at this level.
    ///
    /// Safeguards are only required when this is true.
    pub fn deploys_ai(&self) -> bool {
        !matches!(self, AmbitionLevel::None)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AmbitionLevel::Local => "Local trail (single-site experiment)",
            AmbitionLevel::Pilot => "Traverse (multi-site pilot)",
            AmbitionLevel::None => "Bivouac (no AI, strengthen what exists)",
        }
    }
}

impl fmt::Display for AmbitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
