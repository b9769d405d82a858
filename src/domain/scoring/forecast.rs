//! Risk forecast - derived display of the risks a learner has acknowledged.
//!
//! Sums the `risk_factor` of the selected risks. Purely informational; the
//! scoring rules never read it.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Challenge;
use crate::domain::decision::Selection;

/// Below this total the sky is clear.
pub const CLEAR_BELOW: u32 = 3;

/// Below this total (and not clear) the sky is overcast.
pub const OVERCAST_BELOW: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskForecast {
    Clear,
    Overcast,
    Storm,
}

impl RiskForecast {
    pub fn label(&self) -> &'static str {
        match self {
            RiskForecast::Clear => "Clear skies",
            RiskForecast::Overcast => "Overcast",
            RiskForecast::Storm => "Storm brewing (high risks)",
        }
    }
}

/// Total risk factor and the resulting forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskOutlook {
    pub total_risk: u32,
    pub forecast: RiskForecast,
}

impl RiskOutlook {
    /// Computes the outlook for a set of selected risk ids.
    ///
    /// Unknown ids and risks without a factor contribute nothing.
    pub fn for_selection(challenge: &Challenge, risks: &Selection) -> Self {
        let total_risk = risks
            .iter()
            .filter_map(|id| challenge.find_risk(id))
            .filter_map(|risk| risk.risk_factor)
            .map(u32::from)
            .sum();
        Self::from_total(total_risk)
    }

    pub fn from_total(total_risk: u32) -> Self {
        let forecast = if total_risk < CLEAR_BELOW {
            RiskForecast::Clear
        } else if total_risk < OVERCAST_BELOW {
            RiskForecast::Overcast
        } else {
            RiskForecast::Storm
        };
        Self {
            total_risk,
            forecast,
        }
    }
}
