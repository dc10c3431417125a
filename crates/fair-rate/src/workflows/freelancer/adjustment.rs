use crate::reference::{CountryProfile, SectorProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Additive nudge over the suggested rate (0.05 means +5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAdjustment {
    pub adjustment_factor: f64,
    pub rationale: String,
}

/// Multiplicative factor from past results (1.0 means unchanged).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAdjustment {
    pub adjustment_factor: f64,
    pub message: String,
}

/// Strategy hooks that may refine a suggested rate from outside data.
///
/// Implementations must stay deterministic for a given input; the formula
/// engine never consults them.
pub trait AdjustmentPolicy: Send + Sync + std::fmt::Debug {
    fn predict_optimal_adjustment(
        &self,
        score: u8,
        sector: &SectorProfile,
        country: &CountryProfile,
    ) -> RateAdjustment;

    fn adjust_for_history(&self, new_score: u8) -> HistoryAdjustment;
}

/// Neutral policy used until historical rate data exists.
#[derive(Debug, Clone)]
pub struct BaselineAdjustmentPolicy {
    high_demand_sectors: Vec<String>,
    score_threshold: u8,
    nudge: f64,
}

impl BaselineAdjustmentPolicy {
    pub fn new(high_demand_sectors: Vec<String>) -> Self {
        Self {
            high_demand_sectors,
            ..Self::default()
        }
    }

    pub fn is_high_demand(&self, sector_id: &str) -> bool {
        self.high_demand_sectors.iter().any(|id| id == sector_id)
    }
}

impl Default for BaselineAdjustmentPolicy {
    fn default() -> Self {
        Self {
            high_demand_sectors: vec!["ai-data-devops".to_string()],
            score_threshold: 80,
            nudge: 0.05,
        }
    }
}

impl AdjustmentPolicy for BaselineAdjustmentPolicy {
    fn predict_optimal_adjustment(
        &self,
        score: u8,
        sector: &SectorProfile,
        country: &CountryProfile,
    ) -> RateAdjustment {
        debug!(
            score,
            sector = %sector.id,
            country = %country.code,
            "no historical rate data; using baseline adjustment"
        );

        if score > self.score_threshold && self.is_high_demand(&sector.id) {
            return RateAdjustment {
                adjustment_factor: self.nudge,
                rationale: "A strong profile in a high-demand sector may justify a small premium."
                    .to_string(),
            };
        }

        RateAdjustment {
            adjustment_factor: 0.0,
            rationale: "No historical data available for a predictive adjustment.".to_string(),
        }
    }

    fn adjust_for_history(&self, new_score: u8) -> HistoryAdjustment {
        debug!(new_score, "no rate history; history adjustment is neutral");
        HistoryAdjustment {
            adjustment_factor: 1.0,
            message: "Not enough history yet to personalise this result.".to_string(),
        }
    }
}
