use crate::reference::{
    CountryProfile, ExperienceLevel, MarketRateSource, ProjectUrgency, ProjectVolume,
    SectorProfile,
};
use serde::{Deserialize, Serialize};

/// What a client tells us about the freelancer they want to hire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEstimateInput {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    pub experience_level: ExperienceLevel,
    #[serde(default = "default_urgency")]
    pub urgency: ProjectUrgency,
    #[serde(default = "default_volume")]
    pub volume: ProjectVolume,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
}

fn default_urgency() -> ProjectUrgency {
    ProjectUrgency::Normal
}

fn default_volume() -> ProjectVolume {
    ProjectVolume::OneTask
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub min: f64,
    pub max: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRateEstimate {
    pub country: CountryProfile,
    pub sector: SectorProfile,
    pub experience_level: ExperienceLevel,
    pub urgency: ProjectUrgency,
    pub volume: ProjectVolume,
    pub ethical_minimum_rate: f64,
    pub market_average_rate: f64,
    pub market_source: MarketRateSource,
    pub recommended_range: RateRange,
    pub urgency_multiplier: f64,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost_range: Option<CostEstimate>,
}
