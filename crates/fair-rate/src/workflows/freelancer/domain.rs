use super::adjustment::{HistoryAdjustment, RateAdjustment};
use crate::reference::{CountryProfile, MarketRateSource, ProfileLevel, SectorProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points awarded per quiz question, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswerSet(BTreeMap<String, u32>);

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: &str, points: u32) -> Option<u32> {
        self.0.insert(question_id.to_string(), points)
    }

    pub fn with_answer(mut self, question_id: &str, points: u32) -> Self {
        self.insert(question_id, points);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(id, points)| (id.as_str(), *points))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for QuizAnswerSet {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, points)| (id.into(), points))
                .collect(),
        )
    }
}

/// Everything the freelancer flow collects before asking for a rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreelancerRateRequest {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub answers: QuizAnswerSet,
}

/// Headline rates for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateResult {
    pub ethical_minimum_rate: f64,
    /// Effective market average, never below the ethical minimum.
    pub market_average_rate: f64,
    pub profile_score: u8,
    pub suggested_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_rate: Option<f64>,
}

/// Full freelancer result: rates plus narrative fragments for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct FreelancerRateReport {
    pub country: CountryProfile,
    pub sector: SectorProfile,
    pub rates: RateResult,
    pub market_source: MarketRateSource,
    pub level: ProfileLevel,
    pub market_insight: String,
    pub recommendations: Vec<String>,
    pub optimal_adjustment: RateAdjustment,
    pub history_adjustment: HistoryAdjustment,
}

impl FreelancerRateReport {
    /// Suggested rate with both advisory adjustments applied.
    pub fn adjusted_rate(&self) -> f64 {
        self.rates.suggested_rate
            * (1.0 + self.optimal_adjustment.adjustment_factor)
            * self.history_adjustment.adjustment_factor
    }
}
