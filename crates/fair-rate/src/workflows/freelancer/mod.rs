//! Freelancer flow: quiz scoring, rate formula, insights and adjustment hooks.

pub mod adjustment;
mod calculator;
pub mod domain;
pub mod formula;
pub mod insights;
pub mod scoring;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use adjustment::{
    AdjustmentPolicy, BaselineAdjustmentPolicy, HistoryAdjustment, RateAdjustment,
};
pub use calculator::FreelancerRateCalculator;
pub(crate) use calculator::selected;
pub use domain::{FreelancerRateReport, FreelancerRateRequest, QuizAnswerSet, RateResult};
pub use formula::{ethical_minimum, ethical_minimum_with_hours, premium_rate, suggested_rate};
pub use insights::market_insight;
pub use scoring::compute_profile_score;
pub use simulation::{simulate_project, ProjectExtras, ProjectSimulation, SimulationOutcome};
