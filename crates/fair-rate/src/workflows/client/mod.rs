//! Client flow: fair hourly range and total cost for hiring a freelancer.

pub mod domain;
mod estimator;

pub use domain::{ClientEstimateInput, ClientRateEstimate, CostEstimate, RateRange};
pub use estimator::{ClientCostEstimator, DEFAULT_CLIENT_HOURS};
