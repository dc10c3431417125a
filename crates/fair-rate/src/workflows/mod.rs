pub mod analytics;
pub mod client;
pub mod domain;
pub mod export;
pub mod freelancer;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::{
    AnalyticsError, AnalyticsNotice, AnalyticsPayload, AnalyticsWebhook, SessionUsage,
};
pub use domain::{CalculationError, UserRole};
pub use router::rate_router;
pub use service::{
    CatalogView, FreelancerRateResponse, RateService, RatesRequest, SimulationRequest,
    SimulationResponse,
};
