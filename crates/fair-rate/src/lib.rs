//! Fair hourly rates for freelancers and cost estimates for the clients who
//! hire them.

pub mod config;
pub mod error;
pub mod reference;
pub mod telemetry;
pub mod workflows;
