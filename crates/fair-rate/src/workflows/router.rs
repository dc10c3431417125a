use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

use super::client::ClientEstimateInput;
use super::domain::CalculationError;
use super::service::{RateService, RatesRequest, SimulationRequest};

/// Router exposing the catalog and both calculation flows.
pub fn rate_router(service: Arc<RateService>) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/freelancer/rates", post(freelancer_rates_handler))
        .route("/api/v1/freelancer/simulation", post(simulation_handler))
        .route("/api/v1/client/estimate", post(client_estimate_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<RateService>>) -> Response {
    (StatusCode::OK, Json(service.catalog_view())).into_response()
}

pub(crate) async fn freelancer_rates_handler(
    State(service): State<Arc<RateService>>,
    Json(request): Json<RatesRequest>,
) -> Response {
    match service.freelancer_rates(&request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => calculation_error_response(&error),
    }
}

pub(crate) async fn simulation_handler(
    State(service): State<Arc<RateService>>,
    Json(request): Json<SimulationRequest>,
) -> Response {
    match service.simulate(&request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => calculation_error_response(&error),
    }
}

pub(crate) async fn client_estimate_handler(
    State(service): State<Arc<RateService>>,
    Json(input): Json<ClientEstimateInput>,
) -> Response {
    match service.client_estimate(&input) {
        Ok(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        Err(error) => calculation_error_response(&error),
    }
}

pub(crate) fn calculation_error_response(error: &CalculationError) -> Response {
    info!(%error, "calculation refused");
    let payload = json!({
        "error": error.user_message(),
        "reason": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
