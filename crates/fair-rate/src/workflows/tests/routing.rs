use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::reference::{ExperienceLevel, ProjectUrgency, ProjectVolume};
use crate::workflows::client::ClientEstimateInput;
use crate::workflows::rate_router;
use crate::workflows::router::client_estimate_handler;

#[tokio::test]
async fn catalog_lists_reference_tables() {
    let response = rate_router(service())
        .oneshot(
            Request::builder()
                .uri("/api/v1/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["countries"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["sectors"].as_array().map(Vec::len), Some(11));
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["tariffs"]["immediate"]["multiplier"], 1.75);
    assert_eq!(body["lessons"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["lessons"][1]["link_text"], "Read more about negotiation");
    assert!(body["lessons"][0].get("link").is_none());
}

#[tokio::test]
async fn freelancer_rates_returns_report_and_share_text() {
    let request = post_json(
        "/api/v1/freelancer/rates",
        json!({
            "country": "ES",
            "sector": "design",
            "answers": top_quiz(),
            "viewed_lessons": true
        }),
    );

    let response = rate_router(service())
        .oneshot(request)
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["rates"]["profile_score"], 100);
    assert_eq!(body["rates"]["suggested_rate"], 35.0);
    assert_eq!(body["rates"]["premium_rate"], 43.75);
    assert_eq!(body["market_source"], "exact");
    assert_eq!(body["level"]["name"], "Expert Reference");
    assert!(body["share_text"]
        .as_str()
        .is_some_and(|text| text.contains("Expert Reference")));
}

#[tokio::test]
async fn incomplete_quiz_is_unprocessable_with_friendly_message() {
    let request = post_json(
        "/api/v1/freelancer/rates",
        json!({ "country": "ES", "sector": "design", "answers": { "q1_experience": 20 } }),
    );

    let response = rate_router(service())
        .oneshot(request)
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "Some required answers are missing. Please restart and complete every step."
    );
}

#[tokio::test]
async fn simulation_prices_the_project_at_the_suggested_rate() {
    let request = post_json(
        "/api/v1/freelancer/simulation",
        json!({
            "country": "ES",
            "sector": "design",
            "answers": top_quiz(),
            "simulation": {
                "estimated_hours": 10,
                "extras": { "urgency": true },
                "similar_projects_per_month": 2
            }
        }),
    );

    let response = rate_router(service())
        .oneshot(request)
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["outcome"]["project_budget"], 437.5);
    assert_eq!(body["outcome"]["monthly_income"], 875.0);
    assert_eq!(body["outcome"]["monthly_hours"], 20.0);
    assert!(body["outcome"].get("warning").is_none());
}

#[tokio::test]
async fn client_estimate_returns_range_and_total() {
    let request = post_json(
        "/api/v1/client/estimate",
        json!({
            "country": "ES",
            "sector": "design",
            "experience_level": "professional",
            "urgency": "fast",
            "volume": "one_task",
            "estimated_hours": 10
        }),
    );

    let response = rate_router(service())
        .oneshot(request)
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["recommended_range"]["min"], 35.0);
    assert_eq!(body["urgency_multiplier"], 1.25);
    assert_eq!(body["total_cost_range"]["min"], 437.5);
    assert_eq!(
        body["total_cost_range"]["explanation"],
        "Estimated for 10h at Fast urgency."
    );
}

#[tokio::test]
async fn client_handler_rejects_unknown_country() {
    let input = ClientEstimateInput {
        country: Some("FR".to_string()),
        sector: Some("design".to_string()),
        experience_level: ExperienceLevel::Basic,
        urgency: ProjectUrgency::Normal,
        volume: ProjectVolume::OneTask,
        estimated_hours: None,
    };

    let response = client_estimate_handler(State(service()), Json(input)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("Reference data")));
    assert!(body["reason"]
        .as_str()
        .is_some_and(|reason| reason.contains("FR")));
}
