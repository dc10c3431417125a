use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::reference::ReferenceCatalog;
use crate::workflows::RateService;

pub(super) fn service() -> Arc<RateService> {
    Arc::new(RateService::new(Arc::new(ReferenceCatalog::standard())))
}

pub(super) fn quiz(points: [u32; 7]) -> Value {
    json!({
        "q1_experience": points[0],
        "q2_portfolio": points[1],
        "q3_professionalism": points[2],
        "q4_tools": points[3],
        "q5_reputation": points[4],
        "q6_value_proposition": points[5],
        "q7_platforms": points[6],
    })
}

pub(super) fn top_quiz() -> Value {
    quiz([20, 20, 20, 15, 10, 15, 3])
}

pub(super) fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
