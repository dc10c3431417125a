//! Best-effort usage analytics posted to an external webhook.

use super::domain::UserRole;
use super::freelancer::FreelancerRateReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Anonymous summary of one freelancer calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPayload {
    pub country: String,
    pub sector: String,
    pub profile_score: u8,
    pub suggested_rate: f64,
    pub ethical_min_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_rate: Option<f64>,
    pub history: String,
    pub results_shown: bool,
    pub used_simulator: bool,
    pub used_lessons: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
}

impl AnalyticsPayload {
    pub fn from_report(report: &FreelancerRateReport) -> Self {
        Self {
            country: report.country.code.clone(),
            sector: report.sector.id.clone(),
            profile_score: report.rates.profile_score,
            suggested_rate: report.rates.suggested_rate,
            ethical_min_rate: report.rates.ethical_minimum_rate,
            premium_rate: report.rates.premium_rate,
            history: report.history_adjustment.message.clone(),
            results_shown: true,
            used_simulator: false,
            used_lessons: false,
            timestamp: None,
            user_role: Some(UserRole::Freelancer),
        }
    }

    pub fn with_usage(mut self, usage: SessionUsage) -> Self {
        self.used_simulator = usage.used_simulator;
        self.used_lessons = usage.used_lessons;
        self
    }
}

/// Optional surfaces a user opened around one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionUsage {
    pub used_simulator: bool,
    pub used_lessons: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analytics endpoint answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analytics endpoint rejected the data: {0}")]
    Rejected(String),
}

/// Soft outcome of a webhook delivery, safe to show to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsNotice {
    pub delivered: bool,
    pub message: String,
}

impl From<Result<(), AnalyticsError>> for AnalyticsNotice {
    fn from(result: Result<(), AnalyticsError>) -> Self {
        match result {
            Ok(()) => Self {
                delivered: true,
                message: "Usage data sent successfully.".to_string(),
            },
            Err(error) => Self {
                delivered: false,
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyticsWebhook {
    client: reqwest::Client,
    url: String,
}

impl AnalyticsWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AnalyticsError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts the payload stamped with the current time.
    ///
    /// A 2xx answer counts as delivered unless its JSON body carries a
    /// `status` other than `"success"`.
    pub async fn send(&self, payload: &AnalyticsPayload) -> Result<(), AnalyticsError> {
        let stamped = AnalyticsPayload {
            timestamp: Some(Utc::now()),
            ..payload.clone()
        };

        let response = self.client.post(&self.url).json(&stamped).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalyticsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
        match parsed
            .as_ref()
            .and_then(|value| value.get("status"))
            .and_then(|value| value.as_str())
        {
            Some("success") | None => {
                debug!(url = %self.url, "analytics payload delivered");
                Ok(())
            }
            Some(_) => {
                let message = parsed
                    .as_ref()
                    .and_then(|value| value.get("message"))
                    .and_then(|value| value.as_str())
                    .unwrap_or("unexpected response format");
                Err(AnalyticsError::Rejected(message.to_string()))
            }
        }
    }

    /// Sends on a background task so the caller never waits on the webhook.
    pub fn dispatch(self: &Arc<Self>, payload: AnalyticsPayload) -> JoinHandle<AnalyticsNotice> {
        let webhook = Arc::clone(self);
        tokio::spawn(async move {
            let result = webhook.send(&payload).await;
            if let Err(error) = &result {
                warn!(%error, "analytics delivery failed");
            }
            AnalyticsNotice::from(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn payload() -> AnalyticsPayload {
        AnalyticsPayload {
            country: "ES".to_string(),
            sector: "design".to_string(),
            profile_score: 60,
            suggested_rate: 23.825,
            ethical_min_rate: 7.0875,
            premium_rate: None,
            history: "none".to_string(),
            results_shown: true,
            used_simulator: true,
            used_lessons: false,
            timestamp: None,
            user_role: Some(UserRole::Freelancer),
        }
    }

    fn webhook(server: &MockServer) -> AnalyticsWebhook {
        AnalyticsWebhook::new(server.url("/hook"), Duration::from_secs(2)).expect("client builds")
    }

    #[tokio::test]
    async fn success_status_is_delivered() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/hook")
                    .json_body_partial(r#"{"country":"ES","user_role":"freelancer"}"#);
                then.status(200).json_body(json!({ "status": "success" }));
            })
            .await;

        webhook(&server).send(&payload()).await.expect("delivered");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn plain_ok_body_counts_as_delivered() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(200).body("ok");
            })
            .await;

        assert!(webhook(&server).send(&payload()).await.is_ok());
    }

    #[tokio::test]
    async fn other_status_is_a_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(200)
                    .json_body(json!({ "status": "error", "message": "sheet locked" }));
            })
            .await;

        match webhook(&server).send(&payload()).await {
            Err(AnalyticsError::Rejected(message)) => assert_eq!(message, "sheet locked"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_becomes_soft_notice() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(500).body("boom");
            })
            .await;

        let notice = Arc::new(webhook(&server))
            .dispatch(payload())
            .await
            .expect("task completes");

        assert!(!notice.delivered);
        assert!(notice.message.contains("500"));
        assert!(notice.message.contains("boom"));
    }

    #[test]
    fn payload_omits_absent_fields() {
        let value = serde_json::to_value(payload()).expect("serializes");
        assert!(value.get("premium_rate").is_none());
        assert!(value.get("timestamp").is_none());
        assert_eq!(value["profile_score"], 60);
    }
}
