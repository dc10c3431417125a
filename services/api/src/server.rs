use crate::cli::ServeArgs;
use crate::infra::{build_rate_service, AppState};
use crate::routes::with_rate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fair_rate::config::AppConfig;
use fair_rate::error::AppError;
use fair_rate::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rate_service = Arc::new(build_rate_service(&config)?);
    let analytics_enabled = config.analytics.webhook_url.is_some();

    let app = with_rate_routes(rate_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        hours_per_month = config.rates.hours_per_month,
        analytics_enabled,
        "fair rate service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
