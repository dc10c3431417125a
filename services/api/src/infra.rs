use fair_rate::config::AppConfig;
use fair_rate::error::AppError;
use fair_rate::reference::{
    ExperienceLevel, MarketRateTable, ProjectUrgency, ProjectVolume, ReferenceCatalog,
};
use fair_rate::workflows::{AnalyticsWebhook, RateService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the catalog, applying the CSV market-rate override when configured.
pub(crate) fn load_catalog(config: &AppConfig) -> Result<ReferenceCatalog, AppError> {
    let mut catalog = ReferenceCatalog::standard();

    if let Some(path) = &config.rates.market_rates_csv {
        let table = MarketRateTable::from_csv_path(path)?;
        info!(path = %path.display(), rows = table.len(), "loaded market rate override");
        catalog = catalog.with_market_rates(table);
    }

    catalog.validate()?;
    Ok(catalog)
}

pub(crate) fn build_rate_service(config: &AppConfig) -> Result<RateService, AppError> {
    let catalog = load_catalog(config)?;
    let mut service = RateService::new(Arc::new(catalog))
        .with_hours_per_month(config.rates.hours_per_month)
        .with_default_client_hours(config.rates.default_client_hours);

    if let Some(url) = &config.analytics.webhook_url {
        let webhook = AnalyticsWebhook::new(url.clone(), config.analytics.timeout)?;
        service = service.with_analytics(webhook);
    }

    Ok(service)
}

pub(crate) fn parse_answer(raw: &str) -> Result<(String, u32), String> {
    let (id, points) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=POINTS, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }
    let points = points
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid points in '{raw}' ({err})"))?;
    Ok((id.to_string(), points))
}

pub(crate) fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::from_id(raw)
        .ok_or_else(|| format!("unknown experience level '{raw}' (basic, professional, specialized)"))
}

pub(crate) fn parse_urgency(raw: &str) -> Result<ProjectUrgency, String> {
    ProjectUrgency::from_id(raw)
        .ok_or_else(|| format!("unknown urgency '{raw}' (normal, fast, immediate)"))
}

pub(crate) fn parse_volume(raw: &str) -> Result<ProjectVolume, String> {
    ProjectVolume::from_id(raw)
        .ok_or_else(|| format!("unknown volume '{raw}' (one-task, several-tasks, recurrent)"))
}
