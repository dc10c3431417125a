use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analytics::{AnalyticsNotice, AnalyticsPayload, AnalyticsWebhook, SessionUsage};
use super::client::{ClientCostEstimator, ClientEstimateInput, ClientRateEstimate};
use super::domain::CalculationError;
use super::export::share_text;
use super::freelancer::{
    simulate_project, AdjustmentPolicy, FreelancerRateCalculator, FreelancerRateReport,
    FreelancerRateRequest, ProjectSimulation, RateResult, SimulationOutcome,
};
use crate::reference::{
    ClientTariffs, CountryProfile, MicroLesson, ProfileLevel, QuizQuestion, ReferenceCatalog,
    SectorProfile,
};

/// Everything a front end needs to render selection lists and the quiz.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub countries: &'a [CountryProfile],
    pub sectors: &'a [SectorProfile],
    pub questions: &'a [QuizQuestion],
    pub levels: &'a [ProfileLevel],
    pub tariffs: &'a ClientTariffs,
    pub client_tips: &'a [&'static str],
    pub lessons: &'a [MicroLesson],
}

#[derive(Debug, Clone, Serialize)]
pub struct FreelancerRateResponse {
    #[serde(flatten)]
    pub report: FreelancerRateReport,
    pub share_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesRequest {
    #[serde(flatten)]
    pub rates: FreelancerRateRequest,
    /// Set when the user opened the micro-lessons in this session.
    #[serde(default)]
    pub viewed_lessons: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub rates: FreelancerRateRequest,
    #[serde(default)]
    pub simulation: ProjectSimulation,
    #[serde(default)]
    pub viewed_lessons: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    pub rates: RateResult,
    pub simulation: ProjectSimulation,
    pub outcome: SimulationOutcome,
}

/// Facade composing both calculators and the optional analytics webhook.
#[derive(Debug)]
pub struct RateService {
    catalog: Arc<ReferenceCatalog>,
    freelancer: FreelancerRateCalculator,
    client: ClientCostEstimator,
    analytics: Option<Arc<AnalyticsWebhook>>,
}

impl RateService {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self {
            freelancer: FreelancerRateCalculator::new(Arc::clone(&catalog)),
            client: ClientCostEstimator::new(Arc::clone(&catalog)),
            catalog,
            analytics: None,
        }
    }

    pub fn with_hours_per_month(mut self, hours_per_month: f64) -> Self {
        self.freelancer = self.freelancer.with_hours_per_month(hours_per_month);
        self.client = self.client.with_hours_per_month(hours_per_month);
        self
    }

    pub fn with_default_client_hours(mut self, hours: f64) -> Self {
        self.client = self.client.with_default_hours(hours);
        self
    }

    pub fn with_policy(mut self, policy: Box<dyn AdjustmentPolicy>) -> Self {
        self.freelancer = self.freelancer.with_adjustment_policy(policy);
        self
    }

    pub fn with_analytics(mut self, webhook: AnalyticsWebhook) -> Self {
        self.analytics = Some(Arc::new(webhook));
        self
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn catalog_view(&self) -> CatalogView<'_> {
        CatalogView {
            countries: self.catalog.countries(),
            sectors: self.catalog.sectors(),
            questions: self.catalog.questions(),
            levels: self.catalog.levels(),
            tariffs: self.catalog.tariffs(),
            client_tips: self.catalog.client_tips(),
            lessons: self.catalog.lessons(),
        }
    }

    pub fn freelancer_rates(
        &self,
        request: &RatesRequest,
    ) -> Result<FreelancerRateResponse, CalculationError> {
        let report = self.freelancer.calculate(&request.rates)?;
        self.record_usage(
            &report,
            SessionUsage {
                used_simulator: false,
                used_lessons: request.viewed_lessons,
            },
        );

        Ok(FreelancerRateResponse {
            share_text: share_text(&report),
            report,
        })
    }

    pub fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, CalculationError> {
        let report = self.freelancer.calculate(&request.rates)?;
        let outcome = simulate_project(report.rates.suggested_rate, &request.simulation);
        self.record_usage(
            &report,
            SessionUsage {
                used_simulator: true,
                used_lessons: request.viewed_lessons,
            },
        );

        Ok(SimulationResponse {
            rates: report.rates,
            simulation: request.simulation,
            outcome,
        })
    }

    pub fn client_estimate(
        &self,
        input: &ClientEstimateInput,
    ) -> Result<ClientRateEstimate, CalculationError> {
        self.client.estimate(input)
    }

    pub fn freelancer_report(
        &self,
        request: &FreelancerRateRequest,
    ) -> Result<FreelancerRateReport, CalculationError> {
        self.freelancer.calculate(request)
    }

    /// Fires the analytics webhook, if configured, without waiting on it.
    pub fn record_usage(
        &self,
        report: &FreelancerRateReport,
        usage: SessionUsage,
    ) -> Option<tokio::task::JoinHandle<AnalyticsNotice>> {
        let webhook = self.analytics.as_ref()?;
        if tokio::runtime::Handle::try_current().is_err() {
            debug!("no async runtime; skipping analytics delivery");
            return None;
        }

        let payload = AnalyticsPayload::from_report(report).with_usage(usage);
        Some(webhook.dispatch(payload))
    }
}
