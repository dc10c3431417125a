use super::adjustment::{AdjustmentPolicy, BaselineAdjustmentPolicy};
use super::domain::{FreelancerRateReport, FreelancerRateRequest};
use super::formula::{ethical_minimum_with_hours, rate_result, HOURS_PER_MONTH_REFERENCE};
use super::insights::{market_insight, personalized_recommendations};
use super::scoring::{compute_profile_score, validate_answers};
use crate::reference::{CountryProfile, ReferenceCatalog, SectorProfile};
use crate::workflows::domain::CalculationError;
use std::sync::Arc;
use tracing::debug;

/// Stateless engine turning a completed freelancer questionnaire into rates.
#[derive(Debug)]
pub struct FreelancerRateCalculator {
    catalog: Arc<ReferenceCatalog>,
    hours_per_month: f64,
    policy: Box<dyn AdjustmentPolicy>,
}

impl FreelancerRateCalculator {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self::with_policy(catalog, Box::new(BaselineAdjustmentPolicy::default()))
    }

    pub fn with_policy(catalog: Arc<ReferenceCatalog>, policy: Box<dyn AdjustmentPolicy>) -> Self {
        Self {
            catalog,
            hours_per_month: HOURS_PER_MONTH_REFERENCE,
            policy,
        }
    }

    /// Swaps the adjustment policy, keeping the catalog and reference hours.
    pub fn with_adjustment_policy(mut self, policy: Box<dyn AdjustmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hours_per_month(mut self, hours_per_month: f64) -> Self {
        self.hours_per_month = hours_per_month;
        self
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn calculate(
        &self,
        request: &FreelancerRateRequest,
    ) -> Result<FreelancerRateReport, CalculationError> {
        let (country, sector) = self.resolve_selection(request)?;
        let questions = self.catalog.questions();
        validate_answers(&request.answers, questions)?;

        let score = compute_profile_score(&request.answers, questions);
        let ethical_min = ethical_minimum_with_hours(country.min_monthly_salary, self.hours_per_month);
        let market = self
            .catalog
            .market_rates()
            .resolve(&country.code, &sector.id, ethical_min);
        let rates = rate_result(ethical_min, market.rate, score);

        debug!(
            country = %country.code,
            sector = %sector.id,
            score,
            suggested = rates.suggested_rate,
            source = market.source.label(),
            "freelancer rate calculated"
        );

        let level = self
            .catalog
            .level_for(score)
            .cloned()
            .ok_or(CalculationError::MissingReference("profile levels"))?;

        let insight = market_insight(
            rates.market_average_rate,
            score,
            &sector.display_name,
            &country.display_name,
            rates.ethical_minimum_rate,
            rates.suggested_rate,
            &country.currency_symbol,
        );
        let recommendations =
            personalized_recommendations(&level, score, &request.answers, sector, &self.catalog);
        let optimal_adjustment = self
            .policy
            .predict_optimal_adjustment(score, sector, country);
        let history_adjustment = self.policy.adjust_for_history(score);

        Ok(FreelancerRateReport {
            country: country.clone(),
            sector: sector.clone(),
            rates,
            market_source: market.source,
            level,
            market_insight: insight,
            recommendations,
            optimal_adjustment,
            history_adjustment,
        })
    }

    fn resolve_selection(
        &self,
        request: &FreelancerRateRequest,
    ) -> Result<(&CountryProfile, &SectorProfile), CalculationError> {
        let country_code = selected(&request.country).ok_or(CalculationError::MissingCountry)?;
        let sector_id = selected(&request.sector).ok_or(CalculationError::MissingSector)?;

        let country = self
            .catalog
            .country(country_code)
            .ok_or_else(|| CalculationError::UnknownCountry(country_code.to_string()))?;
        let sector = self
            .catalog
            .sector(sector_id)
            .ok_or_else(|| CalculationError::UnknownSector(sector_id.to_string()))?;

        Ok((country, sector))
    }
}

pub(crate) fn selected(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
