use super::domain::{ClientEstimateInput, ClientRateEstimate, CostEstimate, RateRange};
use crate::reference::{CountryProfile, ProjectVolume, ReferenceCatalog, SectorProfile};
use crate::workflows::domain::CalculationError;
use crate::workflows::freelancer::formula::{ethical_minimum_with_hours, HOURS_PER_MONTH_REFERENCE};
use crate::workflows::freelancer::selected;
use std::sync::Arc;
use tracing::{debug, warn};

/// Baseline hours for a single task when the client gives no estimate.
pub const DEFAULT_CLIENT_HOURS: f64 = 8.0;

/// Prices a hire from the market average, experience tier and urgency.
#[derive(Debug, Clone)]
pub struct ClientCostEstimator {
    catalog: Arc<ReferenceCatalog>,
    hours_per_month: f64,
    default_hours: f64,
}

impl ClientCostEstimator {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self {
            catalog,
            hours_per_month: HOURS_PER_MONTH_REFERENCE,
            default_hours: DEFAULT_CLIENT_HOURS,
        }
    }

    pub fn with_hours_per_month(mut self, hours_per_month: f64) -> Self {
        self.hours_per_month = hours_per_month;
        self
    }

    pub fn with_default_hours(mut self, default_hours: f64) -> Self {
        self.default_hours = default_hours;
        self
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn estimate(
        &self,
        input: &ClientEstimateInput,
    ) -> Result<ClientRateEstimate, CalculationError> {
        let (country, sector) = self.resolve_selection(input)?;

        let ethical_min =
            ethical_minimum_with_hours(country.min_monthly_salary, self.hours_per_month);
        let market = self
            .catalog
            .market_rates()
            .resolve(&country.code, &sector.id, ethical_min);

        let tariffs = self.catalog.tariffs();
        let tier = tariffs.experience(input.experience_level);
        let urgency = tariffs.urgency(input.urgency);

        let min_rate = ethical_min.max(market.rate * tier.multiplier_min);
        let max_rate = min_rate.max(market.rate * tier.multiplier_max);

        let hours = self.resolve_hours(input);
        let total_cost_range = (hours > 0.0).then(|| CostEstimate {
            min: min_rate * hours * urgency.multiplier,
            max: max_rate * hours * urgency.multiplier,
            explanation: format!(
                "Estimated for {hours}h at {} urgency.",
                urgency.label
            ),
        });

        debug!(
            country = %country.code,
            sector = %sector.id,
            min_rate,
            max_rate,
            hours,
            "client estimate calculated"
        );

        Ok(ClientRateEstimate {
            country: country.clone(),
            sector: sector.clone(),
            experience_level: input.experience_level,
            urgency: input.urgency,
            volume: input.volume,
            ethical_minimum_rate: ethical_min,
            market_average_rate: market.rate,
            market_source: market.source,
            recommended_range: RateRange {
                min: min_rate,
                max: max_rate,
            },
            urgency_multiplier: urgency.multiplier,
            hours,
            total_cost_range,
        })
    }

    /// Client hours when given and positive, otherwise the volume placeholder.
    fn resolve_hours(&self, input: &ClientEstimateInput) -> f64 {
        match input.estimated_hours {
            Some(hours) if hours > 0.0 => hours,
            Some(hours) => {
                warn!(hours, "estimated hours must be positive; using volume default");
                self.volume_hours(input.volume)
            }
            None => self.volume_hours(input.volume),
        }
    }

    fn volume_hours(&self, volume: ProjectVolume) -> f64 {
        match volume {
            ProjectVolume::OneTask => self.default_hours,
            ProjectVolume::SeveralTasks | ProjectVolume::Recurrent => self.default_hours * 2.0,
        }
    }

    fn resolve_selection(
        &self,
        input: &ClientEstimateInput,
    ) -> Result<(&CountryProfile, &SectorProfile), CalculationError> {
        let country_code = selected(&input.country).ok_or(CalculationError::MissingCountry)?;
        let sector_id = selected(&input.sector).ok_or(CalculationError::MissingSector)?;

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
