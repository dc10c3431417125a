use super::domain::ReferenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Sector id used as the per-country catch-all row.
pub const GENERALIST_SECTOR_ID: &str = "other";

/// Multiple of the ethical minimum used when no market row exists at all.
pub const ETHICAL_FALLBACK_MULTIPLIER: f64 = 2.0;

/// Which tier of the fallback chain produced a market rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketRateSource {
    Exact,
    CountryGeneralist,
    EthicalMultiple,
}

impl MarketRateSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "country and sector average",
            Self::CountryGeneralist => "country generalist average",
            Self::EthicalMultiple => "twice the ethical minimum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedMarketRate {
    pub rate: f64,
    pub source: MarketRateSource,
}

/// Average hourly market rates keyed by `(country, sector)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketRateTable {
    rates: BTreeMap<(String, String), f64>,
}

impl MarketRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: &str, sector: &str, rate: f64) {
        self.rates
            .insert((country.to_string(), sector.to_string()), rate);
    }

    pub fn with_rate(mut self, country: &str, sector: &str, rate: f64) -> Self {
        self.insert(country, sector, rate);
        self
    }

    /// Configured rate for the exact pair. Non-positive entries count as absent.
    pub fn get(&self, country: &str, sector: &str) -> Option<f64> {
        self.rates
            .get(&(country.to_string(), sector.to_string()))
            .copied()
            .filter(|rate| *rate > 0.0)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rates
            .iter()
            .map(|((country, sector), rate)| (country.as_str(), sector.as_str(), *rate))
    }

    /// Resolves exact pair, then the country generalist row, then a multiple
    /// of the ethical minimum.
    pub fn resolve(&self, country: &str, sector: &str, ethical_minimum: f64) -> ResolvedMarketRate {
        if let Some(rate) = self.get(country, sector) {
            return ResolvedMarketRate {
                rate,
                source: MarketRateSource::Exact,
            };
        }

        if let Some(rate) = self.get(country, GENERALIST_SECTOR_ID) {
            info!(
                country,
                sector, rate, "no market rate for sector; using country generalist average"
            );
            return ResolvedMarketRate {
                rate,
                source: MarketRateSource::CountryGeneralist,
            };
        }

        let rate = ethical_minimum * ETHICAL_FALLBACK_MULTIPLIER;
        warn!(
            country,
            sector, rate, "no market data for country; deriving rate from ethical minimum"
        );
        ResolvedMarketRate {
            rate,
            source: MarketRateSource::EthicalMultiple,
        }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads `country,sector,rate` rows. Every rate must be positive.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ReferenceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::new();

        for record in csv_reader.deserialize::<MarketRateRow>() {
            let row = record?;
            if row.rate <= 0.0 {
                return Err(ReferenceError::NonPositiveRate {
                    country: row.country,
                    sector: row.sector,
                    rate: row.rate,
                });
            }
            let country = row.country.to_ascii_uppercase();
            if table.get(&country, &row.sector).is_some() {
                return Err(ReferenceError::Duplicate {
                    kind: "market rate",
                    id: format!("{}_{}", country, row.sector),
                });
            }
            table.insert(&country, &row.sector, row.rate);
        }

        Ok(table)
    }
}

#[derive(Debug, Deserialize)]
struct MarketRateRow {
    country: String,
    sector: String,
    rate: f64,
}
