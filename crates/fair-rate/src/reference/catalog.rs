use super::domain::{
    ClientTariffs, CountryProfile, MicroLesson, ProfileLevel, QuizQuestion, ReferenceError,
    SectorProfile,
};
use super::market::{MarketRateTable, GENERALIST_SECTOR_ID};
use super::standard;
use std::collections::{BTreeMap, HashSet};

/// Immutable bundle of every static table the engine consults.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    countries: Vec<CountryProfile>,
    sectors: Vec<SectorProfile>,
    market_rates: MarketRateTable,
    questions: Vec<QuizQuestion>,
    levels: Vec<ProfileLevel>,
    platform_examples: BTreeMap<&'static str, Vec<&'static str>>,
    client_tips: Vec<&'static str>,
    lessons: Vec<MicroLesson>,
    tariffs: ClientTariffs,
}

impl ReferenceCatalog {
    pub fn standard() -> Self {
        Self {
            countries: standard::countries(),
            sectors: standard::sectors(),
            market_rates: standard::market_rates(),
            questions: standard::quiz_questions(),
            levels: standard::profile_levels(),
            platform_examples: standard::platform_examples(),
            client_tips: standard::client_tips(),
            lessons: standard::micro_lessons(),
            tariffs: ClientTariffs::default(),
        }
    }

    /// Swaps the market rate table, e.g. for a CSV override.
    pub fn with_market_rates(mut self, market_rates: MarketRateTable) -> Self {
        self.market_rates = market_rates;
        self
    }

    pub fn with_countries(mut self, countries: Vec<CountryProfile>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_tariffs(mut self, tariffs: ClientTariffs) -> Self {
        self.tariffs = tariffs;
        self
    }

    pub fn validate(&self) -> Result<(), ReferenceError> {
        let mut seen = HashSet::new();
        for country in &self.countries {
            if country.min_monthly_salary <= 0.0 {
                return Err(ReferenceError::NonPositiveSalary {
                    code: country.code.clone(),
                });
            }
            if !seen.insert(country.code.as_str()) {
                return Err(ReferenceError::Duplicate {
                    kind: "country",
                    id: country.code.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for sector in &self.sectors {
            if !seen.insert(sector.id.as_str()) {
                return Err(ReferenceError::Duplicate {
                    kind: "sector",
                    id: sector.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for lesson in &self.lessons {
            if !seen.insert(lesson.id) {
                return Err(ReferenceError::Duplicate {
                    kind: "lesson",
                    id: lesson.id.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(ReferenceError::Duplicate {
                    kind: "question",
                    id: question.id.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn country(&self, code: &str) -> Option<&CountryProfile> {
        self.countries
            .iter()
            .find(|country| country.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn sector(&self, id: &str) -> Option<&SectorProfile> {
        self.sectors.iter().find(|sector| sector.id == id.trim())
    }

    pub fn countries(&self) -> &[CountryProfile] {
        &self.countries
    }

    pub fn sectors(&self) -> &[SectorProfile] {
        &self.sectors
    }

    pub fn market_rates(&self) -> &MarketRateTable {
        &self.market_rates
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn levels(&self) -> &[ProfileLevel] {
        &self.levels
    }

    pub fn tariffs(&self) -> &ClientTariffs {
        &self.tariffs
    }

    pub fn client_tips(&self) -> &[&'static str] {
        &self.client_tips
    }

    pub fn lessons(&self) -> &[MicroLesson] {
        &self.lessons
    }

    /// Level whose band contains the score, defaulting to the first band.
    pub fn level_for(&self, score: u8) -> Option<&ProfileLevel> {
        self.levels
            .iter()
            .find(|level| level.contains(score))
            .or_else(|| self.levels.first())
    }

    /// Platform examples for a sector, falling back to the generalist list.
    pub fn platform_examples(&self, sector_id: &str) -> &[&'static str] {
        self.platform_examples
            .get(sector_id)
            .or_else(|| self.platform_examples.get(GENERALIST_SECTOR_ID))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
