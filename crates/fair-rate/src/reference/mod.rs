//! Static country, sector, market-rate and quiz tables.

mod catalog;
pub mod domain;
pub mod market;
mod standard;

pub use catalog::ReferenceCatalog;
pub use domain::{
    ClientTariffs, CountryProfile, ExperienceLevel, ExperienceTier, MicroLesson, ProfileLevel,
    ProjectUrgency, ProjectVolume, QuizOption, QuizQuestion, ReferenceError, SectorProfile,
    UrgencyTier,
};
pub use market::{MarketRateSource, MarketRateTable, ResolvedMarketRate};
pub use standard::PLATFORM_QUESTION_ID;
