use serde::{Deserialize, Serialize};

/// Country context for rate calculations, keyed by ISO-like code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub code: String,
    pub display_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub min_monthly_salary: f64,
}

impl CountryProfile {
    pub fn new(
        code: &str,
        display_name: &str,
        currency_code: &str,
        currency_symbol: &str,
        min_monthly_salary: f64,
    ) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            currency_code: currency_code.to_string(),
            currency_symbol: currency_symbol.to_string(),
            min_monthly_salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorProfile {
    pub id: String,
    pub display_name: String,
}

impl SectorProfile {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOption {
    pub text: &'static str,
    pub points: u32,
}

/// One scored question of the freelancer profile quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub block_title: &'static str,
    pub question_text: &'static str,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Highest points any option awards, zero for an option-less question.
    pub fn max_points(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.points)
            .max()
            .unwrap_or(0)
    }
}

/// Profile band derived from the score, with mentor copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileLevel {
    pub name: &'static str,
    pub min_score: u8,
    pub max_score: u8,
    pub mentor_message: &'static str,
    pub mentor_tip: &'static str,
    pub recommendations: Vec<&'static str>,
}

impl ProfileLevel {
    pub fn contains(&self, score: u8) -> bool {
        score >= self.min_score && score <= self.max_score
    }
}

/// Short educational note offered next to a freelancer result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroLesson {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Basic,
    Professional,
    Specialized,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Basic, Self::Professional, Self::Specialized]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Professional => "professional",
            Self::Specialized => "specialized",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.id().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectUrgency {
    Normal,
    Fast,
    Immediate,
}

impl ProjectUrgency {
    pub const fn ordered() -> [Self; 3] {
        [Self::Normal, Self::Fast, Self::Immediate]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Immediate => "immediate",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|urgency| urgency.id().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectVolume {
    OneTask,
    SeveralTasks,
    Recurrent,
}

impl ProjectVolume {
    pub const fn ordered() -> [Self; 3] {
        [Self::OneTask, Self::SeveralTasks, Self::Recurrent]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::OneTask => "one_task",
            Self::SeveralTasks => "several_tasks",
            Self::Recurrent => "recurrent",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        let value = value.trim().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|volume| volume.id().eq_ignore_ascii_case(&value))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTask => "One task",
            Self::SeveralTasks => "Several tasks",
            Self::Recurrent => "Recurrent work",
        }
    }
}

/// Multipliers applied to the market average for a hiring tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperienceTier {
    pub label: &'static str,
    pub multiplier_min: f64,
    pub multiplier_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UrgencyTier {
    pub label: &'static str,
    pub multiplier: f64,
}

/// Experience and urgency tables consumed by the client estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTariffs {
    pub basic: ExperienceTier,
    pub professional: ExperienceTier,
    pub specialized: ExperienceTier,
    pub normal: UrgencyTier,
    pub fast: UrgencyTier,
    pub immediate: UrgencyTier,
}

impl ClientTariffs {
    pub fn experience(&self, level: ExperienceLevel) -> &ExperienceTier {
        match level {
            ExperienceLevel::Basic => &self.basic,
            ExperienceLevel::Professional => &self.professional,
            ExperienceLevel::Specialized => &self.specialized,
        }
    }

    pub fn urgency(&self, urgency: ProjectUrgency) -> &UrgencyTier {
        match urgency {
            ProjectUrgency::Normal => &self.normal,
            ProjectUrgency::Fast => &self.fast,
            ProjectUrgency::Immediate => &self.immediate,
        }
    }
}

impl Default for ClientTariffs {
    fn default() -> Self {
        Self {
            basic: ExperienceTier {
                label: "Basic / Junior",
                multiplier_min: 0.8,
                multiplier_max: 1.0,
            },
            professional: ExperienceTier {
                label: "Intermediate / Professional",
                multiplier_min: 1.0,
                multiplier_max: 1.3,
            },
            specialized: ExperienceTier {
                label: "Expert / Specialized",
                multiplier_min: 1.3,
                multiplier_max: 1.8,
            },
            normal: UrgencyTier {
                label: "Normal",
                multiplier: 1.0,
            },
            fast: UrgencyTier {
                label: "Fast",
                multiplier: 1.25,
            },
            immediate: UrgencyTier {
                label: "Immediate",
                multiplier: 1.75,
            },
        }
    }
}

/// Problems detected while loading or validating reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("country {code} must have a positive minimum monthly salary")]
    NonPositiveSalary { code: String },
    #[error("market rate for {country}/{sector} must be positive, found {rate}")]
    NonPositiveRate {
        country: String,
        sector: String,
        rate: f64,
    },
    #[error("duplicate {kind} identifier {id}")]
    Duplicate { kind: &'static str, id: String },
    #[error("failed to read market rate data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid market rate CSV data: {0}")]
    Csv(#[from] csv::Error),
}
