use serde::{Deserialize, Serialize};

/// Which flow a person is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Freelancer,
    Client,
}

/// Reasons the engine refuses to produce a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("no country selected")]
    MissingCountry,
    #[error("no sector selected")]
    MissingSector,
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),
    #[error("unknown sector id '{0}'")]
    UnknownSector(String),
    #[error("reference data has no {0}")]
    MissingReference(&'static str),
    #[error("quiz incomplete: {answered} of {expected} questions answered")]
    IncompleteQuiz {
        answered: usize,
        expected: usize,
        missing: Vec<String>,
    },
    #[error("answer given for unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("answer for '{question}' awards {points} points, maximum is {max}")]
    PointsOutOfRange {
        question: String,
        points: u32,
        max: u32,
    },
}

impl CalculationError {
    /// Message safe to show an end user; never exposes identifiers.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalculationError::UnknownCountry(_)
            | CalculationError::UnknownSector(_)
            | CalculationError::MissingReference(_) => {
                "Reference data for the selected country or sector is missing. Please restart and choose again."
            }
            CalculationError::MissingCountry
            | CalculationError::MissingSector
            | CalculationError::IncompleteQuiz { .. }
            | CalculationError::UnknownQuestion(_)
            | CalculationError::PointsOutOfRange { .. } => {
                "Some required answers are missing. Please restart and complete every step."
            }
        }
    }
}
