use std::sync::Arc;

use crate::reference::{QuizOption, QuizQuestion, ReferenceCatalog};
use crate::workflows::freelancer::{FreelancerRateCalculator, FreelancerRateRequest, QuizAnswerSet};

pub(super) const QUESTION_IDS: [&str; 7] = [
    "q1_experience",
    "q2_portfolio",
    "q3_professionalism",
    "q4_tools",
    "q5_reputation",
    "q6_value_proposition",
    "q7_platforms",
];

pub(super) fn catalog() -> Arc<ReferenceCatalog> {
    Arc::new(ReferenceCatalog::standard())
}

pub(super) fn calculator() -> FreelancerRateCalculator {
    FreelancerRateCalculator::new(catalog())
}

/// Points in `QUESTION_IDS` order.
pub(super) fn answers(points: [u32; 7]) -> QuizAnswerSet {
    QUESTION_IDS.iter().copied().zip(points).collect()
}

pub(super) fn top_answers() -> QuizAnswerSet {
    answers([20, 20, 20, 15, 10, 15, 3])
}

pub(super) fn mid_answers() -> QuizAnswerSet {
    answers([10, 10, 10, 10, 7, 10, 2])
}

pub(super) fn request(country: &str, sector: &str, answers: QuizAnswerSet) -> FreelancerRateRequest {
    FreelancerRateRequest {
        country: Some(country.to_string()),
        sector: Some(sector.to_string()),
        answers,
    }
}

pub(super) fn question(id: &'static str, points: &[u32]) -> QuizQuestion {
    QuizQuestion {
        id,
        block_title: "Block",
        question_text: "Question?",
        options: points
            .iter()
            .map(|points| QuizOption {
                text: "Option",
                points: *points,
            })
            .collect(),
    }
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
