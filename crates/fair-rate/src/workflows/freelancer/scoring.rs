use super::domain::QuizAnswerSet;
use crate::reference::QuizQuestion;
use crate::workflows::domain::CalculationError;

/// Normalises awarded points against the best achievable total.
///
/// Only meaningful for a complete answer set; run [`validate_answers`]
/// first. Questions without options add nothing to either sum.
pub fn compute_profile_score(answers: &QuizAnswerSet, questions: &[QuizQuestion]) -> u8 {
    let raw: u64 = questions
        .iter()
        .map(|question| u64::from(answers.get(question.id).unwrap_or(0)))
        .sum();
    let max_possible: u64 = questions
        .iter()
        .map(|question| u64::from(question.max_points()))
        .sum();

    let normalized = if max_possible > 0 {
        raw as f64 / max_possible as f64 * 100.0
    } else {
        0.0
    };

    normalized.round().clamp(0.0, 100.0) as u8
}

/// Checks the answer set holds exactly one in-range entry per question.
pub fn validate_answers(
    answers: &QuizAnswerSet,
    questions: &[QuizQuestion],
) -> Result<(), CalculationError> {
    for (question_id, _) in answers.iter() {
        if !questions.iter().any(|question| question.id == question_id) {
            return Err(CalculationError::UnknownQuestion(question_id.to_string()));
        }
    }

    let missing: Vec<String> = questions
        .iter()
        .filter(|question| answers.get(question.id).is_none())
        .map(|question| question.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CalculationError::IncompleteQuiz {
            answered: questions.len() - missing.len(),
            expected: questions.len(),
            missing,
        });
    }

    for question in questions {
        let points = answers.get(question.id).unwrap_or(0);
        let max = question.max_points();
        if points > max {
            return Err(CalculationError::PointsOutOfRange {
                question: question.id.to_string(),
                points,
                max,
            });
        }
    }

    Ok(())
}
