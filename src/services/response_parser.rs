use crate::{
    constants::prompts::QUESTION_COUNT,
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Parses the model's reply as a JSON array of questions.
///
/// Only the JSON shape is checked. The number of questions and which fields
/// are populated are taken as-is; an unexpected count is logged, not rejected.
pub fn parse_questions(raw: &str) -> AppResult<Vec<Question>> {
    let questions: Vec<Question> =
        serde_json::from_str(raw).map_err(|e| AppError::MalformedModelOutput {
            message: e.to_string(),
            raw: raw.to_string(),
        })?;

    if questions.len() != QUESTION_COUNT {
        log::warn!(
            "Model returned {} questions, expected {}",
            questions.len(),
            QUESTION_COUNT
        );
    }

    Ok(questions)
}
