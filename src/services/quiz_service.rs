use std::sync::Arc;

use crate::{
    constants::prompts::build_quiz_prompt,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, QuizType},
        dto::request::GenerateQuizRequest,
    },
    repositories::QuizRepository,
    services::{model_service::ModelClient, response_parser::parse_questions},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    model_client: Arc<dyn ModelClient>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>, model_client: Arc<dyn ModelClient>) -> Self {
        Self {
            repository,
            model_client,
        }
    }

    /// Prompt, ask the model, parse, persist. Any failing step aborts the rest.
    pub async fn generate_quiz(&self, request: &GenerateQuizRequest) -> AppResult<Quiz> {
        let quiz_type = QuizType::from_request(request.quiz_type.as_deref());
        let prompt = build_quiz_prompt(&request.source_text, quiz_type);

        log::info!(
            "Requesting {} quiz for {} characters of source text",
            quiz_type,
            request.source_text.chars().count()
        );

        let raw = self.model_client.complete(&prompt).await?;
        let questions = parse_questions(&raw).inspect_err(|_| {
            log::error!("Model returned malformed quiz JSON, nothing persisted");
        })?;

        self.create_quiz(&request.source_text, quiz_type, questions)
            .await
    }

    pub async fn create_quiz(
        &self,
        source_text: &str,
        quiz_type: QuizType,
        questions: Vec<Question>,
    ) -> AppResult<Quiz> {
        let quiz = Quiz::new(source_text, quiz_type, questions);
        let created = self.repository.create(quiz).await?;

        log::info!(
            "Stored quiz {} with {} questions",
            created.id,
            created.questions.len()
        );
        Ok(created)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list_newest_first().await
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
