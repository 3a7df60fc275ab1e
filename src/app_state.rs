use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, QuizRepository},
    services::{
        exporters::ExportService,
        format_resolver::FormatResolver,
        model_service::{ModelClient, OpenAiCompatibleModelClient},
        quiz_service::QuizService,
    },
};

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub format_resolver: Arc<FormatResolver>,
    pub export_service: Arc<ExportService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let model_client = Arc::new(OpenAiCompatibleModelClient::new(&config));
        log::info!(
            "Using model '{}' at {}",
            config.model_name,
            config.model_api_base
        );

        Ok(Self::from_parts(quiz_repository, model_client, config))
    }

    pub fn from_parts(
        quiz_repository: Arc<dyn QuizRepository>,
        model_client: Arc<dyn ModelClient>,
        config: Config,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(quiz_repository, model_client.clone()));
        let format_resolver = Arc::new(FormatResolver::new(model_client));
        let export_service = Arc::new(ExportService::new(&config));

        Self {
            quiz_service,
            format_resolver,
            export_service,
            config: Arc::new(config),
        }
    }
}
