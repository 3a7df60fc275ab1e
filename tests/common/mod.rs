#![allow(dead_code)]

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::Arc,
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::{Mutex, RwLock};

use quizgen_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::QuizRepository,
    services::model_service::ModelClient,
};

pub const SOURCE_TEXT: &str = "Mikołaj Kopernik urodził się w 1473 roku w Toruniu. \
    W dziele „O obrotach sfer niebieskich” przedstawił heliocentryczny model Układu Słonecznego.";

pub const OPEN_ENDED_REPLY: &str = r#"[
  { "question": "Gdzie urodził się Kopernik?", "answer": "W Toruniu" },
  { "question": "W którym roku urodził się Kopernik?", "answer": "1473" },
  { "question": "Jak nazywa się jego główne dzieło?", "answer": "O obrotach sfer niebieskich" },
  { "question": "Jaki model przedstawił?", "answer": "Heliocentryczny" },
  { "question": "Co jest w centrum modelu?", "answer": "Słońce" }
]"#;

pub const MULTIPLE_CHOICE_REPLY: &str = r#"[
  { "question": "Gdzie urodził się Kopernik?", "options": ["A. Kraków", "B. Toruń", "C. Gdańsk", "D. Poznań"], "correctAnswer": "B" },
  { "question": "W którym roku?", "options": ["A. 1473", "B. 1543", "C. 1500", "D. 1410"], "correctAnswer": "A" },
  { "question": "Jaki model?", "options": ["A. Geocentryczny", "B. Heliocentryczny", "C. Płaski", "D. Żaden"], "correctAnswer": "B" },
  { "question": "Czyje dzieło?", "options": ["A. Galileusza", "B. Keplera", "C. Kopernika", "D. Newtona"], "correctAnswer": "C" },
  { "question": "Co w centrum?", "options": ["A. Ziemia", "B. Księżyc", "C. Mars", "D. Słońce"], "correctAnswer": "D" }
]"#;

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<Vec<Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }

        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn list_newest_first(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        // Reversed insertion order, so the stable sort keeps later inserts first on ties.
        let mut items: Vec<_> = quizzes.iter().rev().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedModelClient {
    replies: Mutex<VecDeque<AppResult<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModelClient {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().await.push(prompt.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AppError::UpstreamError("no scripted reply left".to_string())))
    }
}

pub fn test_config(export_temp_dir: Option<PathBuf>) -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quizgen-test".to_string(),
        quizzes_collection: "quizzes".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 3000,
        model_api_base: "http://localhost:9999/v1".to_string(),
        model_api_key: SecretString::from("test_api_key".to_string()),
        model_name: "test-model".to_string(),
        pdf_font_path: None,
        export_temp_dir,
    }
}

pub fn app_state(model: Arc<ScriptedModelClient>, export_temp_dir: Option<PathBuf>) -> AppState {
    app_state_with_config(model, test_config(export_temp_dir))
}

pub fn app_state_with_config(model: Arc<ScriptedModelClient>, config: Config) -> AppState {
    AppState::from_parts(Arc::new(InMemoryQuizRepository::new()), model, config)
}
