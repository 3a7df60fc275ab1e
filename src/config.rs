use std::{env, path::PathBuf};

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub quizzes_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_api_base: String,
    pub model_api_key: SecretString,
    pub model_name: String,
    /// Unset means the bundled DejaVu Sans font.
    pub pdf_font_path: Option<PathBuf>,
    pub export_temp_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .or_else(|_| env::var("MONGO_URI"))
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "quizgen-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            model_api_key: SecretString::from(
                env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            ),
            model_name: env::var("MODEL_NAME")
                .unwrap_or_else(|_| "mistralai/mistral-7b-instruct".to_string()),
            pdf_font_path: env::var("PDF_FONT_PATH").ok().map(PathBuf::from),
            export_temp_dir: env::var("EXPORT_TEMP_DIR").ok().map(PathBuf::from),
        }
    }

    /// Panics when the model service cannot possibly be reached with this configuration
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.model_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: OPENROUTER_API_KEY is not set! Quiz generation requires a model service API key."
            );
        }

        if self.model_name.trim().is_empty() {
            panic!("FATAL: MODEL_NAME is empty! Set MODEL_NAME or leave it unset for the default.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizgen-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            model_api_base: "http://localhost:9999/v1".to_string(),
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_name: "test-model".to_string(),
            pdf_font_path: None,
            export_temp_dir: None,
        }
    }
}
