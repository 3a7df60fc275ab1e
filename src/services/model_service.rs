use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Text-in, text-out access to the language model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Any OpenAI-compatible chat completion endpoint (OpenRouter by default).
pub struct OpenAiCompatibleModelClient {
    client: Client<OpenAIConfig>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleModelClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.model_api_base.clone())
            .with_api_key(config.model_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.model_name.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiCompatibleModelClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response: ChatCompletion = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|e| {
                log::error!("Model request to '{}' failed: {}", self.model, e);
                AppError::from(e)
            })?;

        first_content(response)
    }
}

fn first_content(response: ChatCompletion) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::UpstreamError("Model returned no completion".to_string()))
}
