use serde::Serialize;

use crate::models::domain::{ExportFormat, Quiz};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizResponse {
    pub message: String,
    pub quiz: Quiz,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_format: Option<ExportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl GenerateQuizResponse {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            message: "Quiz generated".to_string(),
            quiz,
            export_format: None,
            download_url: None,
        }
    }

    pub fn with_export(mut self, format: ExportFormat) -> Self {
        self.download_url = Some(format!("/download/{}?format={}", self.quiz.id, format));
        self.export_format = Some(format);
        self
    }
}
