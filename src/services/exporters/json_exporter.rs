use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    services::exporters::Exporter,
};

/// The stored record, unchanged.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>> {
        serde_json::to_vec_pretty(quiz)
            .map_err(|e| AppError::ExportError(format!("JSON error: {}", e)))
    }
}
