use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    services::exporters::Exporter,
};

pub const OPTION_SEPARATOR: &str = " | ";
const HEADER: [&str; 3] = ["question", "options", "correctAnswer"];

pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;

        for question in &quiz.questions {
            let options = question
                .options
                .as_ref()
                .map(|options| options.join(OPTION_SEPARATOR))
                .unwrap_or_default();
            let answer = question.resolved_answer().unwrap_or_default();

            writer.write_record([question.text.as_str(), options.as_str(), answer])?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::ExportError(format!("CSV error: {}", e)))
    }
}
