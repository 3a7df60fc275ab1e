pub mod csv_exporter;
pub mod docx_exporter;
pub mod json_exporter;
pub mod pdf_exporter;
pub mod png_exporter;

pub use csv_exporter::CsvExporter;
pub use docx_exporter::DocxExporter;
pub use json_exporter::JsonExporter;
pub use pdf_exporter::PdfExporter;
pub use png_exporter::PngExporter;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{ExportFormat, Question, Quiz},
};

pub const DOCUMENT_TITLE: &str = "Quiz";
pub const MISSING_ANSWER: &str = "Brak odpowiedzi";

pub trait Exporter: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

impl ExportPayload {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

pub struct ExportService {
    json: JsonExporter,
    csv: CsvExporter,
    pdf: PdfExporter,
    docx: DocxExporter,
    png: PngExporter,
}

impl ExportService {
    pub fn new(config: &Config) -> Self {
        Self {
            json: JsonExporter,
            csv: CsvExporter,
            pdf: PdfExporter::new(config.pdf_font_path.clone()),
            docx: DocxExporter::new(config.export_temp_dir.clone()),
            png: PngExporter,
        }
    }

    fn exporter(&self, format: ExportFormat) -> &dyn Exporter {
        match format {
            ExportFormat::Json => &self.json,
            ExportFormat::Csv => &self.csv,
            ExportFormat::Pdf => &self.pdf,
            ExportFormat::Docx => &self.docx,
            ExportFormat::Png => &self.png,
        }
    }

    /// Blocking: PDF and DOCX rendering touch the filesystem.
    pub fn export(&self, quiz: &Quiz, format: ExportFormat) -> AppResult<ExportPayload> {
        let exporter = self.exporter(format);
        let bytes = exporter.render(quiz).inspect_err(|e| {
            log::error!("Exporting quiz {} as {} failed: {}", quiz.id, format, e);
        })?;

        Ok(ExportPayload {
            bytes,
            content_type: exporter.content_type(),
            filename: format!("quiz-{}.{}", quiz.id, exporter.extension()),
        })
    }
}

/// Text layout shared by the PDF and DOCX documents: a header line, one
/// line per option and the answer line.
pub fn question_lines(number: usize, question: &Question) -> Vec<String> {
    let mut lines = vec![format!("Pytanie {}: {}", number, question.text)];

    if let Some(options) = &question.options {
        lines.extend(options.iter().map(|option| format!("- {}", option)));
    }

    lines.push(format!(
        "Odpowiedź: {}",
        question.resolved_answer().unwrap_or(MISSING_ANSWER)
    ));
    lines
}
