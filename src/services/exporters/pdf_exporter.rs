use std::{fs, path::PathBuf};

use genpdf::{
    elements::{Break, Paragraph},
    fonts::{FontData, FontFamily},
    style::Style,
    Alignment, Element as _, SimplePageDecorator,
};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    services::exporters::{question_lines, Exporter, DOCUMENT_TITLE},
};

/// DejaVu Sans, shipped in `assets/fonts` with its license.
const BUNDLED_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

const TITLE_FONT_SIZE: u8 = 20;
const BODY_FONT_SIZE: u8 = 12;
const PAGE_MARGIN_MM: i32 = 15;

/// Single-column PDF. The built-in PDF fonts cannot encode Polish
/// diacritics, so a TrueType font is embedded.
///
/// genpdf embeds the font once per family slot and does not subset it, so a
/// document carries four copies of the font file (about 4 MB with DejaVu Sans).
pub struct PdfExporter {
    font_path: Option<PathBuf>,
}

impl PdfExporter {
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self { font_path }
    }

    fn font_bytes(&self) -> AppResult<Vec<u8>> {
        let Some(path) = &self.font_path else {
            return Ok(BUNDLED_FONT.to_vec());
        };

        fs::read(path).map_err(|e| {
            AppError::ExportError(format!(
                "Cannot read PDF font '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn load_font_family(&self) -> AppResult<FontFamily<FontData>> {
        let font = FontData::new(self.font_bytes()?, None)?;

        Ok(FontFamily {
            regular: font.clone(),
            bold: font.clone(),
            italic: font.clone(),
            bold_italic: font,
        })
    }
}

impl Exporter for PdfExporter {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>> {
        let mut doc = genpdf::Document::new(self.load_font_family()?);
        doc.set_title(DOCUMENT_TITLE);
        doc.set_font_size(BODY_FONT_SIZE);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGIN_MM);
        doc.set_page_decorator(decorator);

        doc.push(
            Paragraph::new(DOCUMENT_TITLE)
                .aligned(Alignment::Center)
                .styled(Style::new().bold().with_font_size(TITLE_FONT_SIZE)),
        );
        doc.push(Break::new(1));

        for (index, question) in quiz.questions.iter().enumerate() {
            for line in question_lines(index + 1, question) {
                doc.push(Paragraph::new(line));
            }
            doc.push(Break::new(1));
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes)?;
        Ok(bytes)
    }
}
