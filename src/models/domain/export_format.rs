use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Formats served by the download endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Pdf,
    Docx,
    Png,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "png" => Ok(ExportFormat::Png),
            other => Err(AppError::UnsupportedFormat(format!(
                "'{}' is not one of json, csv, pdf, docx, png",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a user may ask for in free text. Wider than [`ExportFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintFormat {
    Pdf,
    Csv,
    Json,
    Markdown,
    Docx,
    Html,
}

impl HintFormat {
    pub const VOCABULARY: [HintFormat; 6] = [
        HintFormat::Pdf,
        HintFormat::Csv,
        HintFormat::Json,
        HintFormat::Markdown,
        HintFormat::Docx,
        HintFormat::Html,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HintFormat::Pdf => "pdf",
            HintFormat::Csv => "csv",
            HintFormat::Json => "json",
            HintFormat::Markdown => "markdown",
            HintFormat::Docx => "docx",
            HintFormat::Html => "html",
        }
    }

    /// `None` for hinted formats that have no exporter.
    pub fn export_format(&self) -> Option<ExportFormat> {
        match self {
            HintFormat::Pdf => Some(ExportFormat::Pdf),
            HintFormat::Csv => Some(ExportFormat::Csv),
            HintFormat::Json => Some(ExportFormat::Json),
            HintFormat::Docx => Some(ExportFormat::Docx),
            HintFormat::Markdown | HintFormat::Html => None,
        }
    }
}
