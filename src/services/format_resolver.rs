use std::sync::Arc;

use crate::{
    constants::prompts::build_format_prompt,
    errors::AppResult,
    models::domain::HintFormat,
    services::model_service::ModelClient,
};

/// A model reply must be more similar than this to a vocabulary word to count.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

const CSV_KEYWORDS: [&str; 4] = ["excel", "csv", "arkusz", "tabela"];
const MARKDOWN_KEYWORDS: [&str; 2] = ["markdown", ".md"];

/// Deterministic substring scan; pdf wins over csv, csv over json, json over markdown.
pub fn keyword_scan(hint: &str) -> Option<HintFormat> {
    let hint = hint.to_lowercase();

    if hint.contains("pdf") {
        Some(HintFormat::Pdf)
    } else if CSV_KEYWORDS.iter().any(|k| hint.contains(k)) {
        Some(HintFormat::Csv)
    } else if hint.contains("json") {
        Some(HintFormat::Json)
    } else if MARKDOWN_KEYWORDS.iter().any(|k| hint.contains(k)) {
        Some(HintFormat::Markdown)
    } else {
        None
    }
}

/// Maps a free-form model reply onto the vocabulary by normalized edit distance.
pub fn match_vocabulary(reply: &str) -> Option<HintFormat> {
    let reply = reply.trim().to_lowercase();
    if reply.is_empty() || reply == "none" {
        return None;
    }

    let (best, score) = HintFormat::VOCABULARY
        .iter()
        .map(|format| (*format, strsim::normalized_levenshtein(&reply, format.as_str())))
        .fold((None, 0.0_f64), |(best, best_score), (format, score)| {
            if score > best_score {
                (Some(format), score)
            } else {
                (best, best_score)
            }
        });

    if score > SIMILARITY_THRESHOLD {
        best
    } else {
        None
    }
}

pub struct FormatResolver {
    model_client: Arc<dyn ModelClient>,
}

impl FormatResolver {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    /// Keyword scan first; only when it finds nothing is the model asked to classify.
    pub async fn resolve_hint(&self, hint: &str) -> AppResult<Option<HintFormat>> {
        if let Some(format) = keyword_scan(hint) {
            log::info!("Format hint resolved by keyword scan: {}", format.as_str());
            return Ok(Some(format));
        }

        let reply = self.model_client.complete(&build_format_prompt(hint)).await?;
        let resolved = match_vocabulary(&reply);

        log::info!(
            "Format hint resolved by model reply '{}': {}",
            reply.trim(),
            resolved.map(|f| f.as_str()).unwrap_or("none")
        );

        Ok(resolved)
    }
}
