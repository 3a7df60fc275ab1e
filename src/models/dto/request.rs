use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub source_text: String,
    #[serde(default)]
    pub quiz_type: Option<String>,
    /// Free-text wish such as "proszę o plik pdf"; resolved after the quiz is stored.
    #[serde(default)]
    pub format_hint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadQuery {
    pub format: Option<String>,
}
