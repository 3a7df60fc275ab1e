use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub source_text: String,
    #[serde(default)]
    pub quiz_type: QuizType,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizType {
    #[default]
    OpenEnded,
    MultipleChoice,
}

impl QuizType {
    /// Anything other than `multiple-choice` falls back to open-ended questions.
    pub fn from_request(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("multiple-choice") => QuizType::MultipleChoice,
            _ => QuizType::OpenEnded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::OpenEnded => "open-ended",
            QuizType::MultipleChoice => "multiple-choice",
        }
    }
}

impl std::fmt::Display for QuizType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Quiz {
    pub fn new(source_text: &str, quiz_type: QuizType, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            source_text: source_text.to_string(),
            quiz_type,
            questions,
            // stored with millisecond precision, keep the in-memory value identical
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Fixed-width RFC 3339 so stored timestamps sort lexicographically.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
