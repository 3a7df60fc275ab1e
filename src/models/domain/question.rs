use serde::{Deserialize, Serialize};

/// A single quiz item as produced by the model.
///
/// Open-ended questions carry `answer`; multiple-choice questions carry
/// `options` and `correct_answer`. Neither shape is enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question", default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl Question {
    pub fn open_ended(text: &str, answer: &str) -> Self {
        Question {
            text: text.to_string(),
            answer: Some(answer.to_string()),
            ..Default::default()
        }
    }

    pub fn multiple_choice(text: &str, options: &[&str], correct_answer: &str) -> Self {
        Question {
            text: text.to_string(),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            correct_answer: Some(correct_answer.to_string()),
            ..Default::default()
        }
    }

    /// The correct letter for multiple-choice items, the free-text answer otherwise.
    pub fn resolved_answer(&self) -> Option<&str> {
        self.correct_answer
            .as_deref()
            .or(self.answer.as_deref())
    }
}
