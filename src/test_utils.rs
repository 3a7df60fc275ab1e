#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{Question, Quiz, QuizType},
        repositories::QuizRepository,
    };

    pub const SOURCE_TEXT: &str = "Wisła jest najdłuższą rzeką w Polsce i ma około 1047 km długości. \
        Źródła Wisły znajdują się w Beskidzie Śląskim, a rzeka uchodzi do Zatoki Gdańskiej.";

    /// Five open-ended questions, the first answered with "Wisła"
    pub fn open_ended_questions() -> Vec<Question> {
        vec![
            Question::open_ended("Jaka jest najdłuższa rzeka w Polsce?", "Wisła"),
            Question::open_ended("Ile kilometrów ma Wisła?", "Około 1047 km"),
            Question::open_ended("Gdzie znajdują się źródła Wisły?", "W Beskidzie Śląskim"),
            Question::open_ended("Dokąd uchodzi Wisła?", "Do Zatoki Gdańskiej"),
            Question::open_ended("W jakim kraju płynie Wisła?", "W Polsce"),
        ]
    }

    /// Five multiple-choice questions, the first one with "B. Wisła" as correct option
    pub fn multiple_choice_questions() -> Vec<Question> {
        vec![
            Question::multiple_choice(
                "Która rzeka jest najdłuższa?",
                &["A. Odra", "B. Wisła", "C. Warta", "D. Bug"],
                "B",
            ),
            Question::multiple_choice(
                "Ile kilometrów ma Wisła?",
                &["A. 500", "B. 750", "C. 1047", "D. 2000"],
                "C",
            ),
            Question::multiple_choice(
                "Gdzie są źródła Wisły?",
                &["A. Beskid Śląski", "B. Tatry", "C. Sudety", "D. Bieszczady"],
                "A",
            ),
            Question::multiple_choice(
                "Dokąd uchodzi Wisła?",
                &["A. Morze Czarne", "B. Zatoka Pucka", "C. Zalew Wiślany", "D. Zatoka Gdańska"],
                "D",
            ),
            Question::multiple_choice(
                "W jakim kraju płynie Wisła?",
                &["A. Czechy", "B. Polska", "C. Słowacja", "D. Niemcy"],
                "B",
            ),
        ]
    }

    pub fn open_ended_reply() -> String {
        serde_json::to_string(&open_ended_questions()).expect("questions serialize")
    }

    pub fn multiple_choice_reply() -> String {
        serde_json::to_string(&multiple_choice_questions()).expect("questions serialize")
    }

    pub fn open_ended_quiz() -> Quiz {
        Quiz::new(SOURCE_TEXT, QuizType::OpenEnded, open_ended_questions())
    }

    pub fn multiple_choice_quiz() -> Quiz {
        Quiz::new(SOURCE_TEXT, QuizType::MultipleChoice, multiple_choice_questions())
    }

    pub struct InMemoryQuizRepository {
        quizzes: Arc<RwLock<Vec<Quiz>>>,
    }

    impl InMemoryQuizRepository {
        pub fn new() -> Self {
            Self {
                quizzes: Arc::new(RwLock::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl QuizRepository for InMemoryQuizRepository {
        async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
            let mut quizzes = self.quizzes.write().await;
            if quizzes.iter().any(|q| q.id == quiz.id) {
                return Err(AppError::DatabaseError(format!(
                    "Quiz with id '{}' already exists",
                    quiz.id
                )));
            }
            quizzes.push(quiz.clone());
            Ok(quiz)
        }

        async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
            let quizzes = self.quizzes.read().await;
            Ok(quizzes.iter().find(|q| q.id == id).cloned())
        }

        async fn list_newest_first(&self) -> AppResult<Vec<Quiz>> {
            let quizzes = self.quizzes.read().await;
            let mut items: Vec<_> = quizzes.iter().rev().cloned().collect();
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(items)
        }

        async fn ping(&self) -> AppResult<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_replies_parse_back() {
        let parsed: Vec<crate::models::domain::Question> =
            serde_json::from_str(&multiple_choice_reply()).unwrap();
        assert_eq!(parsed, multiple_choice_questions());
        assert_eq!(parsed.len(), 5);
    }

    #[test]
    fn test_fixture_quizzes() {
        assert_eq!(open_ended_quiz().questions[0].answer.as_deref(), Some("Wisła"));
        assert_eq!(
            multiple_choice_quiz().questions[0].correct_answer.as_deref(),
            Some("B")
        );
    }
}
