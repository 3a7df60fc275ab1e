use crate::models::domain::{HintFormat, QuizType};

pub const QUESTION_COUNT: usize = 5;

const MULTIPLE_CHOICE_PROMPT: &str = r#"Na podstawie poniższego tekstu stwórz dokładnie 5 pytań quizowych wielokrotnego wyboru.
Do każdego pytania podaj dokładnie 4 opcje odpowiedzi w formacie:

"A. ...", "B. ...", "C. ...", "D. ..."

Zaznacz poprawną odpowiedź w polu "correctAnswer", podając tylko literę: A, B, C lub D.

Zwróć wynik jako czysty JSON w tym formacie:
[
  {
    "question": "Pytanie...",
    "options": ["A. opcja1", "B. opcja2", "C. opcja3", "D. opcja4"],
    "correctAnswer": "C"
  }
]
Tekst:
"#;

const OPEN_ENDED_PROMPT: &str = r#"Na podstawie poniższego tekstu stwórz dokładnie 5 pytań quizowych z odpowiedziami.

Zwróć dane w czystym formacie JSON. Każdy element musi zawierać:
- "question": treść pytania,
- "answer": poprawną odpowiedź.

Przykład:
[
  { "question": "Pytanie...", "answer": "Odpowiedź..." }
]

Nie dodawaj nic poza JSON-em.

Tekst:
"#;

/// Builds the generation prompt. The source text is appended verbatim.
pub fn build_quiz_prompt(source_text: &str, quiz_type: QuizType) -> String {
    let template = match quiz_type {
        QuizType::MultipleChoice => MULTIPLE_CHOICE_PROMPT,
        QuizType::OpenEnded => OPEN_ENDED_PROMPT,
    };

    let mut prompt = String::with_capacity(template.len() + source_text.len());
    prompt.push_str(template);
    prompt.push_str(source_text);
    prompt
}

/// Classification prompt for the model-assisted format resolver.
pub fn build_format_prompt(hint: &str) -> String {
    let vocabulary = HintFormat::VOCABULARY
        .iter()
        .map(HintFormat::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Użytkownik napisał: \"{hint}\"\n\
         W jakim formacie pliku chce otrzymać quiz? \
         Odpowiedz dokładnie jednym słowem spośród: {vocabulary}. \
         Jeśli nie da się tego ustalić, odpowiedz: none. \
         Nie dodawaj nic więcej."
    )
}
