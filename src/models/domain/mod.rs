pub mod export_format;
pub mod question;
pub mod quiz;
pub use export_format::{ExportFormat, HintFormat};
pub use question::Question;
pub use quiz::{Quiz, QuizType};
