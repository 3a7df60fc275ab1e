pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{download_quiz, generate_quiz, list_quizzes};

/// Source texts routinely exceed actix's 32 KiB JSON default.
pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Malformed or ill-typed bodies get the same JSON error shape as every other failure.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    AppError::ValidationError(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error),
    )
    .service(generate_quiz)
    .service(list_quizzes)
    .service(download_quiz)
    .service(health_check)
    .service(health_check_ready)
    .service(health_check_live);
}
