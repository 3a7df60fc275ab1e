use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Model returned invalid JSON: {message}")]
    MalformedModelOutput { message: String, raw: String },

    #[error("Could not reach the model service: {0}")]
    UpstreamError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::MalformedModelOutput { .. } => "MALFORMED_MODEL_OUTPUT",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ExportError(_) => "EXPORT_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedModelOutput { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let raw = match self {
            AppError::MalformedModelOutput { raw, .. } => Some(raw.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            raw,
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ExportError(format!("I/O error: {}", err))
    }
}
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::ExportError(format!("CSV error: {}", err))
    }
}
impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ExportError(format!("Archive error: {}", err))
    }
}
impl From<genpdf::error::Error> for AppError {
    fn from(err: genpdf::error::Error) -> Self {
        AppError::ExportError(format!("PDF error: {}", err))
    }
}
impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
