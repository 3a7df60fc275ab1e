use actix_web::{get, http::header, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ExportFormat,
        dto::{
            request::{DownloadQuery, GenerateQuizRequest},
            response::GenerateQuizResponse,
        },
    },
};

#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let quiz = state.quiz_service.generate_quiz(&request).await?;
    let mut response = GenerateQuizResponse::new(quiz);

    // The quiz is already stored; an unresolvable hint only drops the suggestion.
    if let Some(hint) = request.format_hint.as_deref().filter(|h| !h.trim().is_empty()) {
        match state.format_resolver.resolve_hint(hint).await {
            Ok(Some(format)) => match format.export_format() {
                Some(export_format) => response = response.with_export(export_format),
                None => log::info!("Hinted format '{}' has no exporter", format.as_str()),
            },
            Ok(None) => log::info!("Format hint '{}' did not match any format", hint),
            Err(e) => log::warn!("Could not resolve format hint '{}': {}", hint, e),
        }
    }

    Ok(HttpResponse::Ok().json(response))
}

#[get("/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/download/{id}")]
pub async fn download_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    query: web::Query<DownloadQuery>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    let format = match query.format.as_deref() {
        Some(format) => format.parse::<ExportFormat>()?,
        None => ExportFormat::Json,
    };

    let export_service = state.export_service.clone();
    let payload = web::block(move || export_service.export(&quiz, format)).await??;

    Ok(HttpResponse::Ok()
        .content_type(payload.content_type)
        .insert_header((header::CONTENT_DISPOSITION, payload.content_disposition()))
        .body(payload.bytes))
}
