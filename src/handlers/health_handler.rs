use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.quiz_service.health_check().await;
    if let Err(e) = &db_health {
        log::warn!("Readiness check failed: {}", e);
    }

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        services::model_service::MockModelClient,
        test_utils::{fixtures, test_helpers::assert_success_status},
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());
    }

    #[actix_web::test]
    async fn test_health_check_ready_with_reachable_store() {
        let state = AppState::from_parts(
            Arc::new(fixtures::InMemoryQuizRepository::new()),
            Arc::new(MockModelClient::new()),
            Config::test_config(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ready");
        assert_eq!(body["dependencies"]["mongodb"], "ok");
    }
}
