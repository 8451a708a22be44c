use actix_web::{HttpResponse, Responder, get, web};

use crate::model::HealthResponse;
use crate::startup::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse)
    ),
    tag = "health check",
)]
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: state.environment.clone(),
        twilio_configured: state.messenger.is_some(),
    })
}
