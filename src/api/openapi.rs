use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{health, tradingview};
use crate::model::{AlertPayload, AlertResponse, ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, tradingview::receive_alert),
    components(schemas(AlertPayload, AlertResponse, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
