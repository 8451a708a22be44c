use actix_web::{HttpResponse, post, web};
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::model::{AlertPayload, AlertResponse, AppError, ErrorCode, ErrorResponse};
use crate::startup::AppState;
use crate::util::{MessageReceipt, OutboundMessage};

#[utoipa::path(
    post,
    path = "/tradingview",
    request_body = AlertPayload,
    responses(
        (status = 200, description = "Alert relayed to the recipient", body = AlertResponse),
        (status = 500, description = "Alert could not be formatted or sent", body = ErrorResponse)
    ),
    tag = "alerts",
)]
#[post("/tradingview")]
pub async fn receive_alert(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let alert = parse_alert_body(&body)
        .inspect_err(|err| warn!("Rejected webhook body: {}", err))?;
    info!(
        "Received webhook data: {}",
        serde_json::to_string_pretty(&alert).unwrap_or_else(|_| alert.to_string())
    );

    let receipt = relay_alert(&alert, &state)
        .await
        .inspect_err(|err| error!(code = ?err.code(), "Error sending alert message: {}", err))?;

    info!(sid = %receipt.sid, "Message sent successfully: {}", receipt.sid);
    Ok(HttpResponse::Ok().json(AlertResponse::sent()))
}

/// Content type is not enforced since alerting platforms sometimes label JSON
/// as `text/plain`. An empty body is read as an empty object.
fn parse_alert_body(body: &[u8]) -> Result<Value, AppError> {
    if body.trim_ascii().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body)
        .map_err(|err| AppError::with_detail(ErrorCode::InvalidPayload, err.to_string()))
}

async fn relay_alert(alert: &Value, state: &AppState) -> Result<MessageReceipt, AppError> {
    let body = AlertPayload::try_from(alert)?.to_message(Utc::now());

    let messenger = state
        .messenger
        .as_ref()
        .ok_or_else(|| AppError::new(ErrorCode::MessagingNotConfigured))?;

    messenger
        .send(OutboundMessage {
            from: state.sender.clone(),
            to: state.recipient.clone(),
            body,
        })
        .await
        .map_err(|err| AppError::with_detail(ErrorCode::AlertSendFailed, err.to_string()))
}
