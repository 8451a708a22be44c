use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use crate::model::global_error::{AppError, ErrorCode};

const NOT_AVAILABLE: &str = "N/A";

/// Webhook body sent by TradingView. Only these fields are read; anything
/// else in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AlertPayload {
    pub symbol: Option<Value>,
    pub price: Option<Value>,
    pub action: Option<Value>,
    pub strategy: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertResponse {
    pub success: bool,
    pub message: String,
}

impl AlertResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Alert sent successfully".to_string(),
        }
    }
}

impl TryFrom<&Value> for AlertPayload {
    type Error = AppError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(AppError::with_detail(
                ErrorCode::AlertFormatFailed,
                format!("alert payload must be a JSON object, got {}", json_kind(value)),
            ));
        }

        serde_json::from_value(value.clone())
            .map_err(|e| AppError::with_detail(ErrorCode::AlertFormatFailed, e.to_string()))
    }
}

impl AlertPayload {
    pub fn to_message(&self, now: DateTime<Utc>) -> String {
        format!(
            "🔔 TradingView Alert!\n\n\
             Symbol: {}\n\
             Price: {}\n\
             Action: {}\n\
             Strategy: {}\n\
             Time: {}",
            render_field(self.symbol.as_ref()),
            render_field(self.price.as_ref()),
            render_field(self.action.as_ref()),
            render_field(self.strategy.as_ref()),
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => NOT_AVAILABLE.to_string(),
        Some(Value::String(text)) if text.is_empty() => NOT_AVAILABLE.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => render_number(number),
        Some(other) => other.to_string(),
    }
}

// zero is falsy, same as an absent field
fn render_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return if int == 0 { NOT_AVAILABLE.to_string() } else { int.to_string() };
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float != 0.0 => render_float(float),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Plain decimal inside [1e-6, 1e21), exponent form with an explicit sign
/// outside it (`1e+21`, `2.5e-7`).
fn render_float(float: f64) -> String {
    let magnitude = float.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return float.to_string();
    }

    let exponent = format!("{float:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
