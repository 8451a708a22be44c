use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 500 SERVER ERRORS
    InvalidPayload,
    AlertFormatFailed,
    AlertSendFailed,
    MessagingNotConfigured,
}

impl ErrorCode {
    /// Caller-facing summary. Every failure on the webhook path reads the
    /// same to the alerting platform; `details` carries the specifics.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload
            | ErrorCode::AlertFormatFailed
            | ErrorCode::AlertSendFailed
            | ErrorCode::MessagingNotConfigured => "Failed to send alert",
        }
    }

    pub fn default_detail(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload => "request body is not valid JSON",
            ErrorCode::AlertFormatFailed => "alert payload could not be formatted",
            ErrorCode::AlertSendFailed => "messaging provider rejected the message",
            ErrorCode::MessagingNotConfigured => "messaging client is not configured",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidPayload
            | ErrorCode::AlertFormatFailed
            | ErrorCode::AlertSendFailed
            | ErrorCode::MessagingNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    ApiError(ErrorCode, Option<String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ApiError(code, detail) => {
                write!(f, "{}", detail.as_deref().unwrap_or(code.default_detail()))
            }
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        AppError::ApiError(code, None)
    }

    pub fn with_detail(code: ErrorCode, detail: impl Into<String>) -> Self {
        AppError::ApiError(code, Some(detail.into()))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ApiError(code, _) => *code,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.code().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse {
            success: false,
            error: self.code().message().to_string(),
            details: self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(response)
    }
}
