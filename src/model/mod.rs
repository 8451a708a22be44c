pub mod alert;
pub mod global_error;
pub mod health;

pub use alert::{AlertPayload, AlertResponse};
pub use global_error::{AppError, ErrorCode, ErrorResponse};
pub use health::HealthResponse;
