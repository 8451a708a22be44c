mod health;
mod openapi;
mod tradingview;

use actix_web::web;

pub use crate::api::health::health_check;
pub use crate::api::openapi::{ApiDoc, openapi_json};
pub use crate::api::tradingview::receive_alert;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(receive_alert)
        .service(openapi_json);
}
