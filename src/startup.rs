use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use crate::api;
use crate::configuration::Settings;
use crate::util::MessageSender;

/// Read-only state shared by every request handler.
pub struct AppState {
    pub messenger: Option<Arc<dyn MessageSender>>,
    pub sender: String,
    pub recipient: String,
    pub environment: Option<String>,
}

impl AppState {
    pub fn new(settings: &Settings, messenger: Arc<dyn MessageSender>) -> Self {
        Self {
            messenger: Some(messenger),
            sender: settings.sender.clone(),
            recipient: settings.recipient.clone(),
            environment: settings.environment.clone(),
        }
    }
}

pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
