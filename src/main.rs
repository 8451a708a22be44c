use std::net::TcpListener;
use std::process;
use std::sync::Arc;

use dotenv::dotenv;
use tracing::{error, info};
use tradingview_relay::configuration::Settings;
use tradingview_relay::startup::{AppState, run};
use tradingview_relay::telemetry::{get_subscriber, init_subscriber};
use tradingview_relay::util::TwilioClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber(
        "tradingview_relay".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            error!("Set them in the environment or in a .env file in the working directory.");
            process::exit(1);
        }
    };

    let messenger = match TwilioClient::new(settings.twilio.clone()) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to initialize Twilio client: {}", err);
            process::exit(1);
        }
    };

    let listener = TcpListener::bind(("0.0.0.0", settings.port))?;
    info!("Server running on port {}", settings.port);
    info!(
        "Environment: {}",
        settings.environment.as_deref().unwrap_or("undefined")
    );
    info!(
        "Health check available at: http://localhost:{}/health",
        settings.port
    );

    run(listener, AppState::new(&settings, Arc::new(messenger)))?.await?;

    Ok(())
}
