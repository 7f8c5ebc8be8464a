use actix_web::{web, App, HttpServer};
use std::io;
use tl_api::{app, telemetry};
use tl_shared::config::AppConfig;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    telemetry::init_tracing(&config.logging);

    let bind_address = config.server.bind_address();
    info!(
        environment = %config.environment,
        default_language = %config.errors.default_language,
        "Starting Tradelog API Server on {}",
        bind_address
    );

    let error_config = web::Data::new(config.errors.clone());
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(error_config.clone())
            .wrap(TracingLogger::default())
            .configure(app::configure)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
