use actix_web::{web, App, HttpServer};
use anyhow::Context;
use iva_api::config::{Config, LogFormat};
use iva_api::middleware::ErrorHandler;
use iva_api::modules::AVAILABLE_ENDPOINTS;
use iva_api::taxes::{RateTable, TaxCalculator};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting IVA Colombia API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    for endpoint in AVAILABLE_ENDPOINTS {
        tracing::info!("Endpoint available: {}", endpoint);
    }

    let rates = RateTable::colombia().context("Failed to build the IVA rate table")?;
    tracing::info!("Rate table loaded ({} categories)", rates.len());
    let calculator = web::Data::new(TaxCalculator::new(rates));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(TracingLogger::default())
            .app_data(calculator.clone())
            .configure(iva_api::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated with an error")?;

    Ok(())
}
