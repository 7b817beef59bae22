mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("Starting app...");

    // bus locations: {TAGO_HOST}/1613000/BusLcInfoInqireService/getRouteAcctoBusLcList?serviceKey={KEY}&cityCode={CITY}&routeId={ROUTE}
    // city codes: {TAGO_HOST}/1613000/BusLcInfoInqireService/getCtyCodeList?serviceKey={KEY}
    let config = AppConfig::from_env();
    if config.tago_key.is_none() {
        warn!("TAGO_SERVICE_KEY is not set, requests will fail until it is configured");
    }

    let port = config.port;
    let app = app::gen_app(config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Bus proxy listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
