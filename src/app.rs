use std::{env, str::FromStr, time::Duration};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    routes::apply_routes,
    services::tago_service::{
        tago_service::{ResponseFormat, TagoService, TagoServiceConfig},
        types::tago_service_error::TagoServiceError,
    },
    types::app_state::AppState,
};

const DEFAULT_TAGO_HOST: &str = "https://apis.data.go.kr";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PORT: u16 = 4000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub tago_host: String,
    pub tago_key: Option<String>,
    pub tago_response_format: ResponseFormat,
    pub tago_timeout: Duration,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// A missing service key is not an error here; requests report it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        AppConfig {
            tago_host: lookup("TAGO_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TAGO_HOST.to_string()),
            tago_key: lookup("TAGO_SERVICE_KEY").filter(|k| !k.trim().is_empty()),
            tago_response_format: parse_or_default(
                "TAGO_RESPONSE_FORMAT",
                lookup("TAGO_RESPONSE_FORMAT"),
                ResponseFormat::Json,
            ),
            tago_timeout: Duration::from_secs(parse_or_default(
                "TAGO_TIMEOUT_SECS",
                lookup("TAGO_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )),
            port: parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT),
        }
    }
}

fn parse_or_default<T: FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
    }
}

pub fn gen_app(config: AppConfig) -> Result<Router, TagoServiceError> {
    let state = AppState {
        tago_service: TagoService::new(TagoServiceConfig {
            host: config.tago_host,
            service_key: config.tago_key,
            response_format: config.tago_response_format,
            timeout: config.tago_timeout,
        })?,
    };

    Ok(apply_routes(Router::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub tago_server: mockito::ServerGuard,
}

#[cfg(test)]
pub fn test_config(tago_host: &str, tago_key: Option<&str>) -> AppConfig {
    AppConfig {
        tago_host: tago_host.to_string(),
        tago_key: tago_key.map(str::to_string),
        tago_response_format: ResponseFormat::Json,
        tago_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        port: DEFAULT_PORT,
    }
}

#[cfg(test)]
pub async fn gen_mock_app(tago_key: Option<&str>, format: ResponseFormat) -> MockApp {
    let tago_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        tago_response_format: format,
        ..test_config(&tago_server.url(), tago_key)
    })
    .expect("Failed to build app");

    MockApp { app, tago_server }
}

/// Accepts connections and never answers them.
#[cfg(test)]
pub async fn gen_unresponsive_upstream() -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    (format!("http://{}", addr), handle)
}
