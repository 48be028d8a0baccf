pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod jobs;
pub mod middleware;
pub mod models;
pub mod provider;
pub mod state;
pub mod util;

use axum::{Router, middleware as axum_middleware};
use middleware::{
    cors_layer, create_rate_limiter, rate_limit_middleware, spawn_rate_limiter_cleanup,
};
use state::AppState;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, errors::AppError, provider::ApiFootballClient};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const RATE_LIMIT_CLEANUP_PERIOD: Duration = Duration::from_secs(60);

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("football_data_be=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Pool plus provider client, shared by the server and the CLI jobs.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let postgres = db::connect(&config).await?;
    let provider = ApiFootballClient::new(
        &config.football_api_base_url,
        config.football_api_key.clone(),
    )?;
    tracing::info!("Football provider at {} ({})", provider.base(), provider.host());

    Ok(AppState {
        postgres,
        provider: Arc::new(provider),
        config: Arc::new(config),
    })
}

pub async fn start_server(config: AppConfig) -> Result<(), AppError> {
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();
    let rate_limiter = create_rate_limiter(config.rate_limit_per_minute);
    spawn_rate_limiter_cleanup(rate_limiter.clone(), RATE_LIMIT_CLEANUP_PERIOD);

    let state = build_state(config).await?;
    db::run_migrations(&state.postgres).await?;

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&allowed_origins))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind port {}: {}", port, e)))?;

    tracing::info!("Football data server listening on http://0.0.0.0:{}", port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::EnvError(format!("Server error: {}", e)))
}
