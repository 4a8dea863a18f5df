//! BIAN Credit Card Facility API
//!
//! Single-endpoint read facade over a legacy credit card system, exposing
//! the BIAN-style retrieve contract. Runs against the legacy proxy when
//! `PROXY_BASE_URL` is configured, or standalone against a seeded
//! in-memory store otherwise. Uses hexagonal (ports & adapters)
//! architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod config;
mod context;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{FallbackStore, ProxyClient};
use config::Config;
use domain::ports::FacilitySource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FacilitySource>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Factored out of `main` so integration tests can
/// mount the real routes over a substituted facility source.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/bian/v1/credit-card/customer/:customer_id/retrieve",
            get(handlers::retrieve_credit_card_facility),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bian_ccf_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BIAN Credit Card Facility API...");

    let config = Config::from_env();

    // Composition root: the facility source is chosen and injected here.
    let source: Arc<dyn FacilitySource> = match &config.proxy_base_url {
        Some(base_url) => {
            tracing::info!(proxy_base_url = base_url, "proxy mode");
            Arc::new(
                ProxyClient::new(base_url.clone()).expect("Failed to build proxy HTTP client"),
            )
        }
        None => {
            tracing::info!("fallback mode, serving seeded in-memory data");
            Arc::new(FallbackStore::with_seed_data())
        }
    };

    let app = router(AppState { source });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
