// src/lib.rs
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use handlers::{cart_decrease, cart_increase, cart_total, health_check, metrics_handler};

// Public exports (visible outside this module)
pub mod domain;
pub mod middleware;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

// Hoist up only the public symbol(s)
pub use app_state::AppState;
pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
    MatchedPathLabeler,
};

/// Install the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and defaults to `info`. Repeated calls
/// (tests building several routers) are ignored.
pub fn init_tracing() {
    // ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok(); // Ignores if already initialized
}

/// Build the shared state for one router: a fresh metrics backend, an empty
/// cart mirrored into it, and the `MatchedPath` route labeler.
pub fn create_app_state(config: &MetricsConfig) -> Result<AppState> {
    // ---
    let metrics = match config.backend {
        MetricsBackend::Prometheus => create_prom_metrics()?,
        MetricsBackend::Noop => create_noop_metrics()?,
    };

    let cart = Arc::new(domain::Cart::new(metrics.clone()));
    let route_labeler = Arc::new(MatchedPathLabeler::with_fallback(
        config.fallback_route.clone(),
    ));

    Ok(AppState::new(metrics, cart, route_labeler))
}

/// Assemble the router: metrics, health and cart endpoints, the static file
/// fallback, and the instrumentation layer around all of them.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    // ---
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_check))
        .route("/cart/increase", get(cart_increase).post(cart_increase))
        .route("/cart/decrease", get(cart_decrease).post(cart_decrease))
        .route("/cart/total", get(cart_total))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::track_http,
        ))
        .with_state(state)
}

/// Build the HTTP router from an already loaded configuration.
pub fn create_router_with(config: &AppConfig) -> Result<Router> {
    // ---
    let state = create_app_state(&config.metrics)?;
    Ok(build_router(state, &config.server.static_dir))
}

/// Build the HTTP router with configuration determined by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    init_tracing();

    create_router_with(&config)
}
