use crate::app_state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Handler for the `/metrics` endpoint.
///
/// Returns metrics in Prometheus text format for scraping.
/// Uses the metrics implementation from AppState, which could be
/// either Prometheus or no-op depending on configuration.
pub async fn metrics_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    // ---

    let metrics_text = app_state.metrics().render();

    (
        StatusCode::OK,
        [("content-type", prometheus::TEXT_FORMAT)],
        metrics_text,
    )
}
