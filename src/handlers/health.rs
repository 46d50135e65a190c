use axum::{http::StatusCode, Json};

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Responds with the health status of the server.
///
/// A light liveness check: the service keeps all state in memory, so a
/// response at all means it is healthy.
///
/// # Examples
/// - `GET /health` → 200 OK `{ "status": "ok" }`
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    // ---
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
