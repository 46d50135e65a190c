//! HTTP instrumentation middleware.
//!
//! Wraps every route (and the fallback) so each request produces exactly one
//! log record, one request-counter increment, one histogram observation and
//! one status-counter increment. All of that happens in `InFlight::drop`,
//! which runs once the response body has been fully handed to the server,
//! or earlier if the request is abandoned.

use super::capture::{capture_response, ResponseCapture};
use crate::app_state::AppState;
use crate::domain::MetricsPtr;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Per-request instrumentation state, finalized on drop.
pub(crate) struct InFlight {
    capture: ResponseCapture,
    started: Instant,
    method: Method,
    path: String,
    route: String,
    metrics: MetricsPtr,
}

impl InFlight {
    // ---
    pub(crate) fn start(metrics: MetricsPtr, route: String, req: &Request) -> Self {
        // ---
        InFlight {
            capture: ResponseCapture::new(),
            started: Instant::now(),
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            route,
            metrics,
        }
    }
}

impl AsMut<ResponseCapture> for InFlight {
    fn as_mut(&mut self) -> &mut ResponseCapture {
        &mut self.capture
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        // ---
        let duration = self.started.elapsed();
        let status = self.capture.status();
        let bytes = self.capture.bytes_written();

        if self.capture.is_complete() {
            tracing::info!(
                method = %self.method,
                path = %self.path,
                route = %self.route,
                status = status.as_u16(),
                bytes,
                duration_ms = duration.as_secs_f64() * 1000.0,
                "request completed"
            );
        } else {
            tracing::warn!(
                method = %self.method,
                path = %self.path,
                route = %self.route,
                status = status.as_u16(),
                bytes,
                duration_ms = duration.as_secs_f64() * 1000.0,
                completed = false,
                "request ended before the response was fully written"
            );
        }

        self.metrics
            .record_http_request(&self.route, status, duration);
    }
}

/// Middleware recording latency, size and status for every request.
///
/// Install with `axum::middleware::from_fn_with_state` via `Router::layer`,
/// so the route template is already resolved when it runs. Handler failures
/// are not intercepted: whatever response the handler produced (error status
/// included) is passed on untouched and measured as-is.
pub async fn track_http(State(state): State<AppState>, req: Request, next: Next) -> Response {
    // ---
    let route = state.route_labeler().route_label(&req);
    let mut in_flight = InFlight::start(state.metrics().clone(), route, &req);

    // If this future is dropped while the handler runs, `in_flight` drops
    // with it and the request is still recorded with the capture defaults.
    let response = next.run(req).await;

    // Axum empties HEAD bodies outside this layer without polling them
    if in_flight.method == Method::HEAD {
        in_flight.capture.mark_complete();
    }

    capture_response(response, in_flight)
}
