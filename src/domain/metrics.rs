use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;

/// Abstraction for application metrics (counters, histograms, gauges).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record one finished HTTP request against its route template and final status.
    ///
    /// Called exactly once per request by the instrumentation middleware.
    fn record_http_request(&self, route: &str, status: StatusCode, duration: Duration);

    /// Overwrite the cart gauge with the current cart total.
    fn set_cart_total(&self, total: u64);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
