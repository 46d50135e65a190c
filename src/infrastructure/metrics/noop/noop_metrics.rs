use crate::domain::Metrics;
use axum::http::StatusCode;
use std::time::Duration;

/// No-op metrics implementation for testing.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_http_request(&self, _: &str, _: StatusCode, _: Duration) {}
    fn set_cart_total(&self, _: u64) {}
}
