//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to the name-addressed
//! `MetricsRegistry` in the sibling `registry.rs`, using the identifiers
//! declared in `app_metrics.rs`.
//!
//! Recording never fails the request: a rejected update is logged at `warn`
//! and dropped.

use super::app_metrics::{CART_TOTAL, HTTP_DURATION, REQUESTS_TOTAL, RESPONSE_STATUS};
use super::MetricsRegistry;
use crate::domain::Metrics;
use axum::http::StatusCode;
use std::time::Duration;

/// Prometheus-based metrics implementation.
///
/// Owns its registry; cloning the surrounding `MetricsPtr` shares it.
pub struct PrometheusMetrics {
    registry: MetricsRegistry,
}

impl PrometheusMetrics {
    pub fn new(registry: MetricsRegistry) -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics { registry }
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        match self.registry.snapshot() {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Failed to encode metrics: {:?}", err);
                String::new()
            }
        }
    }

    fn record_http_request(&self, route: &str, status: StatusCode, duration: Duration) {
        // ---
        tracing::debug!("Recording HTTP request for route {}", route);

        let status = status.as_u16().to_string();
        let results = [
            self.registry.increment_counter(REQUESTS_TOTAL, &[route]),
            self.registry
                .observe_histogram(HTTP_DURATION, &[route], duration.as_secs_f64()),
            self.registry.increment_counter(RESPONSE_STATUS, &[&status]),
        ];

        for err in results.into_iter().filter_map(Result::err) {
            tracing::warn!("Dropped HTTP request metric: {:?}", err);
        }
    }

    fn set_cart_total(&self, total: u64) {
        if let Err(err) = self.registry.set_gauge(CART_TOTAL, total as f64) {
            tracing::warn!("Dropped cart gauge update: {:?}", err);
        }
    }
}
