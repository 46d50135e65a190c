mod app_metrics;
mod prometheus_metrics;
mod registry;

pub use prometheus_metrics::PrometheusMetrics;
pub use registry::MetricsRegistry;
use std::sync::Arc;

/// Creates a new Prometheus metrics implementation.
///
/// Every call builds its own registry, so independent routers (and tests)
/// never share series.
///
/// # Errors
/// Returns an error if the application metrics fail to register.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    // ---
    tracing::info!("Initializing Prometheus metrics");
    let registry = app_metrics::register_all(MetricsRegistry::new())?;

    Ok(Arc::new(PrometheusMetrics::new(registry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_valid_metrics() {
        let result = create();
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_twice_does_not_conflict() {
        let first = create();
        let second = create();
        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
