use super::MetricsRegistry;
use anyhow::Result;

/// Request counter, labeled by route template.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Response status counter, labeled by status code.
pub const RESPONSE_STATUS: &str = "response_status";

/// Request duration histogram in seconds, labeled by route template.
pub const HTTP_DURATION: &str = "http_response_time_seconds";

/// Mirror of the cart total.
pub const CART_TOTAL: &str = "cart_total_items";

/// Register the application's metric families on `registry`.
///
/// Registration conflicts surface here, at startup, and never at request time.
pub fn register_all(mut registry: MetricsRegistry) -> Result<MetricsRegistry> {
    // ---
    registry.register_counter(REQUESTS_TOTAL, "Number of get requests.", &["path"])?;
    registry.register_counter(RESPONSE_STATUS, "Status of HTTP response", &["status"])?;
    registry.register_histogram(HTTP_DURATION, "Duration of HTTP requests.", &["path"])?;
    registry.register_gauge(CART_TOTAL, "Total number of items in the cart")?;
    registry.set_gauge(CART_TOTAL, 0.0)?;

    Ok(registry)
}
