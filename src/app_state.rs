//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor, and to the instrumentation
//! middleware. The `AppState` holds the metrics backend, the shared cart
//! counter and the route labeler.
//!
//! The state is designed to be cheaply cloneable (using `Arc` internally)
//! so it can be passed efficiently to each request handler without
//! expensive copying of resources.

use crate::domain::{CartPtr, MetricsPtr, RouteLabelerPtr};

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the application.
/// Nothing in it is a process-wide global: every router built with its own
/// `AppState` has its own registry and cart, which keeps tests isolated.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)` and to the
///    instrumentation layer via `from_fn_with_state`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
#[derive(Clone)]
pub struct AppState {
    /// Metrics implementation for recording application events.
    ///
    /// Either Prometheus-backed (production) or no-op (testing/development).
    metrics: MetricsPtr,

    /// The shared cart total, mirrored into the metrics gauge.
    cart: CartPtr,

    /// Resolves the route template a request matched.
    route_labeler: RouteLabelerPtr,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, cart: CartPtr, route_labeler: RouteLabelerPtr) -> Self {
        // ---
        AppState {
            metrics,
            cart,
            route_labeler,
        }
    }

    /// Get a reference to the metrics implementation.
    pub fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the shared cart.
    pub fn cart(&self) -> &CartPtr {
        // ---
        &self.cart
    }

    /// Get a reference to the route labeler.
    pub fn route_labeler(&self) -> &RouteLabelerPtr {
        // ---
        &self.route_labeler
    }
}

#[cfg(test)]
mod tests {
    // ---

    use super::*;
    use crate::domain::Cart;
    use crate::infrastructure::{create_prom_metrics, MatchedPathLabeler};
    use std::sync::Arc;

    #[test]
    fn test_app_state_clones_share_the_cart() {
        // ---
        let metrics = create_prom_metrics().unwrap();
        let cart = Arc::new(Cart::new(metrics.clone()));
        let app_state = AppState::new(metrics, cart, Arc::new(MatchedPathLabeler::new()));

        let cloned = app_state.clone();
        cloned.cart().increase();

        assert_eq!(app_state.cart().total(), 1);
        assert!(app_state.metrics().render().contains("cart_total_items 1"));
    }
}
