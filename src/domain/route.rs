use axum::extract::Request;
use std::sync::Arc;

/// Capability the router must provide to the instrumentation layer.
///
/// Given a request, return its normalized route label (the route template,
/// e.g. `/users/{id}`, never the raw path) so parameterized routes aggregate
/// into a single series.
pub trait RouteLabeler: Send + Sync + 'static {
    // ---
    fn route_label(&self, req: &Request) -> String;
}

pub type RouteLabelerPtr = Arc<dyn RouteLabeler>;
