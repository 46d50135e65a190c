mod cart;
mod metrics;
mod route;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Shared cart counter
pub use cart::{Cart, CartPtr};

// Router collaborator capability
pub use route::{RouteLabeler, RouteLabelerPtr};
