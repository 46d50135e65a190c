// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod cart;
mod health;
mod metrics;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;

// Cart counter handlers
pub use cart::{cart_decrease, cart_increase, cart_total};
