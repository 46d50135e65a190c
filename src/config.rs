// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every setting has a default, so the service starts with an empty
//! environment; settings that are present but invalid are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::{bail, Result};

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional string environment variable, falling back to `$default`.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub metrics: metrics::MetricsConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env(),
            metrics: metrics::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---

    /// HTTP listener and static content configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the listener binds to. Defaults to `0.0.0.0:8080`.
        pub bind_addr: String,

        /// Directory served for any path no route claims. Defaults to `./static`.
        pub static_dir: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Self {
            // ---
            Self {
                bind_addr: optional_env!("API_BIND_ADDR", "0.0.0.0:8080"),
                static_dir: optional_env!("AXUM_STATIC_DIR", "./static"),
            }
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    /// Which metrics backend to install.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsBackend {
        /// Prometheus registry exposed on `/metrics`.
        Prometheus,
        /// Discard everything; `/metrics` renders empty.
        Noop,
    }

    #[derive(Debug, Clone)]
    pub struct MetricsConfig {
        /// Selected from `AXUM_METRICS_TYPE` (`prom` or `noop`). Defaults to `prom`.
        pub backend: MetricsBackend,

        /// Route label for requests served by the static fallback. Defaults to `/`.
        pub fallback_route: String,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `AXUM_METRICS_TYPE` names an unknown backend.
        pub fn from_env() -> Result<Self> {
            // ---
            let backend = match optional_env!("AXUM_METRICS_TYPE", "prom").as_str() {
                "prom" => MetricsBackend::Prometheus,
                "noop" => MetricsBackend::Noop,
                other => bail!("Invalid AXUM_METRICS_TYPE: {other} (expected prom or noop)"),
            };
            let fallback_route = optional_env!("AXUM_FALLBACK_ROUTE_LABEL", "/");

            Ok(Self {
                backend,
                fallback_route,
            })
        }
    }
}
pub use metrics::{MetricsBackend, MetricsConfig};

// ============================================================
// Tests
// ============================================================
