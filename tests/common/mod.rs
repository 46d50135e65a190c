// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum_cart_metrics::{build_router, create_app_state, MetricsBackend, MetricsConfig};
use reqwest::Client;
use tokio::net::TcpListener;

/// Static fixture directory served by the fallback in tests.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/static");

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---

    /// Spawn a router with its own Prometheus registry and empty cart.
    pub async fn new() -> Self {
        // --
        Self::with_backend(MetricsBackend::Prometheus).await
    }

    pub async fn with_backend(backend: MetricsBackend) -> Self {
        // ---
        let config = MetricsConfig {
            backend,
            fallback_route: "/".to_string(),
        };
        let state = create_app_state(&config).expect("Should be able to create app state");
        let app = build_router(state, STATIC_DIR);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background; accepting starts once bound
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// GET a path and parse the JSON body.
    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        // ---
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON body")
    }

    /// Fetch the current metrics exposition text.
    pub async fn metrics(&self) -> String {
        // ---
        self.client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("Failed to fetch metrics")
            .text()
            .await
            .expect("Failed to read metrics body")
    }
}

/// Find the value of one sample line (`name{labels} value`) in exposition text.
pub fn sample_value(metrics: &str, series: &str) -> Option<f64> {
    // ---
    metrics.lines().find_map(|line| {
        let (name, value) = line.rsplit_once(' ')?;
        (name == series).then(|| value.parse().ok()).flatten()
    })
}
