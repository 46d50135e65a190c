use anyhow::Result;
use axum_cart_metrics::{create_router_with, init_tracing, AppConfig};
use tracing::info;

async fn run() -> Result<()> {
    // ---
    let config = AppConfig::from_env()?;
    let app = create_router_with(&config)?;

    let endpoint = &config.server.bind_addr;
    let listener = tokio::net::TcpListener::bind(endpoint).await?;

    info!("Starting Axum Cart Metrics server v{}...", env!("CARGO_PKG_VERSION"));
    info!("Serving requests at endpoint:{}", endpoint);
    info!("Traffic logging enabled");
    info!("Cart API endpoints:");
    info!("  GET/POST /cart/increase - Add item to cart");
    info!("  GET/POST /cart/decrease - Remove item from cart");
    info!("  GET      /cart/total    - Get cart total");
    info!("  GET      /metrics       - Prometheus metrics");
    info!("  static files from {}", config.server.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber to log to stdout
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Server failed: {:#}", err);
        std::process::exit(1);
    }
}
