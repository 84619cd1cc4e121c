//! # Blog Gateway
//!
//! Serves the blog GraphQL schema over HTTP, resolving every field against the REST
//! backend named by `--backend-url` (default `http://localhost:3300`).
//!
//! ```bash
//! RUST_LOG=info blog-gateway --backend-url http://localhost:3300 --port 8080
//! ```
//!
//! Then open `http://localhost:8080/` for GraphiQL, or `POST` queries to the same path.

use blog_gateway::config::GatewayOptions;
use blog_gateway::lifecycle::{GatewaySystem, LifecycleError};
use clap::Parser;
use rest_actor::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), LifecycleError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let options = GatewayOptions::parse();
    info!(
        backend = %options.backend_url,
        port = options.port,
        "Starting blog gateway"
    );

    let system = GatewaySystem::new(&options)?;
    let listener = TcpListener::bind(options.listen_address()).await?;

    system.serve(listener, shutdown_signal()).await?;

    system.shutdown().await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
