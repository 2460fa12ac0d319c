mod config;
mod error;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use tokio::net::TcpListener;

use crate::config::Config;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,directory_service=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true) // Include the target (module path) in logs
        .init();

    let config = Config::from_env()?;
    tracing::info!("Loaded configuration: {:?}", config);

    let app = routes::create_router(&config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
