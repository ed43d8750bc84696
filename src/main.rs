//! AI Gateway - a small AI-completion backend
//!
//! Exposes chat, text generation, sentiment, and summarization endpoints
//! with response caching and fixed-window rate limiting.

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai_gateway::{create_router, AppState, Config};

/// Main entry point for the AI Gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create application state (cache + rate limiter with their sweepers,
///    AI service)
/// 4. Create Axum router with all endpoints and middleware
/// 5. Start HTTP server on configured port
/// 6. On SIGINT/SIGTERM, drain the server and destroy both stores
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AI Gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}ms, rate_limit={} req/{}ms, sweep_interval={}ms",
        config.server_port,
        config.cache_default_ttl_ms,
        config.rate_limit_max_requests,
        config.rate_limit_window_ms,
        config.sweep_interval_ms
    );

    let state = AppState::from_config(&config);
    info!("Cache and rate limiter initialized, sweepers running");

    let app = create_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Peer addresses feed the rate limiter's client identifiers
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // Stop the sweepers and release store state
    state.destroy().await;
    info!("Stores destroyed, shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
