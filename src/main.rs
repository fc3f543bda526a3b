//! Gigfolio Docs Server
//!
//! Serves the documentation content for the Gigfolio site: topic files
//! parsed into renderable blocks, memoized per process, plus a navigation
//! catalog for the sidebar.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gigfolio_docs::config::Config;
use gigfolio_docs::routes;
use gigfolio_docs::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigfolio_docs=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        Config::default()
    });

    tracing::info!("Starting Gigfolio Docs v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Content root: {}", config.content.root.display());

    if !config.content.root.is_dir() {
        tracing::warn!(
            "Content root {} does not exist; all lookups will 404 until it does",
            config.content.root.display()
        );
    }

    // Create application state
    let state = AppState::new(config.clone());

    // Initial catalog scan
    match state.catalog().refresh(state.store().resolver()).await {
        Ok(()) => {
            let topics = state.catalog().get().await.topic_count();
            tracing::info!("Catalog initialized with {} topics", topics);
        }
        Err(e) => {
            tracing::warn!(
                "Initial catalog scan failed: {}. Will retry on /api/v1/docs/refresh",
                e
            );
        }
    }

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid server host: {}", config.server.host))?,
        config.server.port,
    );
    tracing::info!("Gigfolio Docs listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
