//! Storefront Server binary
//!
//! Loads configuration and seed data, then serves the API until Ctrl-C.

use anyhow::{Context, Result};
use storefront_server::config::{self, Config};
use storefront_server::storage::EntityStore;
use storefront_server::{router, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }
    install_panic_hook();

    info!("Starting Storefront Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Route panics in handler tasks through tracing before the default report
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let payload = panic.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        let location = panic
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        error!(%location, "Panic: {}", message);
        default_hook(panic);
    }));
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Config loaded: bind={}", config.bind_address);

    let store = match &config.seed_path {
        Some(path) => EntityStore::from_seed(config::load_seed(path).await?),
        None => {
            info!("No SEED_PATH set, starting with empty collections");
            EntityStore::new()
        }
    };

    let state = AppState::new(store, config.gate.clone());
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    info!("Server listening on {}", config.bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!(
        "Server stopped: {} transactions recorded, {} listing rebuilds",
        state.store.transaction_count().await,
        state.cache.rebuilds()
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
