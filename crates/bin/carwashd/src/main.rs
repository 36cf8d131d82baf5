//! # carwashd: carwash API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Bootstrap the JSON data directory
//! - Construct the store and application services
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use carwash_adapter_http_axum::state::AppState;
use carwash_adapter_storage_json::{InMemoryStore, JsonFileStore};
use carwash_app::ports::CollectionStore;
use carwash_app::services::user_service::AdminSource;
use carwash_app::store::Store;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("unable to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let admin_source = AdminSource::from(config.admins.source);
    match config.storage.backend {
        StorageBackend::Json => {
            let backend = carwash_adapter_storage_json::Config {
                data_dir: config.storage.data_dir.clone(),
            }
            .build()
            .await
            .with_context(|| {
                format!(
                    "unable to prepare data directory {}",
                    config.storage.data_dir.display()
                )
            })?;
            tracing::info!(data_dir = %backend.data_dir().display(), "using json storage");
            serve::<JsonFileStore>(&config, backend, admin_source).await
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, data is lost on exit");
            serve::<InMemoryStore>(&config, InMemoryStore::new(), admin_source).await
        }
    }
}

async fn serve<S>(config: &Config, backend: S, admin_source: AdminSource) -> anyhow::Result<()>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let store = Arc::new(Store::new(backend));
    let state = AppState::new(store, admin_source);
    let app = carwash_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("unable to bind {bind_addr}"))?;
    tracing::info!("carwashd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("carwashd stopped");
    Ok(())
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for sigterm");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
