//! orgdesk - Entry Point
//!
//! Initializes configuration, logging, the store backend, and the
//! HTTP server. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Open the store backend (memory or file snapshots)
//! 4. Build the services and the /api/v1 router
//! 5. Serve until SIGINT -> graceful shutdown (readiness probe flips to 503)

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use orgdesk::adapters::http::{self, AppState};
use orgdesk::adapters::persistence::{FileStore, InMemoryStore};
use orgdesk::config::{self, StoreBackend};
use orgdesk::ports::{DepartmentStore, EmployeeStore};
use orgdesk::usecases::{DepartmentService, EmployeeService};

#[tokio::main]
async fn main() -> Result<()> {
    // Config path may be overridden as the first CLI argument
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config =
        config::loader::load_config(&config_path).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.persistence.backend,
        "Starting orgdesk"
    );

    // Readiness flag, flipped to false during graceful shutdown
    let (ready_tx, ready_rx) = watch::channel(true);

    let (departments, employees): (Arc<dyn DepartmentStore>, Arc<dyn EmployeeStore>) =
        match config.persistence.backend {
            StoreBackend::Memory => {
                let store = Arc::new(InMemoryStore::new());
                (store.clone(), store)
            }
            StoreBackend::File => {
                let store = Arc::new(
                    FileStore::open(&config.persistence.data_dir)
                        .await
                        .context("Failed to open file store")?,
                );
                (store.clone(), store)
            }
        };

    let state = AppState {
        departments: Arc::new(DepartmentService::new(departments)),
        employees: Arc::new(EmployeeService::new(employees)),
        ready: ready_rx,
    };

    let app = http::router(state, &config.cors).context("Failed to build router")?;

    let bind = config.server.bind_address();
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(bind = %bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ready_tx))
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve on SIGINT, flipping the readiness probe to 503 so a load
/// balancer stops routing before in-flight requests drain.
async fn shutdown_signal(ready_tx: watch::Sender<bool>) {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("SIGINT received, initiating graceful shutdown");
    let _ = ready_tx.send(false);
}
