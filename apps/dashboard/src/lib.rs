//! # Vitrine Dashboard
//!
//! Server-rendered product dashboard.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard Startup                                    │
//! │                                                                         │
//! │  1. Initialize Tracing ───────────────────────────────────────────────► │
//! │     RUST_LOG, default "info,vitrine=debug,reqwest=warn"                 │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     defaults → vitrine.toml → VITRINE_* environment                     │
//! │                                                                         │
//! │  3. Mount ────────────────────────────────────────────────────────────► │
//! │     spawn the one-shot product load (serving starts immediately,        │
//! │     the page shows the empty state until products arrive)               │
//! │                                                                         │
//! │  4. Serve ────────────────────────────────────────────────────────────► │
//! │     axum on server.bind_addr:server.port                                │
//! │                                                                         │
//! │  5. Shutdown (Ctrl+C / SIGTERM) ──────────────────────────────────────► │
//! │     unmount (cancel the lifetime), then drain the server                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrine_client::HttpProductSource;

pub use config::{ConfigError, DashboardConfig, ServerSettings};
pub use error::{AppError, AppResult};
pub use routes::build_router;
pub use state::DashboardStore;

/// Runs the dashboard until a shutdown signal arrives.
pub async fn run(config: DashboardConfig) -> AppResult<()> {
    let source = HttpProductSource::new(&config.source)?;

    let store = Arc::new(DashboardStore::new());
    store.mount(Arc::new(source));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(%addr, "Dashboard listening");

    let app = build_router(store.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            store.unmount();
        })
        .await
        .map_err(AppError::Serve)?;

    info!("Dashboard shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vitrine=trace` - Show trace for vitrine crates only
/// - Default: info, with debug for vitrine crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
