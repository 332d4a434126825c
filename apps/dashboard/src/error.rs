//! Error types for the dashboard application.
//!
//! Only startup can fail. A failed product load is not an `AppError`: it is
//! logged by the loader and the dashboard keeps rendering its current state.

use crate::config::ConfigError;
use vitrine_client::LoadError;

/// Dashboard startup errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Product source error: {0}")]
    Source(#[from] LoadError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
