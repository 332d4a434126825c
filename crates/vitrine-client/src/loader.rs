//! # Loader
//!
//! The load policy around a [`ProductSource`]:
//!
//! 1. fetch the records (exactly once, no retry, no backoff)
//! 2. validate every record into a [`Product`]; any bad record fails the load
//! 3. sort ascending by id (stable)
//! 4. warn about duplicate ids, which break row identity but nothing else
//!
//! [`load_once`] wraps that in the dashboard lifetime: when the token is
//! cancelled first, the result is dropped and reported as
//! [`LoadOutcome::Cancelled`].

use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use vitrine_core::types::sort_by_id;
use vitrine_core::validation::duplicate_ids;
use vitrine_core::Product;

use crate::error::{LoadError, LoadResult};
use crate::source::ProductSource;

/// What became of a one-shot load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Products ready to replace the current list, ascending by id.
    Loaded(Vec<Product>),
    /// The load failed; the failure has already been logged.
    Failed(LoadError),
    /// The lifetime ended first; any result was discarded.
    Cancelled,
}

/// Fetches, validates and sorts the products.
pub async fn load_products<S>(source: &S) -> LoadResult<Vec<Product>>
where
    S: ProductSource + ?Sized,
{
    let records = source.fetch().await?;

    let mut products = records
        .into_iter()
        .map(|record| record.into_product())
        .collect::<Result<Vec<_>, _>>()?;

    sort_by_id(&mut products);

    let duplicates = duplicate_ids(&products);
    if !duplicates.is_empty() {
        warn!(?duplicates, "Products contain duplicate ids");
    }

    Ok(products)
}

/// Runs one load bound to `lifetime`.
///
/// ## Outcome
/// ```text
/// token cancelled before the fetch resolves ──► Cancelled (result dropped)
/// fetch resolves, token still live ──────────► Loaded / Failed
/// fetch resolves, token cancelled meanwhile ─► Cancelled (late result dropped)
/// ```
///
/// Failures are logged here so callers only need to decide whether to apply.
pub async fn load_once<S>(source: &S, lifetime: &CancellationToken) -> LoadOutcome
where
    S: ProductSource + ?Sized,
{
    let origin = source.describe();
    let start = Instant::now();

    let result = tokio::select! {
        biased;
        _ = lifetime.cancelled() => {
            debug!(%origin, "Load cancelled before completion");
            return LoadOutcome::Cancelled;
        }
        result = load_products(source) => result,
    };

    if lifetime.is_cancelled() {
        debug!(%origin, "Discarding load result that arrived after cancellation");
        return LoadOutcome::Cancelled;
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(products) => {
            info!(%origin, count = products.len(), elapsed_ms, "Products loaded");
            LoadOutcome::Loaded(products)
        }
        Err(err) => {
            warn!(%origin, kind = err.kind(), error = %err, elapsed_ms, "Failed to load products");
            LoadOutcome::Failed(err)
        }
    }
}
