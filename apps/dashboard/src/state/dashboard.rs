//! # Dashboard Store
//!
//! The current [`DashboardState`] snapshot plus the dashboard lifetime.
//!
//! ## Lifecycle
//! ```text
//! new() ──► mount(source) ──► [one load task] ──► unmount()
//!   │            │                   │                │
//!   │            │                   │                └─ cancels the token;
//!   │            │                   │                   a late result is dropped
//!   │            │                   └─ Loaded: replace products once
//!   │            │                      Failed: keep products, already logged
//!   │            └─ spawns exactly one load; a repeat mount is skipped
//!   └─ empty, not loaded, "All", ""
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use vitrine_client::{load_once, LoadOutcome, ProductSource};
use vitrine_core::{DashboardState, Product};

/// Shared dashboard state.
#[derive(Debug, Default)]
pub struct DashboardStore {
    snapshot: RwLock<Arc<DashboardState>>,
    lifetime: CancellationToken,
    mounted: AtomicBool,
}

impl DashboardStore {
    /// Creates an unmounted store with the initial (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<DashboardState> {
        self.snapshot.read().await.clone()
    }

    /// Applies the user's selection inputs and returns the snapshot they
    /// produced. Absent inputs keep their current value.
    ///
    /// Both inputs are process-wide: the last request wins.
    pub async fn select(&self, category: Option<&str>, search: Option<&str>) -> Arc<DashboardState> {
        if category.is_none() && search.is_none() {
            return self.snapshot().await;
        }

        let mut guard = self.snapshot.write().await;
        let mut next = (**guard).clone();
        if let Some(label) = category {
            next = next.with_category_label(label);
        }
        if let Some(text) = search {
            next = next.with_search(text);
        }

        debug!(
            category = %next.selected_category(),
            search = %next.search_text(),
            "Selection updated"
        );

        let next = Arc::new(next);
        *guard = next.clone();
        next
    }

    /// Starts the dashboard lifetime by spawning the one-shot product load.
    ///
    /// The returned handle resolves once the load has been applied, dropped
    /// or cancelled. A store mounts once: later calls spawn nothing and
    /// return `None`.
    pub fn mount(self: &Arc<Self>, source: Arc<dyn ProductSource>) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            warn!(origin = %source.describe(), "Dashboard already mounted, skipping load");
            return None;
        }

        let store = Arc::clone(self);
        info!(origin = %source.describe(), "Dashboard mounted, loading products");

        Some(tokio::spawn(async move {
            match load_once(source.as_ref(), &store.lifetime).await {
                LoadOutcome::Loaded(products) => store.apply_products(products).await,
                LoadOutcome::Failed(_) => {
                    debug!("Keeping previous products after failed load");
                }
                LoadOutcome::Cancelled => {}
            }
        }))
    }

    /// Ends the dashboard lifetime. Any in-flight load result is discarded.
    pub fn unmount(&self) {
        if !self.lifetime.is_cancelled() {
            info!("Dashboard unmounted");
        }
        self.lifetime.cancel();
    }

    /// True once [`mount`](Self::mount) has been called.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// True once [`unmount`](Self::unmount) has been called.
    pub fn is_unmounted(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Replaces the product list, keeping the current selection.
    async fn apply_products(&self, products: Vec<Product>) {
        let mut guard = self.snapshot.write().await;

        // unmount may have landed between the load finishing and the lock
        if self.lifetime.is_cancelled() {
            debug!("Discarding products loaded after unmount");
            return;
        }

        let count = products.len();
        let next = guard.with_products(products, Some(Utc::now()));
        *guard = Arc::new(next);
        debug!(count, "Products applied to dashboard state");
    }
}
