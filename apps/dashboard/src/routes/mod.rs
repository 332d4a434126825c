//! # HTTP Routes
//!
//! ```text
//! GET /           ?category=..&q=..   HTML page
//! GET /api/view   ?category=..&q=..   view model as JSON
//! GET /health                         {"status":"ok","loaded":bool,"products":N}
//! ```
//!
//! Submitting the form is the user's input event: present query parameters
//! replace the process-wide selection before the page is rendered from the
//! resulting snapshot.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use vitrine_core::DashboardView;

use crate::render::render_page;
use crate::state::DashboardStore;

/// Selection inputs carried by the dashboard form.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub loaded: bool,
    pub products: usize,
}

/// Builds the dashboard router.
pub fn build_router(store: Arc<DashboardStore>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/view", get(view_handler))
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn current_view(store: &DashboardStore, params: &SelectionParams) -> DashboardView {
    let snapshot = store
        .select(params.category.as_deref(), params.q.as_deref())
        .await;
    snapshot.view()
}

/// Dashboard page.
async fn index_handler(
    State(store): State<Arc<DashboardStore>>,
    Query(params): Query<SelectionParams>,
) -> impl IntoResponse {
    Html(render_page(&current_view(&store, &params).await))
}

/// Dashboard view model as JSON.
async fn view_handler(
    State(store): State<Arc<DashboardStore>>,
    Query(params): Query<SelectionParams>,
) -> Json<DashboardView> {
    Json(current_view(&store, &params).await)
}

/// Health check endpoint.
async fn health_handler(State(store): State<Arc<DashboardStore>>) -> Json<HealthStatus> {
    let snapshot = store.snapshot().await;
    Json(HealthStatus {
        status: "ok".to_string(),
        loaded: snapshot.is_loaded(),
        products: snapshot.products().len(),
    })
}
