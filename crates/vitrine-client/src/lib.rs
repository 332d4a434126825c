//! # vitrine-client: Product Loader for Vitrine
//!
//! Fetches the product list once, turns wire records into domain products,
//! and hands back a list sorted by id.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One-Shot Load                                    │
//! │                                                                         │
//! │  load_once(source, lifetime_token)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  select! {                                                      │   │
//! │  │    token.cancelled()  ──────────────────────► Cancelled         │   │
//! │  │    load_products(source) ──┐                                    │   │
//! │  │  }                         │                                    │   │
//! │  └────────────────────────────┼────────────────────────────────────┘   │
//! │                               ▼                                         │
//! │   ProductSource::fetch()  (HttpProductSource: GET /api/produtos)       │
//! │                               │                                         │
//! │                               ▼                                         │
//! │   ProductRecord ──► Product (validated) ──► sort by id                 │
//! │                               │                                         │
//! │                               ▼                                         │
//! │   Loaded(products) │ Failed(LoadError) (logged, never retried)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Source settings (endpoint URL, timeout)
//! - [`error`] - Load failure types
//! - [`wire`] - JSON records as served by the endpoint
//! - [`source`] - The `ProductSource` seam and its reqwest implementation
//! - [`loader`] - Load policy: validate, sort, cancel

pub mod config;
pub mod error;
pub mod loader;
pub mod source;
pub mod wire;

pub use config::SourceSettings;
pub use error::{LoadError, LoadResult};
pub use loader::{load_once, load_products, LoadOutcome};
pub use source::{HttpProductSource, ProductSource, StaticSource};
pub use wire::ProductRecord;
