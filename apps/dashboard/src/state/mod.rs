//! # State Module
//!
//! Holds the process-wide dashboard state for the HTTP handlers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      axum Router                                │   │
//! │  │  .with_state(Arc<DashboardStore>)                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    DashboardStore                               │   │
//! │  │                                                                 │   │
//! │  │  RwLock<Arc<DashboardState>>    CancellationToken (lifetime)    │   │
//! │  │  readers clone the Arc           cancelled on unmount           │   │
//! │  │  writers replace it whole                                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Snapshots are immutable; derivation never holds the lock            │
//! │  • The loader writes at most once, and never after unmount             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod dashboard;

pub use dashboard::DashboardStore;
