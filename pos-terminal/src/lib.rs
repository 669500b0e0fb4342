//! Ardyclassic POS terminal core
//!
//! Order building, checkout and finalization for a single restaurant
//! terminal. The UI layer is a thin adapter over [`orders::OrderWorkflow`];
//! this crate owns the catalog, settings, storage, receipt rendering and
//! the completed-order log.

pub mod catalog;
pub mod config;
pub mod logger;
pub mod orders;
pub mod printing;
pub mod reporting;
pub mod storage;

// Re-exports
pub use catalog::Catalog;
pub use config::{AppSettings, Config};
pub use orders::{OrderError, OrderWorkflow};
pub use storage::PosStorage;
