//! Shared types for the Ardyclassic POS terminal
//!
//! Plain data structures used across crates: menu catalog entries,
//! the order aggregate, payment methods and completed-order records.

pub mod catalog;
pub mod order;

// Re-exports
pub use catalog::MenuEntry;
pub use order::{
    CompletedOrderRecord, Order, OrderLine, OrderStatus, PaymentMethod, ServiceType,
};
pub use serde::{Deserialize, Serialize};
