//! Order aggregate and payment types
//!
//! - `Order`: the live cart aggregate for one customer visit
//! - `PaymentMethod`: tagged variants with their method-specific inputs
//! - `CompletedOrderRecord`: immutable snapshot emitted once an order
//!   finalizes, consumed by the reporting side

pub mod aggregate;
pub mod record;
pub mod types;

// Re-exports
pub use aggregate::Order;
pub use record::CompletedOrderRecord;
pub use types::{OrderLine, OrderStatus, PaymentMethod, ServiceType};
