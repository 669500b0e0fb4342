//! Order workflow: cart aggregation, totals, checkout and finalization

pub mod cart;
pub mod checkout;
pub mod error;
pub mod finalize;
pub mod totals;

// Re-exports
pub use cart::Cart;
pub use checkout::{
    change_due, GatewayError, OrderWorkflow, PaymentGateway, SimulatedGateway,
};
pub use error::OrderError;
pub use totals::Totals;
