//! Order workflow errors
//!
//! All variants are recoverable: validation errors leave the order
//! untouched and the operation can be retried.

use thiserror::Error;

/// Order workflow errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order has no items")]
    EmptyOrder,

    #[error("a table is required for dine-in orders")]
    TableRequired,

    #[error("amount tendered is less than the total")]
    InsufficientTendered,

    #[error("a phone number is required for mobile money")]
    PhoneRequired,

    #[error("order is locked by a payment in progress")]
    OrderLocked,

    #[error("a payment is already being processed")]
    PaymentInFlight,

    #[error("payment was cancelled")]
    PaymentCancelled,

    #[error("payment failed: {0}")]
    Gateway(String),
}
