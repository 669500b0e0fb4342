//! Order aggregate - the live cart for one customer visit

use super::types::{OrderLine, OrderStatus, ServiceType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order aggregate
///
/// Lines are kept in insertion order and never contain two entries with the
/// same `entry.id`. `subtotal`/`tax`/`total` are recomputed by the cart
/// aggregator after every mutation, never patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub lines: Vec<OrderLine>,
    /// Table identifier (may be empty; required at checkout for dine-in)
    #[serde(default)]
    pub table: String,
    pub service_type: ServiceType,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Set while a payment is in flight; mutating calls are rejected
    /// until the payment resolves
    #[serde(skip)]
    pub locked: bool,
}

impl Order {
    /// Create a fresh empty order: no lines, no table, dine-in, open
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            table: String::new(),
            service_type: ServiceType::DineIn,
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
            status: OrderStatus::Open,
            locked: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    /// Find a line by catalog entry ID
    pub fn line(&self, entry_id: u32) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.entry.id == entry_id)
    }

    /// Total item count across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
