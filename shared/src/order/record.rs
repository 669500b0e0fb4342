//! Completed-order record - immutable snapshot for reporting

use super::aggregate::Order;
use super::types::{OrderLine, ServiceType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of an order at completion time
///
/// Emitted once to the reporting side when an order finalizes; the order
/// workflow never reads it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedOrderRecord {
    /// Payment unique ID
    pub payment_id: String,
    /// 4-digit order number shown on the receipt
    pub order_number: u32,
    #[serde(default)]
    pub table: String,
    pub service_type: ServiceType,
    pub lines: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    /// Method key: "cash", "mobile-money" or "card"
    pub payment_method: String,
    pub amount_paid: Decimal,
    /// Change returned, cash payments only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
    /// Completion timestamp (Unix milliseconds)
    pub completed_at: i64,
}

impl CompletedOrderRecord {
    /// Build a record from the order being finalized
    pub fn from_order(
        order: &Order,
        order_number: u32,
        payment_method: &str,
        amount_paid: Decimal,
        change: Option<Decimal>,
    ) -> Self {
        Self {
            payment_id: uuid::Uuid::new_v4().to_string(),
            order_number,
            table: order.table.clone(),
            service_type: order.service_type,
            lines: order.lines.clone(),
            subtotal: order.subtotal,
            tax: order.tax,
            total: order.total,
            payment_method: payment_method.to_string(),
            amount_paid,
            change,
            completed_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
