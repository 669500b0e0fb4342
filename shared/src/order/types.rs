//! Shared types for the order workflow

use crate::catalog::MenuEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Service Type
// ============================================================================

/// Service type, affects table-requirement validation at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    #[default]
    DineIn,
    TakeAway,
}

impl ServiceType {
    /// Human-readable label for receipts
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "Dine In",
            ServiceType::TakeAway => "Take Away",
        }
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Order status
///
/// `Completed` and `Held` are terminal: the aggregate is discarded and
/// replaced by a fresh empty order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Held,
    Completed,
}

// ============================================================================
// Order Line
// ============================================================================

/// One menu entry and its quantity within an order
///
/// Quantity is always positive: a line whose quantity would drop to zero
/// is removed from the order instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Snapshot of the catalog entry at the time it was added
    pub entry: MenuEntry,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(entry: MenuEntry) -> Self {
        Self { entry, quantity: 1 }
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.entry.price * Decimal::from(self.quantity)
    }
}

// ============================================================================
// Payment Method
// ============================================================================

/// Payment method with its method-specific inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash {
        /// Amount handed over by the customer
        tendered: Decimal,
    },
    MobileMoney {
        /// Phone identifier the payment request is sent to
        phone: String,
    },
    Card {
        /// Card details are collected but not algorithmically checked
        number: String,
        expiry: String,
        cvv: String,
    },
}

impl PaymentMethod {
    /// Method key as recorded on completed orders and receipts
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash { .. } => "cash",
            PaymentMethod::MobileMoney { .. } => "mobile-money",
            PaymentMethod::Card { .. } => "card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, price: i64) -> MenuEntry {
        MenuEntry {
            id,
            name: format!("entry-{id}"),
            price: Decimal::from(price),
            category: "food".to_string(),
            description: None,
        }
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let mut line = OrderLine::new(entry(1, 150));
        assert_eq!(line.line_total(), Decimal::from(150));

        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::from(450));
    }

    #[test]
    fn payment_method_serializes_tagged() {
        let method = PaymentMethod::Cash {
            tendered: Decimal::from(1300),
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["type"], "CASH");
        assert_eq!(json["tendered"], 1300.0);
    }

    #[test]
    fn method_labels() {
        assert_eq!(
            PaymentMethod::MobileMoney {
                phone: "0712345678".into()
            }
            .label(),
            "mobile-money"
        );
        assert_eq!(
            PaymentMethod::Card {
                number: "4111".into(),
                expiry: "12/27".into(),
                cvv: "123".into()
            }
            .label(),
            "card"
        );
    }
}
