//! Order finalization
//!
//! Builds the completed-order record, emits it to the sales log, prints the
//! receipt exactly once and resets the terminal for the next order. Holding
//! an order is the sibling transition: same reset, no record emitted.

use rand::Rng;
use rust_decimal::Decimal;
use shared::order::{CompletedOrderRecord, OrderStatus};

use super::checkout::OrderWorkflow;
use super::error::OrderError;

/// Draw a 4-digit order number
///
/// Random, as in the receipt counter this replaces; no uniqueness guarantee
/// across sessions.
pub(crate) fn next_order_number() -> u32 {
    rand::thread_rng().gen_range(1000..=9999)
}

impl OrderWorkflow {
    /// Finalize the current order after a successful payment
    ///
    /// Emission to the sales log is best-effort: a write failure is logged
    /// once and never blocks completion.
    pub(crate) fn finalize(
        &mut self,
        method: &str,
        amount_paid: Decimal,
        change: Option<Decimal>,
    ) -> CompletedOrderRecord {
        let order_number = self.order_number();
        let record = CompletedOrderRecord::from_order(
            self.cart().order(),
            order_number,
            method,
            amount_paid,
            change,
        );

        if let Err(e) = self.recorder().record(&record) {
            tracing::warn!("Failed to record completed order #{}: {}", order_number, e);
        }

        self.cart_mut().mark_status(OrderStatus::Completed);

        let receipt = self.renderer().render(&record);
        self.printer().print(&receipt);

        tracing::info!(
            "Order #{} completed: {:.2} via {}",
            order_number,
            amount_paid,
            method
        );

        self.cart_mut().reset();
        self.set_order_number(next_order_number());

        record
    }

    /// Hold the current order and start a fresh one
    ///
    /// No completed-order record is emitted and the held order is not
    /// retrievable later; its contents are logged so the data is at least
    /// observable.
    pub fn hold(&mut self) -> Result<(), OrderError> {
        if self.cart().order().locked {
            return Err(OrderError::PaymentInFlight);
        }
        if self.cart().order().is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        self.cart_mut().mark_status(OrderStatus::Held);
        match serde_json::to_string(self.cart().order()) {
            Ok(json) => tracing::info!("Order #{} held: {}", self.order_number(), json),
            Err(e) => tracing::warn!("Order #{} held (snapshot unavailable: {})", self.order_number(), e),
        }

        self.cart_mut().reset();
        self.set_order_number(next_order_number());
        Ok(())
    }
}
