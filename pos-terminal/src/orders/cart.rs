//! Cart aggregator
//!
//! Owns the live [`Order`] and exposes its mutators. Every mutation leaves
//! `subtotal`/`tax`/`total` consistent before returning; recomputation is
//! part of the contract, not the caller's responsibility.

use rust_decimal::Decimal;
use shared::order::{Order, OrderLine, OrderStatus, ServiceType};
use shared::MenuEntry;

use super::error::OrderError;
use super::totals;

/// Cart aggregator holding the current order
#[derive(Debug, Clone)]
pub struct Cart {
    order: Order,
    /// Tax rate as a fraction (0.16 = 16%)
    tax_rate: Decimal,
}

impl Cart {
    /// Create a cart with a fresh empty order
    pub fn new(tax_rate: Decimal) -> Self {
        Self {
            order: Order::new(),
            tax_rate,
        }
    }

    /// The current order
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Add one unit of a menu entry
    ///
    /// If a line for `entry.id` already exists its quantity is incremented;
    /// otherwise a new line is appended.
    pub fn add_item(&mut self, entry: MenuEntry) -> Result<(), OrderError> {
        self.check_unlocked()?;
        match self.order.lines.iter_mut().find(|l| l.entry.id == entry.id) {
            Some(line) => line.quantity += 1,
            None => self.order.lines.push(OrderLine::new(entry)),
        }
        self.recompute();
        Ok(())
    }

    /// Increment the quantity of the line for `entry_id`; unknown id is a no-op
    pub fn increment_line(&mut self, entry_id: u32) -> Result<(), OrderError> {
        self.check_unlocked()?;
        if let Some(line) = self.order.lines.iter_mut().find(|l| l.entry.id == entry_id) {
            line.quantity += 1;
            self.recompute();
        }
        Ok(())
    }

    /// Decrement the quantity of the line for `entry_id`; unknown id is a no-op
    ///
    /// Decrementing a quantity-1 line removes it: no zero-quantity lines
    /// are ever retained.
    pub fn decrement_line(&mut self, entry_id: u32) -> Result<(), OrderError> {
        self.check_unlocked()?;
        let Some(pos) = self.order.lines.iter().position(|l| l.entry.id == entry_id) else {
            return Ok(());
        };
        if self.order.lines[pos].quantity > 1 {
            self.order.lines[pos].quantity -= 1;
        } else {
            self.order.lines.remove(pos);
        }
        self.recompute();
        Ok(())
    }

    /// Remove the line for `entry_id` unconditionally; unknown id is a no-op
    pub fn remove_line(&mut self, entry_id: u32) -> Result<(), OrderError> {
        self.check_unlocked()?;
        let before = self.order.lines.len();
        self.order.lines.retain(|l| l.entry.id != entry_id);
        if self.order.lines.len() != before {
            self.recompute();
        }
        Ok(())
    }

    /// Set the table identifier; validation is deferred to checkout
    pub fn set_table(&mut self, table: impl Into<String>) -> Result<(), OrderError> {
        self.check_unlocked()?;
        self.order.table = table.into();
        Ok(())
    }

    /// Set the service type; validation is deferred to checkout
    pub fn set_service_type(&mut self, service_type: ServiceType) -> Result<(), OrderError> {
        self.check_unlocked()?;
        self.order.service_type = service_type;
        Ok(())
    }

    /// Discard the current order and start a fresh empty one
    ///
    /// Caller confirmation is an external concern.
    pub fn clear(&mut self) -> Result<(), OrderError> {
        self.check_unlocked()?;
        self.reset();
        Ok(())
    }

    /// Replace the order with a fresh empty instance
    pub(crate) fn reset(&mut self) {
        self.order = Order::new();
    }

    pub(crate) fn mark_status(&mut self, status: OrderStatus) {
        self.order.status = status;
    }

    pub(crate) fn lock(&mut self) {
        self.order.locked = true;
    }

    pub(crate) fn unlock(&mut self) {
        self.order.locked = false;
    }

    fn check_unlocked(&self) -> Result<(), OrderError> {
        if self.order.locked {
            return Err(OrderError::OrderLocked);
        }
        Ok(())
    }

    /// Recompute `subtotal`/`tax`/`total` from the lines
    fn recompute(&mut self) {
        let totals = totals::compute(&self.order.lines, self.tax_rate);
        self.order.subtotal = totals.subtotal;
        self.order.tax = totals.tax;
        self.order.total = totals.total;
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

    fn tax_16() -> Decimal {
        Decimal::new(16, 2)
    }

    fn assert_invariants(cart: &Cart) {
        let order = cart.order();
        let expected = totals::compute(&order.lines, cart.tax_rate());
        assert_eq!(order.subtotal, expected.subtotal);
        assert_eq!(order.tax, expected.tax);
        assert_eq!(order.total, expected.total);
        assert!(order.lines.iter().all(|l| l.quantity > 0));

        let mut ids: Vec<u32> = order.lines.iter().map(|l| l.entry.id).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate entry ids in order lines");
    }

    #[test]
    fn adding_same_entry_twice_merges_into_one_line() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        cart.add_item(entry(1, 800)).unwrap();

        assert_eq!(cart.order().lines.len(), 1);
        assert_eq!(cart.order().lines[0].quantity, 2);
        assert_invariants(&cart);
    }

    #[test]
    fn totals_stay_consistent_across_mutations() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        assert_invariants(&cart);
        cart.add_item(entry(4, 150)).unwrap();
        assert_invariants(&cart);
        cart.increment_line(4).unwrap();
        assert_invariants(&cart);

        assert_eq!(cart.order().subtotal, Decimal::from(1100));
        assert_eq!(cart.order().tax, Decimal::from(176));
        assert_eq!(cart.order().total, Decimal::from(1276));

        cart.decrement_line(1).unwrap();
        assert_invariants(&cart);
        cart.remove_line(4).unwrap();
        assert_invariants(&cart);
        assert!(cart.order().is_empty());
        assert_eq!(cart.order().total, Decimal::ZERO);
    }

    #[test]
    fn decrementing_quantity_one_line_removes_it() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        cart.decrement_line(1).unwrap();

        assert!(cart.order().is_empty());
        assert_invariants(&cart);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        let before = cart.order().clone();

        cart.increment_line(99).unwrap();
        cart.decrement_line(99).unwrap();
        cart.remove_line(99).unwrap();

        assert_eq!(cart.order(), &before);
    }

    #[test]
    fn clear_restores_pristine_order() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        cart.set_table("T3").unwrap();
        cart.set_service_type(ServiceType::TakeAway).unwrap();

        cart.clear().unwrap();
        assert_eq!(cart.order(), &Order::new());
    }

    #[test]
    fn mutators_reject_while_locked() {
        let mut cart = Cart::new(tax_16());
        cart.add_item(entry(1, 800)).unwrap();
        cart.lock();

        assert_eq!(cart.add_item(entry(2, 100)), Err(OrderError::OrderLocked));
        assert_eq!(cart.increment_line(1), Err(OrderError::OrderLocked));
        assert_eq!(cart.decrement_line(1), Err(OrderError::OrderLocked));
        assert_eq!(cart.remove_line(1), Err(OrderError::OrderLocked));
        assert_eq!(cart.set_table("T1"), Err(OrderError::OrderLocked));
        assert_eq!(
            cart.set_service_type(ServiceType::TakeAway),
            Err(OrderError::OrderLocked)
        );
        assert_eq!(cart.clear(), Err(OrderError::OrderLocked));

        cart.unlock();
        cart.add_item(entry(2, 100)).unwrap();
        assert_eq!(cart.order().lines.len(), 2);
    }
}
