//! Totals calculation
//!
//! Pure Decimal arithmetic; values are rounded to two decimal places only
//! when formatted for display or receipts.

use rust_decimal::Decimal;
use shared::order::OrderLine;

/// Computed order totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute subtotal, tax and total for a set of lines
///
/// `tax_rate` is a fraction (0.16 = 16%). Deterministic, no side effects.
pub fn compute(lines: &[OrderLine], tax_rate: Decimal) -> Totals {
    let subtotal: Decimal = lines.iter().map(|l| l.line_total()).sum();
    let tax = subtotal * tax_rate;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
