//! Plain-text receipt renderer
//!
//! Renders a completed-order record into fixed-width text suitable for a
//! 58mm thermal printer (32 characters) or the console.

use shared::order::CompletedOrderRecord;

use crate::config::AppSettings;

/// 58mm paper width in characters
const RECEIPT_WIDTH: usize = 32;

/// Receipt print seam
///
/// Printing is fire-and-forget: implementations report failures themselves
/// and never block order completion.
pub trait ReceiptPrinter: Send + Sync {
    fn print(&self, receipt: &str);
}

/// Printer writing receipts to stdout
pub struct ConsolePrinter;

impl ReceiptPrinter for ConsolePrinter {
    fn print(&self, receipt: &str) {
        tracing::info!("Printing receipt");
        println!("{receipt}");
    }
}

/// Fixed-width text renderer for completed-order records
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    width: usize,
    header: String,
    footer: String,
}

impl ReceiptRenderer {
    pub fn new(width: usize, header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            width,
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Renderer using the configured receipt header/footer text
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            RECEIPT_WIDTH,
            settings.receipt_header.clone(),
            settings.receipt_footer.clone(),
        )
    }

    /// Render the receipt as fixed-width text
    pub fn render(&self, record: &CompletedOrderRecord) -> String {
        let mut out = String::new();

        self.sep_double(&mut out);
        for line in self.header.lines() {
            out.push_str(&self.center(line));
            out.push('\n');
        }
        self.sep_double(&mut out);

        out.push_str(&format!("Order #{}\n", record.order_number));
        out.push_str(&format!("Date: {}\n", format_timestamp(record.completed_at)));
        let table = if record.table.is_empty() {
            "N/A"
        } else {
            &record.table
        };
        out.push_str(&format!("Table: {}\n", table));
        out.push_str(&format!("Type: {}\n", record.service_type.label()));
        self.sep(&mut out);

        for line in &record.lines {
            out.push_str(&self.row(
                &format!("{} x{}", line.entry.name, line.quantity),
                &format!("{:.2}", line.line_total()),
            ));
        }
        self.sep(&mut out);

        out.push_str(&self.row("Subtotal:", &format!("KSh {:.2}", record.subtotal)));
        out.push_str(&self.row("Tax:", &format!("KSh {:.2}", record.tax)));
        out.push_str(&self.row("Total:", &format!("KSh {:.2}", record.total)));
        self.sep(&mut out);

        out.push_str(&self.row(
            &format!("Paid ({}):", record.payment_method),
            &format!("KSh {:.2}", record.amount_paid),
        ));
        if let Some(change) = record.change {
            out.push_str(&self.row("Change:", &format!("KSh {:.2}", change)));
        }
        self.sep_double(&mut out);

        for line in self.footer.lines() {
            out.push_str(&self.center(line));
            out.push('\n');
        }
        self.sep_double(&mut out);

        out
    }

    fn sep(&self, out: &mut String) {
        out.push_str(&"-".repeat(self.width));
        out.push('\n');
    }

    fn sep_double(&self, out: &mut String) {
        out.push_str(&"=".repeat(self.width));
        out.push('\n');
    }

    // Widths are in characters, not bytes, so non-ASCII names line up
    fn center(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text.to_string();
        }
        let pad = (self.width - len) / 2;
        format!("{}{}", " ".repeat(pad), text)
    }

    /// Left label, right-aligned value; falls back to a single space gap
    /// when the pair does not fit on one row
    fn row(&self, left: &str, right: &str) -> String {
        let left_len = left.chars().count();
        let right_len = right.chars().count();
        if left_len + right_len + 1 > self.width {
            return format!("{} {}\n", left, right);
        }
        let pad = self.width - left_len - right_len;
        format!("{}{}{}\n", left, " ".repeat(pad), right)
    }
}

fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::order::{Order, OrderLine};
    use shared::MenuEntry;

    fn sample_record() -> CompletedOrderRecord {
        let mut order = Order::new();
        order.table = "T5".to_string();
        order.lines.push(OrderLine::new(MenuEntry {
            id: 1,
            name: "chicken burger".to_string(),
            price: Decimal::from(800),
            category: "food".to_string(),
            description: None,
        }));
        order.lines.push(OrderLine {
            entry: MenuEntry {
                id: 4,
                name: "Coca Cola".to_string(),
                price: Decimal::from(150),
                category: "drinks".to_string(),
                description: None,
            },
            quantity: 2,
        });
        order.subtotal = Decimal::from(1100);
        order.tax = Decimal::from(176);
        order.total = Decimal::from(1276);

        CompletedOrderRecord::from_order(
            &order,
            4217,
            "cash",
            Decimal::from(1300),
            Some(Decimal::from(24)),
        )
    }

    #[test]
    fn renders_order_details_and_totals() {
        let renderer = ReceiptRenderer::new(32, "Test Cafe", "Thank you!");
        let receipt = renderer.render(&sample_record());

        assert!(receipt.contains("Order #4217"));
        assert!(receipt.contains("Table: T5"));
        assert!(receipt.contains("Type: Dine In"));
        assert!(receipt.contains("chicken burger x1"));
        assert!(receipt.contains("Coca Cola x2"));
        assert!(receipt.contains("300.00"));
        assert!(receipt.contains("KSh 1100.00"));
        assert!(receipt.contains("KSh 176.00"));
        assert!(receipt.contains("KSh 1276.00"));
        assert!(receipt.contains("Paid (cash):"));
        assert!(receipt.contains("KSh 24.00"));
        assert!(receipt.contains("Thank you!"));
    }

    #[test]
    fn rows_are_padded_to_width() {
        let renderer = ReceiptRenderer::new(32, "", "");
        let receipt = renderer.render(&sample_record());

        let subtotal_row = receipt
            .lines()
            .find(|l| l.starts_with("Subtotal:"))
            .unwrap();
        assert_eq!(subtotal_row.len(), 32);
        assert!(subtotal_row.ends_with("KSh 1100.00"));
    }

    #[test]
    fn non_ascii_text_aligns_by_character_count() {
        let renderer = ReceiptRenderer::new(32, "Café Crème", "");
        let mut record = sample_record();
        record.lines[0].entry.name = "Crème Brûlée".to_string();

        let receipt = renderer.render(&record);

        // "Café Crème" is 10 chars, centered with (32 - 10) / 2 spaces
        let header_line = receipt.lines().find(|l| l.contains("Café")).unwrap();
        assert!(header_line.starts_with("           Café Crème"));
        assert_eq!(header_line.chars().count(), 11 + 10);

        // Item row pads to 32 characters, not 32 bytes
        let item_row = receipt.lines().find(|l| l.contains("Brûlée")).unwrap();
        assert_eq!(item_row.chars().count(), 32);
        assert!(item_row.ends_with("800.00"));
    }

    #[test]
    fn empty_table_prints_not_applicable() {
        let mut record = sample_record();
        record.table = String::new();
        record.change = None;

        let renderer = ReceiptRenderer::new(32, "", "");
        let receipt = renderer.render(&record);
        assert!(receipt.contains("Table: N/A"));
        assert!(!receipt.contains("Change:"));
    }
}
