//! Receipt rendering and printing

pub mod receipt;

pub use receipt::{ConsolePrinter, ReceiptPrinter, ReceiptRenderer};
