//! Menu catalog types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the menu catalog
///
/// Entries are loaded once at startup and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    /// Unique entry ID
    pub id: u32,
    pub name: String,
    /// Unit price (non-negative)
    pub price: Decimal,
    /// Category key (e.g. "food", "drinks", "desserts")
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
