//! Menu catalog provider
//!
//! Entries come from an optional JSON file in the data directory; malformed
//! or missing data falls back to the built-in sample menu so the terminal
//! always starts with a usable catalog.

use rust_decimal::Decimal;
use shared::MenuEntry;
use std::path::Path;

/// Ordered, read-only collection of menu entries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// Load the catalog from a JSON file, falling back to the sample menu
    ///
    /// Never fails: a parse error or unreadable file is logged once and the
    /// built-in menu is used instead.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<MenuEntry>>(&bytes) {
                Ok(entries) if !entries.is_empty() => {
                    tracing::info!("Loaded {} menu entries from {}", entries.len(), path.display());
                    Self { entries }
                }
                Ok(_) => {
                    tracing::warn!("Catalog file {} is empty, using sample menu", path.display());
                    Self::sample()
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse catalog file {}: {}, using sample menu",
                        path.display(),
                        e
                    );
                    Self::sample()
                }
            },
            Err(_) => {
                tracing::info!("No catalog file at {}, using sample menu", path.display());
                Self::sample()
            }
        }
    }

    /// The built-in sample menu
    pub fn sample() -> Self {
        fn entry(id: u32, name: &str, price: i64, category: &str, description: &str) -> MenuEntry {
            MenuEntry {
                id,
                name: name.to_string(),
                price: Decimal::from(price),
                category: category.to_string(),
                description: Some(description.to_string()),
            }
        }

        Self {
            entries: vec![
                entry(1, "chicken burger", 800, "food", "Juicy chicken burger with fresh veggies"),
                entry(2, "Margherita Pizza", 1000, "food", "Classic pizza with tomato and mozzarella"),
                entry(3, "French Fries", 300, "food", "Crispy golden fries"),
                entry(4, "Coca Cola", 150, "drinks", "Cold refreshing cola"),
                entry(5, "Iced Tea", 200, "drinks", "Freshly brewed iced tea"),
                entry(6, "Chocolate Cake", 450, "desserts", "Rich chocolate cake"),
                entry(7, "Ice Cream", 350, "desserts", "Vanilla ice cream"),
                entry(8, "Grilled Chicken", 1200, "food", "Grilled chicken with spices"),
                entry(9, "Caesar Salad", 700, "food", "Fresh Caesar salad with dressing"),
                entry(10, "Fresh Orange Juice", 300, "drinks", "Freshly squeezed orange juice"),
                entry(11, "Mineral Water", 100, "drinks", "Bottled mineral water"),
                entry(12, "Tiramisu", 500, "desserts", "Classic Italian dessert"),
            ],
        }
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Find an entry by ID
    pub fn find(&self, id: u32) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
