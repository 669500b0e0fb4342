//! Terminal configuration
//!
//! Two layers:
//! - `Config`: process-level settings from environment variables
//!   (data directory, log level)
//! - `AppSettings`: the operator-editable record persisted under
//!   `"appSettings"` in the local store (business info, tax rate, theme,
//!   receipt text, user list)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::PosStorage;

/// Process configuration loaded from environment variables
///
/// | Environment variable | Default | Purpose |
/// |----------------------|---------|---------|
/// | POS_DATA_DIR | ./pos-data | Database, catalog and log files |
/// | POS_LOG_LEVEL | info | Log verbosity |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database, the optional menu catalog and logs
    pub data_dir: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("POS_DATA_DIR").unwrap_or_else(|_| "./pos-data".into()),
            log_level: std::env::var("POS_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

// ============================================================================
// App Settings
// ============================================================================

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// UI font size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Terminal user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Operator-editable settings, persisted as one flat record
///
/// Every field carries a serde default so a partial or older record still
/// loads; a record that fails to parse entirely falls back to
/// [`AppSettings::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    // General
    pub business_name: String,
    pub business_address: String,
    pub business_phone: String,
    pub business_email: String,
    /// Tax rate in percent (e.g. 16 = 16%)
    pub tax_rate: Decimal,

    // Appearance
    pub theme: Theme,
    pub font_size: FontSize,

    // Printer
    pub printer_name: String,
    pub receipt_header: String,
    pub receipt_footer: String,

    // Users
    pub users: Vec<UserAccount>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            business_name: "Ardyclassic Hotel".to_string(),
            business_address: "123 Hotel Street, Nairobi, Kenya".to_string(),
            business_phone: "+254 700 000000".to_string(),
            business_email: "info@ardyclassic.com".to_string(),
            tax_rate: Decimal::from(16),
            theme: Theme::default(),
            font_size: FontSize::default(),
            printer_name: "default".to_string(),
            receipt_header: "Ardyclassic Hotel\n123 Hotel Street, Nairobi\nPhone: +254 700 000000"
                .to_string(),
            receipt_footer: "Thank you for your visit!\nwww.ardyclassic.com".to_string(),
            users: vec![UserAccount {
                id: 1,
                name: "Admin".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
            }],
        }
    }
}

impl AppSettings {
    /// Tax rate as a fraction (16% -> 0.16)
    pub fn tax_rate_fraction(&self) -> Decimal {
        self.tax_rate / Decimal::ONE_HUNDRED
    }

    /// Load settings from storage, falling back to defaults
    ///
    /// A missing record seeds the store with defaults; a corrupt record or a
    /// read failure is logged once and defaults are used for the session.
    pub fn load_or_default(storage: &PosStorage) -> Self {
        match storage.load_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let defaults = Self::default();
                if let Err(e) = storage.save_settings(&defaults) {
                    tracing::warn!("Failed to seed default settings: {}", e);
                }
                defaults
            }
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
