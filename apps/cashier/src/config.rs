//! # Cashier Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use till_core::Money;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashierConfig {
    /// Store name shown in the banner.
    pub store_name: String,

    /// Directory receipts are written to. Created on first checkout.
    pub receipts_dir: PathBuf,

    /// File format of exported receipts.
    pub receipt_format: ReceiptFormat,

    /// Prefix for on-screen money (empty by default).
    pub currency_symbol: String,
}

/// Receipt file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// Comma-separated rows, one per item plus a summary block.
    #[default]
    Csv,

    /// The same receipt as a JSON document.
    Json,
}

impl ReceiptFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ReceiptFormat::Csv => "csv",
            ReceiptFormat::Json => "json",
        }
    }
}

impl Default for CashierConfig {
    /// ## Default Values
    /// - Store: "Till"
    /// - Receipts: `./receipts`, CSV
    /// - Currency symbol: none
    fn default() -> Self {
        CashierConfig {
            store_name: "Till".to_string(),
            receipts_dir: PathBuf::from("receipts"),
            receipt_format: ReceiptFormat::Csv,
            currency_symbol: String::new(),
        }
    }
}

impl CashierConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILL_STORE_NAME`: Override store name
    /// - `TILL_RECEIPTS_DIR`: Override receipts directory
    /// - `TILL_RECEIPT_FORMAT`: `csv` or `json`
    /// - `TILL_CURRENCY_SYMBOL`: Prefix for on-screen money
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CashierConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CashierConfig::default();

        if let Some(store_name) = lookup("TILL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(dir) = lookup("TILL_RECEIPTS_DIR") {
            config.receipts_dir = PathBuf::from(dir);
        }

        if let Some(format) = lookup("TILL_RECEIPT_FORMAT") {
            config.receipt_format = match format.trim().to_ascii_lowercase().as_str() {
                "csv" => ReceiptFormat::Csv,
                "json" => ReceiptFormat::Json,
                _ => {
                    return Err(AppError::Config {
                        key: "TILL_RECEIPT_FORMAT",
                        value: format,
                        reason: "expected csv or json".to_string(),
                    })
                }
            };
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    /// Formats money for the screen: symbol, thousands separators, two
    /// decimals.
    ///
    /// ## Example
    /// ```rust
    /// use till_cashier::config::CashierConfig;
    /// use till_core::Money;
    ///
    /// let config = CashierConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(123_450)), "1,234.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let grouped = amount.format_grouped();
        match grouped.strip_prefix('-') {
            Some(digits) => format!("-{}{}", self.currency_symbol, digits),
            None => format!("{}{}", self.currency_symbol, grouped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CashierConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CashierConfig::default());
        assert_eq!(config.receipts_dir, PathBuf::from("receipts"));
        assert_eq!(config.receipt_format, ReceiptFormat::Csv);
    }

    #[test]
    fn test_env_overrides() {
        let config = CashierConfig::from_lookup(lookup_from(&[
            ("TILL_STORE_NAME", "Corner Shop"),
            ("TILL_RECEIPTS_DIR", "/tmp/out"),
            ("TILL_RECEIPT_FORMAT", "JSON"),
            ("TILL_CURRENCY_SYMBOL", "$"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.receipts_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err =
            CashierConfig::from_lookup(lookup_from(&[("TILL_RECEIPT_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, AppError::Config { key: "TILL_RECEIPT_FORMAT", .. }));
    }

    #[test]
    fn test_format_currency() {
        let mut config = CashierConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(0)), "0.00");
        assert_eq!(config.format_currency(Money::from_cents(123_456_789)), "1,234,567.89");

        config.currency_symbol = "$".to_string();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(
            config.format_currency(Money::from_cents(i64::MIN)),
            "-$92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn test_receipt_extension() {
        assert_eq!(ReceiptFormat::Csv.extension(), "csv");
        assert_eq!(ReceiptFormat::Json.extension(), "json");
    }
}
