//! # Configuration State
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Backend settings (base URL, timeout) live in `storefront_api::ClientConfig`.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use storefront_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Where the symbol goes relative to the amount
    pub symbol_position: SymbolPosition,

    /// Backend base URL, for display in diagnostics
    pub api_base_url: String,
}

/// Placement of the currency symbol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$12.34`
    Before,

    /// `12.34 ₽`
    #[default]
    After,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Storefront"
    /// - Currency: RUB (₽ after the amount, two decimals)
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            currency_code: "RUB".to_string(),
            currency_symbol: "₽".to_string(),
            symbol_position: SymbolPosition::After,
            api_base_url: storefront_api::config::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        config
    }

    /// Records the backend the app actually talks to.
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// Amounts are always kopecks, so there are always two decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(102000), "1020.00 ₽");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let money = Money::from_cents(cents);
        let amount = format!("{}.{:02}", money.major().abs(), money.minor_part());
        let sign = if cents < 0 { "-" } else { "" };

        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}{}", sign, self.currency_symbol, amount),
            SymbolPosition::After => format!("{}{} {}", sign, amount, self.currency_symbol),
        }
    }

    pub fn format_money(&self, money: Money) -> String {
        self.format_currency(money.cents())
    }
}
