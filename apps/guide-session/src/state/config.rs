//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHIPGUIDE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company issuing the guides (shown on the guide summary).
    pub company_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Decimal places when showing weights
    pub weight_decimals: u8,

    /// Seed for the guide number generator.
    /// `None` draws from OS entropy; set it to replay a session exactly.
    pub rng_seed: Option<u64>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            company_name: "Demo Shipping Co.".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            weight_decimals: 2,
            rng_seed: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl ConfigState {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `SHIPGUIDE_COMPANY_NAME`: Override company name
    /// - `SHIPGUIDE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHIPGUIDE_WEIGHT_DECIMALS`: Decimals for weights (0-6)
    /// - `SHIPGUIDE_RNG_SEED`: Fixed seed for guide numbers
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("SHIPGUIDE_COMPANY_NAME") {
            config.company_name = name;
        }

        if let Some(symbol) = lookup("SHIPGUIDE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SHIPGUIDE_WEIGHT_DECIMALS") {
            config.weight_decimals = raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 6)
                .ok_or_else(|| ConfigError::InvalidValue("SHIPGUIDE_WEIGHT_DECIMALS".to_string()))?;
        }

        if let Some(raw) = lookup("SHIPGUIDE_RNG_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("SHIPGUIDE_RNG_SEED".to_string()))?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use guide_session_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    /// Formats kilograms for display, e.g. `"4.00 kg"`.
    pub fn format_weight(&self, kg: f64) -> String {
        format!("{:.prec$} kg", kg, prec = self.weight_decimals as usize)
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
    fn test_defaults_when_nothing_set() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("SHIPGUIDE_COMPANY_NAME", "Envíos Rápidos"),
            ("SHIPGUIDE_CURRENCY_SYMBOL", "MX$"),
            ("SHIPGUIDE_WEIGHT_DECIMALS", "3"),
            ("SHIPGUIDE_RNG_SEED", " 99 "),
        ]))
        .unwrap();

        assert_eq!(config.company_name, "Envíos Rápidos");
        assert_eq!(config.currency_symbol, "MX$");
        assert_eq!(config.weight_decimals, 3);
        assert_eq!(config.rng_seed, Some(99));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("SHIPGUIDE_RNG_SEED", "abc")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHIPGUIDE_RNG_SEED");

        assert!(ConfigState::from_lookup(lookup_from(&[("SHIPGUIDE_WEIGHT_DECIMALS", "9")])).is_err());
        assert!(ConfigState::from_lookup(lookup_from(&[("SHIPGUIDE_WEIGHT_DECIMALS", "-1")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(250000), "$2500.00");
    }

    #[test]
    fn test_format_weight() {
        let mut config = ConfigState::default();
        assert_eq!(config.format_weight(4.0), "4.00 kg");
        assert_eq!(config.format_weight(1000.0 / 6000.0), "0.17 kg");

        config.weight_decimals = 0;
        assert_eq!(config.format_weight(5.6), "6 kg");
    }
}
