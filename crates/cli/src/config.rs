//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BISTRO_LOCALE` - Output language, `ru` or `en` (default: ru)
//! - `BISTRO_STOCK_THRESHOLD` - Stock level the inventory report treats as
//!   sufficient (default: 30)
//! - `BISTRO_CURRENCY` - Currency symbol printed before amounts (default: $)
//! - `RUST_LOG` - Diagnostic log filter (default: warn)

use bistro_core::Locale;
use bistro_core::report::DEFAULT_STOCK_THRESHOLD;
use thiserror::Error;

const DEFAULT_CURRENCY: &str = "$";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BistroConfig {
    /// Language of the printed transcript
    pub locale: Locale,
    /// Inventory report threshold
    pub stock_threshold: u32,
    /// Currency symbol
    pub currency: String,
}

impl Default for BistroConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            stock_threshold: DEFAULT_STOCK_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

impl BistroConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let locale = get("BISTRO_LOCALE")
            .map(|v| v.trim().parse::<Locale>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("BISTRO_LOCALE".to_string(), e))?
            .unwrap_or_default();
        let stock_threshold = get("BISTRO_STOCK_THRESHOLD")
            .map(|v| v.trim().parse::<u32>())
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BISTRO_STOCK_THRESHOLD".to_string(), e.to_string())
            })?
            .unwrap_or(DEFAULT_STOCK_THRESHOLD);
        let currency = get("BISTRO_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());

        Ok(Self {
            locale,
            stock_threshold,
            currency,
        })
    }
}
