//! # Storefront Configuration
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KULTURA_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Example Configuration File
//! ```toml
//! store_name = "Bango Kultura"
//! currency_symbol = "$"
//! catalog_path = "/srv/kultura/catalog.json"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use kultura_core::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storefront configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Shown in the navigation bar.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,

    /// Toasts kept on screen at once.
    pub toast_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Bango Kultura".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
            toast_capacity: 3,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Load from the given path, or the platform config dir, if it exists
    /// 3. Override with environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the values a broken config would otherwise render badly.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "store_name",
                reason: "must not be empty".to_string(),
            });
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid {
                field: "currency_symbol",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolves the config file location.
    ///
    /// An explicit `--config` wins over `KULTURA_CONFIG`; `None` means the
    /// platform default is used.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os("KULTURA_CONFIG").map(PathBuf::from))
    }

    /// Formats an amount in cents as a currency string.
    ///
    /// Amounts are always shown with two decimals; only the symbol is
    /// configurable.
    ///
    /// ## Example
    /// ```rust
    /// use kultura_core::Money;
    /// use kultura_storefront::state::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().unsigned_abs(),
            amount.cents_part().unsigned_abs()
        )
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `KULTURA_*` overrides from any lookup.
    ///
    /// ## Variables
    /// - `KULTURA_STORE_NAME`
    /// - `KULTURA_CURRENCY_SYMBOL`
    /// - `KULTURA_CATALOG_PATH`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("KULTURA_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(symbol) = lookup("KULTURA_CURRENCY_SYMBOL") {
            debug!(currency_symbol = %symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("KULTURA_CATALOG_PATH") {
            debug!(catalog_path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kultura", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store_name, "Bango Kultura");
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_other_symbols() {
        let config = StorefrontConfig {
            currency_symbol: "₱".to_string(),
            ..Default::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1500)), "₱15.00");
        assert_eq!(config.format_currency(Money::from_cents(-5)), "-₱0.05");
    }

    #[test]
    fn test_stale_decimals_key_does_not_rescale_prices() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            currency_symbol = "$"
            currency_decimals = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.format_currency(Money::from_cents(1500)), "$15.00");
        assert_eq!(
            config.format_currency(Money::from_cents(1500)),
            Money::from_cents(1500).to_string()
        );
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            store_name = "Kultura Makati"
            catalog_path = "/tmp/catalog.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Kultura Makati");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| match key {
            "KULTURA_STORE_NAME" => Some("Pop-up".to_string()),
            "KULTURA_CATALOG_PATH" => Some("catalog.json".to_string()),
            _ => None,
        });

        assert_eq!(config.store_name, "Pop-up");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let blank_name = StorefrontConfig {
            store_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            blank_name.validate(),
            Err(ConfigError::Invalid { field: "store_name", .. })
        ));

        let no_symbol = StorefrontConfig {
            currency_symbol: String::new(),
            ..Default::default()
        };
        assert!(no_symbol.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = StorefrontConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
