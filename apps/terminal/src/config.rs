//! # Front End Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SLASH_CURRENCY=EUR                                                 │
//! │     SLASH_CALCULATING_DELAY_MS=0                                       │
//! │     SLASH_PERCENT_MAX_DECIMALS=2                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/slash/slash.toml (Linux)                                 │
//! │     ~/Library/Application Support/app.slash.slash/slash.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, 2 decimals, 500 ms                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! currency = "EUR"
//!
//! [keypad]
//! percent_max_decimals = 2
//!
//! [ui]
//! calculating_delay_ms = 500
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use slash_core::{Currency, DEFAULT_PERCENT_DECIMALS};

use crate::error::{AppError, AppResult};

/// Longest "Calculating..." pause we accept.
const MAX_DELAY_MS: u64 = 10_000;

/// Most fraction digits a percentage field may accept.
const MAX_PERCENT_DECIMALS: usize = 6;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// ISO code of the currency selected at startup.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypadSettings {
    #[serde(default = "default_percent_max_decimals")]
    pub percent_max_decimals: usize,
}

fn default_percent_max_decimals() -> usize {
    DEFAULT_PERCENT_DECIMALS
}

impl Default for KeypadSettings {
    fn default() -> Self {
        KeypadSettings {
            percent_max_decimals: default_percent_max_decimals(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// How long "Calculating..." stays up before the result is applied.
    #[serde(default = "default_calculating_delay_ms")]
    pub calculating_delay_ms: u64,
}

fn default_calculating_delay_ms() -> u64 {
    500
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            calculating_delay_ms: default_calculating_delay_ms(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete front end configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub keypad: KeypadSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (slash.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document; missing sections take their defaults.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    ///
    /// An unknown currency is NOT an error here: [`AppConfig::currency`]
    /// falls back to the default instead.
    pub fn validate(&self) -> AppResult<()> {
        if self.keypad.percent_max_decimals > MAX_PERCENT_DECIMALS {
            return Err(AppError::InvalidConfig(format!(
                "percent_max_decimals must be at most {}, got {}",
                MAX_PERCENT_DECIMALS, self.keypad.percent_max_decimals
            )));
        }

        if self.ui.calculating_delay_ms > MAX_DELAY_MS {
            return Err(AppError::InvalidConfig(format!(
                "calculating_delay_ms must be at most {}, got {}",
                MAX_DELAY_MS, self.ui.calculating_delay_ms
            )));
        }

        Ok(())
    }

    /// Applies `SLASH_*` overrides from `lookup` (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("SLASH_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.display.currency = code;
        }

        if let Some(delay) = lookup("SLASH_CALCULATING_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.ui.calculating_delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring invalid SLASH_CALCULATING_DELAY_MS"),
            }
        }

        if let Some(decimals) = lookup("SLASH_PERCENT_MAX_DECIMALS") {
            match decimals.parse::<usize>() {
                Ok(n) => self.keypad.percent_max_decimals = n,
                Err(_) => warn!(value = %decimals, "Ignoring invalid SLASH_PERCENT_MAX_DECIMALS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "slash", "slash")
            .map(|dirs| dirs.config_dir().join("slash.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The startup currency, falling back to the catalog's first entry.
    pub fn currency(&self) -> Currency {
        match Currency::from_code(&self.display.currency) {
            Ok(currency) => currency,
            Err(e) => {
                let fallback = Currency::default();
                warn!(error = %e, fallback = %fallback, "Unknown currency in config");
                fallback
            }
        }
    }

    pub fn calculating_delay(&self) -> Duration {
        Duration::from_millis(self.ui.calculating_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.currency(), Currency::Usd);
        assert_eq!(config.keypad.percent_max_decimals, 2);
        assert_eq!(config.calculating_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("[display]\ncurrency = \"eur\"\n").unwrap();
        assert_eq!(config.currency(), Currency::Eur);
        assert_eq!(config.ui.calculating_delay_ms, 500);
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        let config = AppConfig::from_toml_str("[display]\ncurrency = \"XYZ\"\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency(), Currency::Usd);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("[ui]\ncalculating_delay_ms = \"soon\"\n"),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.ui.calculating_delay_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.keypad.percent_max_decimals = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SLASH_CURRENCY", "GBP"),
            ("SLASH_CALCULATING_DELAY_MS", "0"),
            ("SLASH_PERCENT_MAX_DECIMALS", "not-a-number"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.currency(), Currency::Gbp);
        assert_eq!(config.ui.calculating_delay_ms, 0);
        assert_eq!(config.keypad.percent_max_decimals, 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[display]"));
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }
}
