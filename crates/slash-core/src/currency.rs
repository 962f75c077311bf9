//! # Currency Catalog
//!
//! The fixed set of currencies a user can pick from.
//!
//! ## What Currency Selection Does (and Doesn't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Picking "EUR" changes:            Picking "EUR" does NOT change:       │
//! │  ───────────────────────           ──────────────────────────────       │
//! │  • The symbol next to the input    • The amount                         │
//! │  • How the result is formatted     • The discount math                  │
//! │                                    • Anything about exchange rates      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup by code is explicit: an unknown code is a
//! [`CoreError::UnknownCurrency`], never a silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// A currency from the catalog.
///
/// Serialized as its ISO code (`"USD"`, `"EUR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Chf,
    Cny,
    Inr,
    Krw,
    Sgd,
    Hkd,
    Nok,
    Sek,
    Dkk,
    Pln,
    Czk,
    Huf,
    Rub,
    Brl,
}

/// Every selectable currency, in picker order.
///
/// The first entry is the fallback when a code cannot be resolved.
pub const CATALOG: [Currency; 20] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Jpy,
    Currency::Cad,
    Currency::Aud,
    Currency::Chf,
    Currency::Cny,
    Currency::Inr,
    Currency::Krw,
    Currency::Sgd,
    Currency::Hkd,
    Currency::Nok,
    Currency::Sek,
    Currency::Dkk,
    Currency::Pln,
    Currency::Czk,
    Currency::Huf,
    Currency::Rub,
    Currency::Brl,
];

impl Currency {
    /// ISO 4217 code.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Krw => "KRW",
            Currency::Sgd => "SGD",
            Currency::Hkd => "HKD",
            Currency::Nok => "NOK",
            Currency::Sek => "SEK",
            Currency::Dkk => "DKK",
            Currency::Pln => "PLN",
            Currency::Czk => "CZK",
            Currency::Huf => "HUF",
            Currency::Rub => "RUB",
            Currency::Brl => "BRL",
        }
    }

    /// Symbol shown next to input fields and in the picker.
    ///
    /// Purely cosmetic. Several currencies share a symbol (`¥`, `kr`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Chf => "Fr",
            Currency::Cny => "¥",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            Currency::Sgd => "S$",
            Currency::Hkd => "HK$",
            Currency::Nok => "kr",
            Currency::Sek => "kr",
            Currency::Dkk => "kr",
            Currency::Pln => "zł",
            Currency::Czk => "Kč",
            Currency::Huf => "Ft",
            Currency::Rub => "₽",
            Currency::Brl => "R$",
        }
    }

    /// Human-readable name for the picker.
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Inr => "Indian Rupee",
            Currency::Krw => "South Korean Won",
            Currency::Sgd => "Singapore Dollar",
            Currency::Hkd => "Hong Kong Dollar",
            Currency::Nok => "Norwegian Krone",
            Currency::Sek => "Swedish Krona",
            Currency::Dkk => "Danish Krone",
            Currency::Pln => "Polish Zloty",
            Currency::Czk => "Czech Koruna",
            Currency::Huf => "Hungarian Forint",
            Currency::Rub => "Russian Ruble",
            Currency::Brl => "Brazilian Real",
        }
    }

    /// Prefix used by the en-US formatter.
    ///
    /// This is NOT always [`Currency::symbol`]: en-US disambiguates
    /// `CA$`/`CN¥` and writes the bare code (plus a no-break space) for
    /// currencies it has no narrow symbol for.
    pub const fn format_prefix(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "CA$",
            Currency::Aud => "A$",
            Currency::Chf => "CHF\u{a0}",
            Currency::Cny => "CN¥",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            Currency::Sgd => "SGD\u{a0}",
            Currency::Hkd => "HK$",
            Currency::Nok => "NOK\u{a0}",
            Currency::Sek => "SEK\u{a0}",
            Currency::Dkk => "DKK\u{a0}",
            Currency::Pln => "PLN\u{a0}",
            Currency::Czk => "CZK\u{a0}",
            Currency::Huf => "HUF\u{a0}",
            Currency::Rub => "RUB\u{a0}",
            Currency::Brl => "R$",
        }
    }

    /// Resolves a code from the catalog (case-insensitive, trimmed).
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::currency::Currency;
    ///
    /// assert_eq!(Currency::from_code("eur").unwrap(), Currency::Eur);
    /// assert!(Currency::from_code("XYZ").is_err());
    /// ```
    pub fn from_code(code: &str) -> CoreResult<Self> {
        let wanted = code.trim();
        CATALOG
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCurrency(wanted.to_string()))
    }

    /// Formats an amount in this currency with exactly two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::currency::Currency;
    ///
    /// assert_eq!(Currency::Usd.format(1234.5).unwrap(), "$1,234.50");
    /// assert_eq!(Currency::Eur.format(72.0).unwrap(), "€72.00");
    /// ```
    pub fn format(self, amount: f64) -> CoreResult<String> {
        let money = Money::from_major(amount)?;
        Ok(money.format_with_prefix(self.format_prefix()))
    }

    /// Case-insensitive match against code or name, as the picker's search box does.
    pub fn matches_query(self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name().to_lowercase().contains(&query) || self.code().to_lowercase().contains(&query)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
    }
}

/// Filters the catalog by a search query (empty query returns everything).
pub fn search(query: &str) -> Vec<Currency> {
    CATALOG
        .iter()
        .copied()
        .filter(|c| c.matches_query(query))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_are_unique() {
        let codes: HashSet<_> = CATALOG.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), CATALOG.len());
        assert_eq!(CATALOG[0], Currency::default());
    }

    #[test]
    fn test_every_catalog_entry_round_trips_through_its_code() {
        for currency in CATALOG {
            assert_eq!(Currency::from_code(currency.code()).unwrap(), currency);
            assert_eq!(currency.to_string(), currency.code());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::Gbp);
        assert_eq!(Currency::from_code("  Jpy ").unwrap(), Currency::Jpy);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            Currency::from_code("XYZ"),
            Err(CoreError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_search() {
        assert_eq!(search("dollar").len(), 5);
        assert_eq!(search("krw"), vec![Currency::Krw]);
        assert_eq!(search("").len(), CATALOG.len());
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Currency::Chf).unwrap();
        assert_eq!(json, "\"CHF\"");
        let parsed: Currency = serde_json::from_str("\"BRL\"").unwrap();
        assert_eq!(parsed, Currency::Brl);
    }
}
