//! # Money Module
//!
//! Display-time conversion of calculated amounts into formatted strings.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_discount()  →  72.00000000000001   (plain f64, NO rounding)    │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  Money::from_major() →  7200 cents          (round half away from zero) │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  format_with_prefix  →  "$72.00"            (grouping + 2 decimals)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine keeps amounts as `f64` end to end. `Money` exists only at
//! the display boundary, so formatting never feeds back into arithmetic.
//!
//! ## Usage
//! ```rust
//! use slash_core::money::{format_currency, Money};
//!
//! assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
//!
//! let price = Money::from_cents(1099);
//! assert_eq!(price.to_string(), "$10.99");
//! ```

use std::fmt;
use std::ops::Sub;

use crate::currency::Currency;
use crate::error::{CoreError, CoreResult};

/// Largest magnitude (in cents) accepted from a float.
///
/// Stays below `i64::MAX` so the `f64 → i64` cast never saturates.
const MAX_CENTS: f64 = 9.0e18;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values only appear for negative savings
///   (a negative percentage slipped past validation)
/// - **Always two minor digits**: Every catalog currency is displayed with
///   exactly two decimals, including JPY and KRW
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit float into cents, rounding half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(72.00000000000001).unwrap().cents(), 7200);
    /// assert_eq!(Money::from_major(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_major(f64::NAN).is_err());
    /// ```
    pub fn from_major(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(CoreError::NonFiniteAmount);
        }

        let cents = (amount * 100.0).round();
        if cents.abs() >= MAX_CENTS {
            return Err(CoreError::AmountOutOfRange(amount));
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (absolute value).
    #[inline]
    pub const fn major_part(&self) -> u64 {
        self.0.unsigned_abs() / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> u64 {
        self.0.unsigned_abs() % 100
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Renders `[-]<prefix><grouped major>.<minor>`.
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(123456789).format_with_prefix("€"), "€1,234,567.89");
    /// assert_eq!(Money::from_cents(-500).format_with_prefix("$"), "-$5.00");
    /// ```
    pub fn format_with_prefix(&self, prefix: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            prefix,
            group_thousands(self.major_part()),
            self.minor_part()
        )
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style rendering in the default currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_prefix(Currency::default().format_prefix()))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Formatting Entry Point
// =============================================================================

/// Formats `amount` in the currency named by `currency_code`.
///
/// ## Rules
/// - Exactly two decimal places, `,` thousands separators (en-US)
/// - The currency's conventional en-US prefix (`$`, `€`, `CA$`, `CHF `...)
/// - The numeric value itself is never altered, only rendered
///
/// ## Errors
/// - [`CoreError::UnknownCurrency`] for codes outside the catalog
/// - [`CoreError::NonFiniteAmount`] for NaN / infinity
///
/// ## Example
/// ```rust
/// use slash_core::money::format_currency;
///
/// assert_eq!(format_currency(80.0, "USD").unwrap(), "$80.00");
/// assert_eq!(format_currency(1234.5, "gbp").unwrap(), "£1,234.50");
/// assert!(format_currency(1.0, "XYZ").is_err());
/// ```
pub fn format_currency(amount: f64, currency_code: &str) -> CoreResult<String> {
    Currency::from_code(currency_code)?.format(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
