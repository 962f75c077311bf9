//! # Input Module
//!
//! Turns what the user typed into numbers, and decides which keypad
//! presses are accepted in the first place.
//!
//! ## Degraded-Input Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "$1,234.50"  ──strip──►  "1234.50"  ──prefix──►  1234.5                │
//! │  "12.5.6"     ──strip──►  "12.5.6"   ──prefix──►  12.5                  │
//! │  "abc"        ──strip──►  ""         ──────────►  0                     │
//! │  "."          ──strip──►  "."        ──────────►  0                     │
//! │                                                                         │
//! │  Parsing NEVER fails. Garbage becomes 0.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::MAX_PERCENTAGE;

// =============================================================================
// Parsing
// =============================================================================

/// Parses free text into a non-negative number.
///
/// ## Rules
/// - Every character other than an ASCII digit or `.` is removed first
///   (so `-`, `,`, `$` and spaces all disappear)
/// - The longest leading `digits[.digits]` prefix is parsed; parsing stops
///   at a second decimal point
/// - Anything unparsable yields exactly `0`
///
/// ## Example
/// ```rust
/// use slash_core::input::parse_amount;
///
/// assert_eq!(parse_amount("100"), 100.0);
/// assert_eq!(parse_amount("12.5.6"), 12.5);
/// assert_eq!(parse_amount("-20"), 20.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let prefix = match cleaned.match_indices('.').nth(1) {
        Some((second_dot, _)) => &cleaned[..second_dot],
        None => cleaned.as_str(),
    };

    // "." and "" are the only prefixes left that f64 can't parse.
    prefix.parse::<f64>().unwrap_or(0.0)
}

// =============================================================================
// Keypad
// =============================================================================

/// A key on the numeric keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
#[ts(export)]
pub enum Key {
    /// A digit, 0 through 9.
    Digit(u8),
    Decimal,
    Backspace,
}

impl Key {
    /// Maps a typed character to a key (`<` is backspace).
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::input::Key;
    ///
    /// assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
    /// assert_eq!(Key::from_char('.'), Some(Key::Decimal));
    /// assert_eq!(Key::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '.' => Some(Key::Decimal),
            '<' | '\u{8}' => Some(Key::Backspace),
            _ => None,
        }
    }
}

/// Limits a field places on keypad input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypadRules {
    pub allow_decimal: bool,
    /// Presses that would push the value above this are ignored.
    pub max_value: Option<f64>,
    /// Maximum digits after the decimal point.
    pub max_decimals: Option<usize>,
}

impl KeypadRules {
    /// Amount field: decimals allowed, no upper bound.
    pub const fn amount() -> Self {
        KeypadRules {
            allow_decimal: true,
            max_value: None,
            max_decimals: None,
        }
    }

    /// Percentage field: capped at 100 with `max_decimals` fraction digits.
    pub const fn percentage(max_decimals: usize) -> Self {
        KeypadRules {
            allow_decimal: true,
            max_value: Some(MAX_PERCENTAGE),
            max_decimals: Some(max_decimals),
        }
    }

    fn exceeds_max(&self, candidate: &str) -> bool {
        match self.max_value {
            Some(max) => candidate.parse::<f64>().is_ok_and(|v| v > max),
            None => false,
        }
    }

    fn exceeds_decimals(&self, candidate: &str) -> bool {
        match (self.max_decimals, candidate.split_once('.')) {
            (Some(max), Some((_, fraction))) => fraction.len() > max,
            _ => false,
        }
    }
}

/// Applies one key press to a field's current text.
///
/// Rejected presses return the text unchanged.
///
/// ## User Workflow
/// ```text
/// Discount field: "10"
///      │
///      ├── press "0"   → "100"      (exactly 100 is fine)
///      ├── press "0"   → "100"      (1000 > 100, ignored)
///      ├── press "."   → "100."
///      ├── press "."   → "100."     (only one decimal point)
///      └── press "<"   → "100"
/// ```
///
/// ## Example
/// ```rust
/// use slash_core::input::{apply_key, Key, KeypadRules};
///
/// let rules = KeypadRules::percentage(2);
/// assert_eq!(apply_key("12.3", Key::Digit(4), &rules), "12.34");
/// assert_eq!(apply_key("12.34", Key::Digit(5), &rules), "12.34");
/// assert_eq!(apply_key("12.34", Key::Backspace, &rules), "12.3");
/// ```
pub fn apply_key(current: &str, key: Key, rules: &KeypadRules) -> String {
    match key {
        Key::Backspace => {
            let mut text = current.to_string();
            text.pop();
            text
        }
        Key::Decimal => {
            if !rules.allow_decimal || current.contains('.') {
                return current.to_string();
            }
            let candidate = format!("{current}.");
            if rules.exceeds_max(&candidate) {
                return current.to_string();
            }
            candidate
        }
        Key::Digit(d) if d <= 9 => {
            let candidate = format!("{current}{d}");
            if rules.exceeds_max(&candidate) || rules.exceeds_decimals(&candidate) {
                return current.to_string();
            }
            candidate
        }
        Key::Digit(_) => current.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
