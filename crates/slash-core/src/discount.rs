//! # Discount Module
//!
//! The stacked percentage-off computation and its savings metrics.
//!
//! ## Stacking Is Multiplicative
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $100  ──20% off──►  $80  ──10% off──►  $72                             │
//! │                                                                         │
//! │  The second discount applies to $80, not to $100.                       │
//! │  20% + 10% stacked = 28% total, NOT 30%.                                │
//! │                                                                         │
//! │  Because (1 - a)(1 - b) = (1 - b)(1 - a), swapping the two              │
//! │  percentages gives the same final value.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::MAX_PERCENTAGE;

/// Computes the final amount after one or two sequential discounts.
///
/// ## Rules
/// - `original <= 0` (or NaN) returns `0` without computing anything
/// - Each percentage is clamped to at most 100; there is NO lower clamp,
///   so a negative percentage raises the amount (validation must stop it)
/// - The second discount applies only when it is `Some(p)` with `p > 0`
/// - No rounding: formatting fixes the two decimals
///
/// ## Example
/// ```rust
/// use slash_core::discount::compute_discount;
///
/// assert_eq!(compute_discount(100.0, 20.0, None), 80.0);
/// assert!((compute_discount(100.0, 20.0, Some(10.0)) - 72.0).abs() < 1e-9);
/// assert_eq!(compute_discount(50.0, 150.0, None), 0.0);
/// assert_eq!(compute_discount(0.0, 50.0, None), 0.0);
/// ```
pub fn compute_discount(original: f64, discount_percent: f64, additional_percent: Option<f64>) -> f64 {
    if original.is_nan() || original <= 0.0 {
        return 0.0;
    }

    let after_first = apply_percent_off(original, discount_percent);

    match additional_percent {
        Some(pct) if pct > 0.0 => apply_percent_off(after_first, pct),
        _ => after_first,
    }
}

/// `amount × (1 − min(pct, 100) / 100)`.
fn apply_percent_off(amount: f64, percent: f64) -> f64 {
    let clamped = if percent > MAX_PERCENTAGE {
        MAX_PERCENTAGE
    } else {
        percent
    };
    amount * (1.0 - clamped / 100.0)
}

/// Absolute savings: `original − final`.
pub fn savings_amount(original: f64, final_amount: f64) -> f64 {
    original - final_amount
}

/// Savings as a percentage of the original, `0` when `original <= 0`.
///
/// ## Example
/// ```rust
/// use slash_core::discount::savings_percentage;
///
/// assert!((savings_percentage(100.0, 72.0) - 28.0).abs() < 1e-9);
/// assert_eq!(savings_percentage(0.0, 0.0), 0.0);
/// ```
pub fn savings_percentage(original: f64, final_amount: f64) -> f64 {
    if original.is_nan() || original <= 0.0 {
        return 0.0;
    }
    (original - final_amount) / original * 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
