//! # Calculation Types
//!
//! Value types handed between the front end and the engine.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CalculationInput ──compute()──► CalculationResult ──render──► strings  │
//! │  (built right before)            (thrown away after display)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here has identity or is persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::Currency;
use crate::discount::{compute_discount, savings_amount, savings_percentage};
use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Calculation Input
// =============================================================================

/// One original amount and one or two discount percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationInput {
    pub original_amount: f64,
    pub discount_percent: f64,
    /// Stacked discount, applied to the already-discounted amount.
    pub additional_discount_percent: Option<f64>,
}

impl CalculationInput {
    pub fn new(original_amount: f64, discount_percent: f64, additional_discount_percent: Option<f64>) -> Self {
        CalculationInput {
            original_amount,
            discount_percent,
            additional_discount_percent,
        }
    }

    /// Runs the engine over this input.
    ///
    /// ## Example
    /// ```rust
    /// use slash_core::types::CalculationInput;
    ///
    /// let result = CalculationInput::new(100.0, 20.0, None).compute();
    /// assert_eq!(result.final_amount, 80.0);
    /// assert_eq!(result.savings_amount, 20.0);
    /// ```
    pub fn compute(&self) -> CalculationResult {
        let final_amount = compute_discount(
            self.original_amount,
            self.discount_percent,
            self.additional_discount_percent,
        );
        CalculationResult::new(self.original_amount, final_amount)
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// The final amount and the savings derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationResult {
    pub original_amount: f64,
    pub final_amount: f64,
    pub savings_amount: f64,
    pub savings_percentage: f64,
}

impl CalculationResult {
    pub fn new(original_amount: f64, final_amount: f64) -> Self {
        CalculationResult {
            original_amount,
            final_amount,
            savings_amount: savings_amount(original_amount, final_amount),
            savings_percentage: savings_percentage(original_amount, final_amount),
        }
    }

    /// Formatted final amount, e.g. `"$72.00"`.
    pub fn display_final(&self, currency: Currency) -> CoreResult<String> {
        currency.format(self.final_amount)
    }

    /// Formatted savings, e.g. `"$28.00"`.
    ///
    /// Computed from the two *rounded* amounts so that
    /// `original − final = savings` holds on screen to the cent.
    pub fn display_savings(&self, currency: Currency) -> CoreResult<String> {
        let saved = Money::from_major(self.original_amount)? - Money::from_major(self.final_amount)?;
        Ok(saved.format_with_prefix(currency.format_prefix()))
    }

    /// Savings percentage with one decimal, e.g. `"28.0%"`.
    pub fn display_savings_percentage(&self) -> String {
        format!("{:.1}%", self.savings_percentage)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_single_discount() {
        let result = CalculationInput::new(100.0, 20.0, None).compute();
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$80.00");
        assert_eq!(result.display_savings(Currency::Usd).unwrap(), "$20.00");
        assert_eq!(result.display_savings_percentage(), "20.0%");
    }

    #[test]
    fn test_scenario_stacked_discount() {
        let result = CalculationInput::new(100.0, 20.0, Some(10.0)).compute();
        assert!((result.final_amount - 72.0).abs() < 1e-9);
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$72.00");
        assert_eq!(result.display_savings(Currency::Usd).unwrap(), "$28.00");
        assert_eq!(result.display_savings_percentage(), "28.0%");
    }

    #[test]
    fn test_currency_only_changes_presentation() {
        let result = CalculationInput::new(1234.5, 0.0, None).compute();
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$1,234.50");
        assert_eq!(result.display_final(Currency::Eur).unwrap(), "€1,234.50");
        assert_eq!(result.final_amount, 1234.5);
    }

    #[test]
    fn test_savings_on_screen_add_up() {
        // 33.33% off 10.00 = 6.667 → shows $6.67, savings must show $3.33
        let result = CalculationInput::new(10.0, 33.33, None).compute();
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$6.67");
        assert_eq!(result.display_savings(Currency::Usd).unwrap(), "$3.33");
    }

    #[test]
    fn test_final_amount_stays_unrounded_after_display() {
        let result = CalculationInput::new(10.0, 33.33, None).compute();
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$6.67");
        assert!((result.final_amount - 6.667).abs() < 1e-9);
        assert!((result.final_amount - 6.67).abs() > 1e-3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let input = CalculationInput::new(100.0, 20.0, None);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["originalAmount"], 100.0);
        assert_eq!(json["discountPercent"], 20.0);
        assert!(json["additionalDiscountPercent"].is_null());
    }
}
