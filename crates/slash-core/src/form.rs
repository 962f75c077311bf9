//! # Calculator Form
//!
//! The calculator's form as an immutable value with reducer transitions.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce(&state, action) → state                       │
//! │                                                                         │
//! │  Set*/KeyPressed ────────► field text replaced / edited                │
//! │                                                                         │
//! │  RequestCalculation ─────► is_calculating = true   (if can_calculate)  │
//! │          │                                                              │
//! │          │  front end shows a spinner for a moment (NOT our concern)    │
//! │          ▼                                                              │
//! │  CompleteCalculation ────► parse → validate → compute                  │
//! │                            ├── ok:  final_amount = result               │
//! │                            └── err: final_amount = 0, error = message   │
//! │                            is_calculating = false                       │
//! │                                                                         │
//! │  Clear ──────────────────► initial state (currency kept)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer never mutates its input. The engine never sees this state:
//! it only receives the numbers extracted by [`evaluate`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::Currency;
use crate::error::CoreResult;
use crate::input::{apply_key, parse_amount, Key, KeypadRules};
use crate::types::{CalculationInput, CalculationResult};
use crate::validation::{validate_original_amount, validate_percentage, validate_required};
use crate::DEFAULT_PERCENT_DECIMALS;

const ORIGINAL_AMOUNT_LABEL: &str = "Original amount";
const DISCOUNT_LABEL: &str = "Discount percentage";
const ADDITIONAL_DISCOUNT_LABEL: &str = "Additional discount percentage";

/// One of the three input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    OriginalAmount,
    DiscountPercent,
    AdditionalDiscountPercent,
}

impl Field {
    /// Keypad limits for this field.
    pub fn keypad_rules(self, percent_max_decimals: usize) -> KeypadRules {
        match self {
            Field::OriginalAmount => KeypadRules::amount(),
            Field::DiscountPercent | Field::AdditionalDiscountPercent => {
                KeypadRules::percentage(percent_max_decimals)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::OriginalAmount => ORIGINAL_AMOUNT_LABEL,
            Field::DiscountPercent => DISCOUNT_LABEL,
            Field::AdditionalDiscountPercent => ADDITIONAL_DISCOUNT_LABEL,
        }
    }
}

/// Everything the user can do to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetOriginalAmount(String),
    SetDiscountPercent(String),
    SetAdditionalDiscountPercent(String),
    KeyPressed { field: Field, key: Key },
    SelectCurrency(Currency),
    RequestCalculation,
    CompleteCalculation,
    Clear,
}

/// Snapshot of the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorState {
    /// Raw text, exactly as typed.
    pub original_amount: String,
    pub discount_percent: String,
    pub additional_discount_percent: String,

    pub currency: Currency,

    /// Result of the last completed calculation (`0` when rejected or none yet).
    pub final_amount: f64,

    /// Between `RequestCalculation` and `CompleteCalculation`.
    pub is_calculating: bool,

    /// Why the last calculation was rejected, if it was.
    pub error: Option<String>,

    /// Fraction digits accepted by the keypad in percentage fields.
    pub percent_max_decimals: usize,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            original_amount: String::new(),
            discount_percent: String::new(),
            additional_discount_percent: String::new(),
            currency: Currency::default(),
            final_amount: 0.0,
            is_calculating: false,
            error: None,
            percent_max_decimals: DEFAULT_PERCENT_DECIMALS,
        }
    }
}

impl CalculatorState {
    /// Empty form displaying amounts in `currency`.
    pub fn new(currency: Currency, percent_max_decimals: usize) -> Self {
        CalculatorState {
            currency,
            percent_max_decimals,
            ..Default::default()
        }
    }

    /// Raw text of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::OriginalAmount => &self.original_amount,
            Field::DiscountPercent => &self.discount_percent,
            Field::AdditionalDiscountPercent => &self.additional_discount_percent,
        }
    }

    fn with_field(&self, field: Field, text: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::OriginalAmount => next.original_amount = text,
            Field::DiscountPercent => next.discount_percent = text,
            Field::AdditionalDiscountPercent => next.additional_discount_percent = text,
        }
        next
    }

    /// Whether the "calculate" action should be enabled.
    ///
    /// ## Rules
    /// - Amount and discount fields are filled in
    /// - Amount parses to a finite value greater than 0
    /// - Both percentages are within `[0, 100]`
    /// - No calculation is already in flight
    pub fn can_calculate(&self) -> bool {
        !self.is_calculating && evaluate(self).is_ok()
    }

    /// The last result, when there is something worth showing.
    pub fn result(&self) -> Option<CalculationResult> {
        if self.is_calculating || self.final_amount.is_nan() || self.final_amount <= 0.0 {
            return None;
        }
        Some(CalculationResult::new(
            parse_amount(&self.original_amount),
            self.final_amount,
        ))
    }
}

/// Parses and validates the form, then runs the engine.
///
/// ## Errors
/// - `Required` when the amount or discount field is empty
/// - `NotFinite` when the amount overflows `f64`
/// - `MustBePositive` when the amount is not greater than 0
/// - `PercentageOutOfRange` for either percentage outside `[0, 100]`
///   (the additional one is only checked when it is greater than 0)
///
/// ## Example
/// ```rust
/// use slash_core::form::{evaluate, reduce, CalculatorState, FormAction};
///
/// let state = CalculatorState::default();
/// let state = reduce(&state, FormAction::SetOriginalAmount("100".into()));
/// let state = reduce(&state, FormAction::SetDiscountPercent("20".into()));
///
/// assert_eq!(evaluate(&state).unwrap().final_amount, 80.0);
/// ```
pub fn evaluate(state: &CalculatorState) -> CoreResult<CalculationResult> {
    let original = parse_amount(validate_required(ORIGINAL_AMOUNT_LABEL, &state.original_amount)?);
    let discount = parse_amount(validate_required(DISCOUNT_LABEL, &state.discount_percent)?);
    let additional = parse_amount(&state.additional_discount_percent);

    validate_original_amount(original)?;
    validate_percentage(DISCOUNT_LABEL, discount)?;
    if additional > 0.0 {
        validate_percentage(ADDITIONAL_DISCOUNT_LABEL, additional)?;
    }

    let additional = (additional > 0.0).then_some(additional);
    Ok(CalculationInput::new(original, discount, additional).compute())
}

/// Applies one action, returning the next state.
pub fn reduce(state: &CalculatorState, action: FormAction) -> CalculatorState {
    match action {
        FormAction::SetOriginalAmount(text) => state.with_field(Field::OriginalAmount, text),
        FormAction::SetDiscountPercent(text) => state.with_field(Field::DiscountPercent, text),
        FormAction::SetAdditionalDiscountPercent(text) => {
            state.with_field(Field::AdditionalDiscountPercent, text)
        }
        FormAction::KeyPressed { field, key } => {
            let rules = field.keypad_rules(state.percent_max_decimals);
            let text = apply_key(state.field(field), key, &rules);
            state.with_field(field, text)
        }
        FormAction::SelectCurrency(currency) => CalculatorState {
            currency,
            ..state.clone()
        },
        FormAction::RequestCalculation => {
            if !state.can_calculate() {
                return state.clone();
            }
            CalculatorState {
                is_calculating: true,
                ..state.clone()
            }
        }
        FormAction::CompleteCalculation => match evaluate(state) {
            Ok(result) => CalculatorState {
                final_amount: result.final_amount,
                is_calculating: false,
                error: None,
                ..state.clone()
            },
            Err(err) => CalculatorState {
                final_amount: 0.0,
                is_calculating: false,
                error: Some(err.to_string()),
                ..state.clone()
            },
        },
        FormAction::Clear => CalculatorState::new(state.currency, state.percent_max_decimals),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn filled(amount: &str, discount: &str, extra: &str) -> CalculatorState {
        [
            FormAction::SetOriginalAmount(amount.to_string()),
            FormAction::SetDiscountPercent(discount.to_string()),
            FormAction::SetAdditionalDiscountPercent(extra.to_string()),
        ]
        .into_iter()
        .fold(CalculatorState::default(), |s, a| reduce(&s, a))
    }

    fn calculate(state: &CalculatorState) -> CalculatorState {
        let requested = reduce(state, FormAction::RequestCalculation);
        reduce(&requested, FormAction::CompleteCalculation)
    }

    #[test]
    fn test_scenario_single_discount() {
        let state = calculate(&filled("100", "20", ""));
        assert_eq!(state.final_amount, 80.0);
        assert_eq!(
            state.result().unwrap().display_final(state.currency).unwrap(),
            "$80.00"
        );
    }

    #[test]
    fn test_scenario_stacked_discount() {
        let state = calculate(&filled("100", "20", "10"));
        let result = state.result().unwrap();
        assert_eq!(result.display_final(Currency::Usd).unwrap(), "$72.00");
        assert_eq!(result.display_savings(Currency::Usd).unwrap(), "$28.00");
        assert_eq!(result.display_savings_percentage(), "28.0%");
    }

    #[test]
    fn test_scenario_zero_amount_disables_calculation() {
        let state = filled("0", "50", "");
        assert!(!state.can_calculate());

        let requested = reduce(&state, FormAction::RequestCalculation);
        assert!(!requested.is_calculating);
        assert_eq!(requested, state);

        // Forcing completion anyway lands on the safe no-op.
        let forced = reduce(&state, FormAction::CompleteCalculation);
        assert_eq!(forced.final_amount, 0.0);
        assert!(forced.result().is_none());
    }

    #[test]
    fn test_scenario_out_of_range_discount_is_rejected() {
        let state = filled("50", "150", "");
        assert!(!state.can_calculate());
        assert_eq!(
            evaluate(&state),
            Err(CoreError::Validation(ValidationError::PercentageOutOfRange {
                field: DISCOUNT_LABEL.to_string(),
                value: 150.0,
            }))
        );

        let forced = reduce(&state, FormAction::CompleteCalculation);
        assert_eq!(forced.final_amount, 0.0);
        assert!(forced.error.as_deref().unwrap().contains("between 0 and 100"));
    }

    #[test]
    fn test_out_of_range_additional_discount_is_rejected() {
        let state = filled("100", "20", "101");
        assert!(!state.can_calculate());
    }

    #[test]
    fn test_overlong_amount_is_rejected() {
        let amount = format!("1{}", "0".repeat(400));
        let state = filled(&amount, "20", "");
        assert!(!state.can_calculate());

        let forced = reduce(&state, FormAction::CompleteCalculation);
        assert_eq!(forced.final_amount, 0.0);
        assert!(forced.error.as_deref().unwrap().contains("must be a finite number"));
        assert!(forced.result().is_none());
    }

    #[test]
    fn test_nan_final_amount_has_no_result() {
        let state = CalculatorState {
            final_amount: f64::NAN,
            ..filled("100", "20", "")
        };
        assert!(state.result().is_none());
    }

    #[test]
    fn test_empty_required_fields() {
        assert!(!filled("", "20", "").can_calculate());
        assert!(!filled("100", "", "").can_calculate());
        assert!(filled("100", "0", "").can_calculate());
    }

    #[test]
    fn test_no_double_request_while_calculating() {
        let requested = reduce(&filled("100", "20", ""), FormAction::RequestCalculation);
        assert!(requested.is_calculating);
        assert!(!requested.can_calculate());
        assert!(requested.result().is_none());
    }

    #[test]
    fn test_error_cleared_by_successful_calculation() {
        let rejected = reduce(&filled("100", "150", ""), FormAction::CompleteCalculation);
        assert!(rejected.error.is_some());

        let fixed = reduce(&rejected, FormAction::SetDiscountPercent("15".to_string()));
        let done = calculate(&fixed);
        assert!(done.error.is_none());
        assert!((done.final_amount - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_keypad_editing() {
        let mut state = CalculatorState::default();
        for c in "1500".chars() {
            state = reduce(
                &state,
                FormAction::KeyPressed {
                    field: Field::DiscountPercent,
                    key: Key::from_char(c).unwrap(),
                },
            );
        }
        // "150" would exceed 100, so both zeros are ignored.
        assert_eq!(state.discount_percent, "15");

        let state = reduce(
            &state,
            FormAction::KeyPressed {
                field: Field::OriginalAmount,
                key: Key::Digit(9),
            },
        );
        assert_eq!(state.original_amount, "9");
    }

    #[test]
    fn test_currency_selection_keeps_amounts() {
        let state = calculate(&filled("100", "20", ""));
        let switched = reduce(&state, FormAction::SelectCurrency(Currency::Eur));
        assert_eq!(switched.final_amount, state.final_amount);
        assert_eq!(switched.currency, Currency::Eur);
    }

    #[test]
    fn test_clear_keeps_currency_and_settings() {
        let state = CalculatorState::new(Currency::Gbp, 3);
        let state = calculate(&reduce(&state, FormAction::SetOriginalAmount("10".into())));
        let cleared = reduce(&state, FormAction::Clear);
        assert_eq!(cleared, CalculatorState::new(Currency::Gbp, 3));
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let state = filled("100", "20", "");
        let snapshot = state.clone();
        let _ = calculate(&state);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_state_serializes_for_front_end() {
        let state = filled("100", "20", "");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["originalAmount"], "100");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["isCalculating"], false);
    }
}
