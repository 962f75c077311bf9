//! # Validation Module
//!
//! Precondition checks that gate the discount computation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keypad (input::apply_key)                                    │
//! │  └── Percentage presses above 100 are ignored                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Percentages must lie in [0, 100]                                  │
//! │  └── Original amount must be finite and > 0                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: discount::compute_discount                                   │
//! │  └── Clamps percentages to 100 if the layers above were bypassed       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here clamps. An out-of-range value is rejected and the
//! calculation does not run.

use crate::error::ValidationError;
use crate::MAX_PERCENTAGE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Returns `true` when `value` lies in `[0, 100]` (inclusive).
///
/// NaN is never valid.
///
/// ## Example
/// ```rust
/// use slash_core::validation::is_valid_percentage;
///
/// assert!(is_valid_percentage(0.0));
/// assert!(is_valid_percentage(100.0));
/// assert!(!is_valid_percentage(-1.0));
/// assert!(!is_valid_percentage(100.01));
/// ```
pub fn is_valid_percentage(value: f64) -> bool {
    (0.0..=MAX_PERCENTAGE).contains(&value)
}

/// Typed form of [`is_valid_percentage`] for callers that report errors.
pub fn validate_percentage(field: &str, value: f64) -> ValidationResult<f64> {
    if !is_valid_percentage(value) {
        return Err(ValidationError::PercentageOutOfRange {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validates the original amount before a calculation.
///
/// ## Rules
/// - Must be finite (an overlong digit string parses to infinity)
/// - Must be strictly positive (`0` keeps the calculate action disabled)
///
/// ## Example
/// ```rust
/// use slash_core::validation::validate_original_amount;
///
/// assert!(validate_original_amount(100.0).is_ok());
/// assert!(validate_original_amount(0.0).is_err());
/// ```
pub fn validate_original_amount(value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "Original amount".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "Original amount".to_string(),
        });
    }

    Ok(value)
}

/// Validates that a raw field is not empty (after trimming).
pub fn validate_required<'a>(field: &str, text: &'a str) -> ValidationResult<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(text)
}

// =============================================================================
// Unit Tests
// =============================================================================
