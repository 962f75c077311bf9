//! # Error Types
//!
//! Domain-specific error types for slash-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slash-core errors (this file)                                         │
//! │  ├── CoreError        - Formatting and calculation failures            │
//! │  └── ValidationError  - Rejected preconditions (bad percentage, etc.)  │
//! │                                                                         │
//! │  slash-terminal errors (separate crate)                                │
//! │  └── AppError         - Config and terminal I/O failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shown as a message, never a panic │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unparsable text is NOT an error anywhere in this crate: it normalizes
//! to `0` (see [`crate::input::parse_amount`]).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Currency code is not part of the catalog.
    ///
    /// ## When This Occurs
    /// - A config file names a currency we don't know
    /// - A caller passes a free-text code to `format_currency`
    ///
    /// Callers fall back to `Currency::default()` rather than crash.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Amount is NaN or infinite and cannot be formatted.
    #[error("Cannot format a non-finite amount")]
    NonFiniteAmount,

    /// Amount does not fit in the formatter's minor-unit range.
    #[error("Amount {0} is too large to format")]
    AmountOutOfRange(f64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are raised before the discount computation runs. The front end
/// keeps the "calculate" action disabled while any of them would apply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is NaN or infinite (e.g. a digit string too long for `f64`).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Percentage lies outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
