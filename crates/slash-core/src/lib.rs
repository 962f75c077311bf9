//! # slash-core: Pure Discount Engine for Slash
//!
//! This crate is the **heart** of Slash. It contains every piece of
//! calculation logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Slash Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front End (slash-terminal, or a UI)             │   │
//! │  │    Amount ──► Discount ──► Extra ──► Currency ──► Calculate     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings / FormAction               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ slash-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   input   │  │ validation│  │ discount  │  │   money   │  │   │
//! │  │   │  parse    │  │  0..=100  │  │  stacked  │  │  format   │  │   │
//! │  │   │  keypad   │  │  amount>0 │  │  savings  │  │  Money    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ currency  │  │   form    │                                 │   │
//! │  │   │  catalog  │  │  reducer  │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Text normalization and keypad entry rules
//! - [`validation`] - Percentage and amount preconditions
//! - [`discount`] - Stacked discount computation and savings metrics
//! - [`money`] - Minor-unit `Money` and currency formatting
//! - [`currency`] - The fixed currency catalog
//! - [`types`] - Calculation DTOs
//! - [`form`] - Immutable calculator form state and its transitions
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Degraded Input**: Unparsable text becomes `0`, never an error
//! 3. **Multiplicative Stacking**: 20% then 10% off is 28% off, not 30%
//! 4. **Explicit Errors**: Unknown currencies and bad percentages are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use slash_core::discount::compute_discount;
//! use slash_core::input::parse_amount;
//! use slash_core::money::format_currency;
//!
//! let original = parse_amount("$100");
//! let final_amount = compute_discount(original, 20.0, Some(10.0));
//!
//! assert_eq!(format_currency(final_amount, "USD").unwrap(), "$72.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod discount;
pub mod error;
pub mod form;
pub mod input;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::{Currency, CATALOG};
pub use discount::compute_discount;
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{CalculatorState, Field, FormAction};
pub use input::{parse_amount, Key, KeypadRules};
pub use money::{format_currency, Money};
pub use types::*;
pub use validation::is_valid_percentage;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound of a percentage value (inclusive).
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Default number of fraction digits the keypad accepts in percentage fields.
pub const DEFAULT_PERCENT_DECIMALS: usize = 2;
