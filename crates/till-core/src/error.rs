//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cashier app errors (apps/cashier)                                     │
//! │  └── AppError         - I/O and configuration faults                   │
//! │                                                                         │
//! │  CoreError is printed inline by the session; AppError ends it.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not every failure is an error here. A missing item on update/remove and a
//! non-positive update quantity are normal outcomes of the cart model and are
//! reported through return values instead. The only `CoreError`s a cart
//! produces are invalid inputs and figures too large to represent.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Merging a repeated add would overflow the stored quantity.
    #[error("Quantity overflow for {name}: {current} + {added}")]
    QuantityOverflow {
        name: String,
        current: i64,
        added: i64,
    },

    /// A cart change would push a line total or a cart total past what an
    /// `i64` count of cents can hold. The change is refused.
    #[error("Amount too large: the {figure} would exceed the supported range")]
    AmountOverflow { figure: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The console session maps these to its bilingual warnings, so the variant
/// matters more than the message: `InvalidFormat` means "not a number",
/// `MustBeNonNegative` means "a number, but below zero".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., "abc" where a number was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
