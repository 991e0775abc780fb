//! # Validation Module
//!
//! Input validation for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/cashier)                                │
//! │  ├── Re-prompt until the text parses as a number                       │
//! │  └── Re-prompt on negative price / percent                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session dispatch (apps/cashier)                              │
//! │  ├── Empty name → abort add                                            │
//! │  └── Quantity ≤ 0 → abort add (update passes it through)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart model                                                   │
//! │  └── THIS MODULE: name and price rules re-checked on add               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// The only rule: it must not be empty after trimming. Any length and any
/// script are accepted.
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Coffee").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity for adding an item.
///
/// Only the add path uses this. Updating to a non-positive quantity is
/// a deletion, not an error.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}
