//! # till-core: Pure Business Logic for Till
//!
//! This crate is the **heart** of Till. It contains the cart model and all
//! of its arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console Session (apps/cashier)                 │   │
//! │  │    Menu ──► Prompts ──► Cart Operation ──► Receipt Export       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ till-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Percent  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │           │  │  parsing  │  │ LineItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart model (line items, discount, tax, totals)
//! - [`types`] - Domain types (Percent)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Cart, Money, Percent};
//!
//! let mut cart = Cart::new();
//! cart.add_item("Coffee", Money::from_cents(350), 2).unwrap();
//! cart.add_item(" coffee ", Money::from_cents(400), 1).unwrap();
//!
//! // Same item: quantity is additive, price is last-write-wins
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.subtotal().cents(), 1200);
//!
//! cart.set_discount(Percent::from_bps(1000)).unwrap(); // 10%
//! assert_eq!(cart.discount_amount().cents(), 120);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{normalize_key, Cart, CartTotals, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::Percent;
