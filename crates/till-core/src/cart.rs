//! # Cart Model
//!
//! The single in-memory cart a cashier builds up during a session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action              Cart Method             Cart State Change     │
//! │  ───────────              ───────────             ─────────────────     │
//! │                                                                         │
//! │  2) Add item ────────────► add_item() ──────────► push or merge        │
//! │                                                                         │
//! │  3) Update quantity ─────► update_quantity() ───► qty = n, or remove   │
//! │                                                  when n ≤ 0            │
//! │                                                                         │
//! │  4) Remove item ─────────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  5) / 6) Discount, tax ──► set_discount/tax() ──► rate = p             │
//! │                                                                         │
//! │  7) Checkout, 8) Clear ──► clear() ─────────────► empty, rates = 0     │
//! │                                                                         │
//! │  1) View cart ───────────► totals() ────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! ```text
//! subtotal        = Σ unit_price × quantity
//! discount_amount = subtotal × discount%                  (rounded to cents)
//! tax_amount      = (subtotal − discount_amount) × tax%   (rounded to cents)
//! total_due       = subtotal − discount_amount + tax_amount
//! ```
//!
//! The figures are recomputed with checked arithmetic on every change and
//! kept on the cart, so reading them can never overflow.

use std::iter;

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Percent;
use crate::validation::{validate_item_name, validate_price};

/// Returns the lookup key for an item name: trimmed and lowercased.
///
/// `"  Coffee "`, `"coffee"` and `"COFFEE"` all name the same line item.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn overflow(figure: &'static str) -> CoreError {
    CoreError::AmountOverflow { figure }
}

fn line_total_of(price: Money, quantity: i64) -> CoreResult<Money> {
    price
        .checked_mul_quantity(quantity)
        .ok_or_else(|| overflow("line total"))
}

// =============================================================================
// Line Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `key`: normalized name, used only for lookup
/// - `name`: trimmed name as first typed, used for display and the receipt
/// - `line_total`: kept in step with price and quantity by the cart
///
/// The display name is never derived from the key, so "Flat White" stays
/// "Flat White" even though it is looked up as "flat white".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(skip)]
    key: String,
    name: String,
    unit_price: Money,
    quantity: i64,
    line_total: Money,
}

impl LineItem {
    /// Normalized lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by normalized key (adding the same name merges)
/// - Every stored quantity is > 0 (updating to ≤ 0 removes the item)
/// - Every stored unit price is ≥ 0
/// - Items keep insertion order, so display and export are stable
/// - `totals` always matches the items and rates, and every figure in it
///   fits in an `i64`. A change that would break this is refused with
///   `CoreError::AmountOverflow` and the cart is left as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    discount: Percent,
    tax: Percent,
    #[serde(skip)]
    totals: CartTotals,
}

impl Cart {
    /// Creates a new empty cart with zero discount and zero tax.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds an item or merges it into an existing line with the same key.
    ///
    /// ## Behavior
    /// - Same key already in cart: quantity is **added**, unit price is
    ///   **overwritten** with `price` (last write wins), display name is kept
    /// - Key not in cart: a new line is appended with the trimmed name
    ///
    /// `quantity` must be > 0. The session checks this before calling; it is
    /// not re-validated here.
    ///
    /// ## Errors
    /// - `Validation` if the name is blank or the price is negative
    /// - `QuantityOverflow` if the merged quantity does not fit in an `i64`
    /// - `AmountOverflow` if the line total or any cart total would not fit
    pub fn add_item(&mut self, name: &str, price: Money, quantity: i64) -> CoreResult<()> {
        debug_assert!(quantity > 0, "add_item requires a positive quantity");
        validate_item_name(name)?;
        validate_price(price)?;

        let key = normalize_key(name);

        if let Some(index) = self.position(&key) {
            let item = &self.items[index];
            let merged = item.quantity.checked_add(quantity).ok_or_else(|| {
                CoreError::QuantityOverflow {
                    name: item.name.clone(),
                    current: item.quantity,
                    added: quantity,
                }
            })?;
            let line_total = line_total_of(price, merged)?;
            let totals = CartTotals::compute(
                self.lines_replacing(index, merged, line_total),
                self.discount,
                self.tax,
            )?;

            let item = &mut self.items[index];
            item.quantity = merged;
            item.unit_price = price;
            item.line_total = line_total;
            self.totals = totals;
            debug!(%key, quantity = merged, price = %price, "merged cart line");
            return Ok(());
        }

        let line_total = line_total_of(price, quantity)?;
        let totals = CartTotals::compute(
            self.lines().chain(iter::once((quantity, line_total))),
            self.discount,
            self.tax,
        )?;

        debug!(%key, quantity, price = %price, "added cart line");
        self.items.push(LineItem {
            key,
            name: name.trim().to_string(),
            unit_price: price,
            quantity,
            line_total,
        });
        self.totals = totals;
        Ok(())
    }

    /// Removes the line matching `name`.
    ///
    /// Returns whether a line was removed. A missing item is not an error.
    pub fn remove_item(&mut self, name: &str) -> CoreResult<bool> {
        let key = normalize_key(name);
        let Some(index) = self.position(&key) else {
            return Ok(false);
        };

        self.remove_at(index)?;
        debug!(%key, "removed cart line");
        Ok(true)
    }

    /// Sets the quantity of the line matching `name`.
    ///
    /// ## Behavior
    /// - Not in cart: returns `false`, nothing changes
    /// - In cart, `quantity ≤ 0`: the line is removed, returns `true`
    /// - In cart, `quantity > 0`: quantity is overwritten, returns `true`
    ///
    /// ## Errors
    /// - `AmountOverflow` if the new line total or a cart total would not fit
    pub fn update_quantity(&mut self, name: &str, quantity: i64) -> CoreResult<bool> {
        let key = normalize_key(name);
        let Some(index) = self.position(&key) else {
            return Ok(false);
        };

        if quantity <= 0 {
            self.remove_at(index)?;
            debug!(%key, quantity, "non-positive quantity removed cart line");
            return Ok(true);
        }

        let line_total = line_total_of(self.items[index].unit_price, quantity)?;
        let totals = CartTotals::compute(
            self.lines_replacing(index, quantity, line_total),
            self.discount,
            self.tax,
        )?;

        let item = &mut self.items[index];
        item.quantity = quantity;
        item.line_total = line_total;
        self.totals = totals;
        debug!(%key, quantity, "updated cart line quantity");
        Ok(true)
    }

    /// Sets the discount applied to the subtotal.
    ///
    /// ## Errors
    /// - `AmountOverflow` if the discount or a later total would not fit
    pub fn set_discount(&mut self, discount: Percent) -> CoreResult<()> {
        self.totals = CartTotals::compute(self.lines(), discount, self.tax)?;
        self.discount = discount;
        debug!(%discount, "discount rate set");
        Ok(())
    }

    /// Sets the tax applied to the discounted subtotal.
    ///
    /// ## Errors
    /// - `AmountOverflow` if the tax or the total due would not fit
    pub fn set_tax(&mut self, tax: Percent) -> CoreResult<()> {
        self.totals = CartTotals::compute(self.lines(), self.discount, tax)?;
        self.tax = tax;
        debug!(%tax, "tax rate set");
        Ok(())
    }

    pub fn discount(&self) -> Percent {
        self.discount
    }

    pub fn tax(&self) -> Percent {
        self.tax
    }

    /// Removes all items and resets discount and tax to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = Percent::zero();
        self.tax = Percent::zero();
        self.totals = CartTotals::default();
    }

    /// Looks up a line by name (case and surrounding whitespace ignored).
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        let key = normalize_key(name);
        self.items.iter().find(|i| i.key == key)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.totals.total_quantity
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    /// Discount percent of the subtotal.
    pub fn discount_amount(&self) -> Money {
        self.totals.discount_amount
    }

    /// Tax percent of the subtotal after discount.
    pub fn tax_amount(&self) -> Money {
        self.totals.tax_amount
    }

    /// Subtotal minus discount plus tax.
    pub fn total_due(&self) -> Money {
        self.totals.total_due
    }

    /// Snapshot of every derived figure.
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|i| i.key == key)
    }

    fn remove_at(&mut self, index: usize) -> CoreResult<()> {
        let lines = self
            .lines()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, line)| line);
        let totals = CartTotals::compute(lines, self.discount, self.tax)?;

        self.items.remove(index);
        self.totals = totals;
        Ok(())
    }

    /// `(quantity, line_total)` of every line.
    fn lines(&self) -> impl Iterator<Item = (i64, Money)> + '_ {
        self.items.iter().map(|i| (i.quantity, i.line_total))
    }

    /// Like [`Cart::lines`], with the line at `index` swapped for new figures.
    fn lines_replacing(
        &self,
        index: usize,
        quantity: i64,
        line_total: Money,
    ) -> impl Iterator<Item = (i64, Money)> + '_ {
        self.lines().enumerate().map(move |(i, line)| {
            if i == index {
                (quantity, line_total)
            } else {
                line
            }
        })
    }
}

/// Cart totals summary, computed once for display and export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount_percent: Percent,
    pub discount_amount: Money,
    pub tax_percent: Percent,
    pub tax_amount: Money,
    pub total_due: Money,
}

impl CartTotals {
    /// Computes every figure from `(quantity, line_total)` pairs and rates.
    fn compute(
        lines: impl Iterator<Item = (i64, Money)>,
        discount: Percent,
        tax: Percent,
    ) -> CoreResult<CartTotals> {
        let mut item_count = 0;
        let mut total_quantity: i64 = 0;
        let mut subtotal = Money::zero();
        for (quantity, line_total) in lines {
            item_count += 1;
            total_quantity = total_quantity
                .checked_add(quantity)
                .ok_or_else(|| overflow("total quantity"))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| overflow("subtotal"))?;
        }

        let discount_amount = subtotal
            .percent_of(discount)
            .ok_or_else(|| overflow("discount"))?;
        let taxable = subtotal
            .checked_sub(discount_amount)
            .ok_or_else(|| overflow("taxable amount"))?;
        let tax_amount = taxable.percent_of(tax).ok_or_else(|| overflow("tax"))?;
        let total_due = taxable
            .checked_add(tax_amount)
            .ok_or_else(|| overflow("total due"))?;

        Ok(CartTotals {
            item_count,
            total_quantity,
            subtotal,
            discount_percent: discount,
            discount_amount,
            tax_percent: tax,
            tax_amount,
            total_due,
        })
    }
}
