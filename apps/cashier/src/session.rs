//! # Cashier Session
//!
//! The menu loop: show the menu, read one choice, run it, repeat.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Loop                                     │
//! │                                                                         │
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──────────┐   "0"-"8"   ┌──────────────┐                              │
//! │  │  menu    │────────────►│  dispatch    │──► Cart / Receipt            │
//! │  │  prompt  │◄────────────│              │                              │
//! │  └──────────┘  Continue   └──────────────┘                              │
//! │    │   │                         │                                      │
//! │    │   └── other ─► "Invalid choice", back to menu                      │
//! │    │                             │                                      │
//! │    └── end of input ──► Exit ◄── "0"                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Add vs. Update Quantity
//! Adding with a quantity ≤ 0 is rejected at this layer. Updating to a
//! quantity ≤ 0 is passed straight to the cart, which removes the item.
//! Zero works as "delete" on update but never on add.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};
use till_core::validation::{validate_item_name, validate_quantity};
use till_core::{Cart, CoreError};
use tracing::{debug, info, warn};

use crate::config::CashierConfig;
use crate::console::Console;
use crate::error::AppResult;
use crate::labels;
use crate::menu::MenuChoice;
use crate::receipt::{save_receipt, Receipt};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive cashier session owning the one cart.
pub struct Session<R, W> {
    console: Console<R, W>,
    cart: Cart,
    config: CashierConfig,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty cart.
    pub fn new(input: R, output: W, config: CashierConfig) -> Self {
        Session {
            console: Console::new(input, output),
            cart: Cart::new(),
            config,
            clock: local_now,
        }
    }

    /// Replaces the clock used to stamp receipts.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Console output written so far.
    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Runs the menu loop until the exit choice or end of input.
    ///
    /// ## Errors
    /// Only unrecoverable faults: the console cannot be read or written, or
    /// a receipt cannot be saved.
    pub fn run(&mut self) -> AppResult<()> {
        info!(store = %self.config.store_name, "session started");
        self.print_banner()?;

        loop {
            self.print_menu()?;

            let Some(raw) = self.console.read_line(labels::PROMPT_CHOICE)? else {
                self.console.say(labels::GOODBYE)?;
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    self.console.say(labels::WARN_INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<Flow> {
        match choice {
            MenuChoice::ViewCart => self.print_cart(),
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::UpdateQuantity => self.update_quantity(),
            MenuChoice::RemoveItem => self.remove_item(),
            MenuChoice::SetDiscount => self.set_discount(),
            MenuChoice::SetTax => self.set_tax(),
            MenuChoice::Checkout => self.checkout(),
            MenuChoice::ClearCart => {
                self.cart.clear();
                self.console.say(labels::OK_CLEARED)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.console.say(labels::GOODBYE)?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_item(&mut self) -> AppResult<Flow> {
        let Some(name) = self.console.read_line(labels::PROMPT_NAME)? else {
            return Ok(Flow::Exit);
        };
        if validate_item_name(&name).is_err() {
            self.console.say(labels::WARN_NAME_REQUIRED)?;
            return Ok(Flow::Continue);
        }

        let Some(price) = self.console.prompt_amount(labels::PROMPT_PRICE)? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.console.prompt_integer(labels::PROMPT_QUANTITY)? else {
            return Ok(Flow::Exit);
        };
        if validate_quantity(quantity).is_err() {
            self.console.say(labels::WARN_QUANTITY_POSITIVE)?;
            return Ok(Flow::Continue);
        }

        match self.cart.add_item(&name, price, quantity) {
            Ok(()) => self.console.say(labels::OK_ADDED)?,
            Err(err) => self.report_rejected("add", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn update_quantity(&mut self) -> AppResult<Flow> {
        let Some(name) = self.console.read_line(labels::PROMPT_NAME)? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.console.prompt_integer(labels::PROMPT_NEW_QUANTITY)? else {
            return Ok(Flow::Exit);
        };

        match self.cart.update_quantity(&name, quantity) {
            Ok(true) => self.console.say(labels::OK_UPDATED)?,
            Ok(false) => self.console.say(labels::WARN_NOT_FOUND)?,
            Err(err) => self.report_rejected("update", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> AppResult<Flow> {
        let Some(name) = self.console.read_line(labels::PROMPT_NAME)? else {
            return Ok(Flow::Exit);
        };

        match self.cart.remove_item(&name) {
            Ok(true) => self.console.say(labels::OK_REMOVED)?,
            Ok(false) => self.console.say(labels::WARN_NOT_FOUND)?,
            Err(err) => self.report_rejected("remove", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn set_discount(&mut self) -> AppResult<Flow> {
        let Some(discount) = self.console.prompt_percent(labels::PROMPT_DISCOUNT)? else {
            return Ok(Flow::Exit);
        };
        match self.cart.set_discount(discount) {
            Ok(()) => self.console.say(labels::OK_DISCOUNT)?,
            Err(err) => self.report_rejected("discount", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn set_tax(&mut self) -> AppResult<Flow> {
        let Some(tax) = self.console.prompt_percent(labels::PROMPT_TAX)? else {
            return Ok(Flow::Exit);
        };
        match self.cart.set_tax(tax) {
            Ok(()) => self.console.say(labels::OK_TAX)?,
            Err(err) => self.report_rejected("tax", &err)?,
        }
        Ok(Flow::Continue)
    }

    /// The cart refused a change and is unchanged.
    fn report_rejected(&mut self, action: &'static str, err: &CoreError) -> AppResult<()> {
        warn!(action, %err, "cart change rejected");
        self.console.say(format!("⚠️  {}", err))
    }

    /// Shows the cart, saves the receipt, then clears the cart.
    ///
    /// The cart is only cleared after the file is written; a failed write
    /// ends the session with the cart intact.
    fn checkout(&mut self) -> AppResult<Flow> {
        if self.cart.is_empty() {
            warn!("checkout attempted on empty cart");
            self.console.say(labels::WARN_CART_EMPTY)?;
            return Ok(Flow::Continue);
        }

        self.print_cart()?;

        let receipt = Receipt::from_cart(&self.cart, (self.clock)());
        let path = save_receipt(
            &receipt,
            &self.config.receipts_dir,
            self.config.receipt_format,
        )?;
        self.console
            .say(format!("{} {}", labels::OK_SAVED, path.display()))?;

        self.cart.clear();
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Display
    // =========================================================================

    fn print_banner(&mut self) -> AppResult<()> {
        let rule = "=".repeat(labels::RULE_WIDTH);
        self.console.say(&rule)?;
        self.console.say(&self.config.store_name)?;
        self.console.say(labels::BANNER_AR)?;
        self.console.say(labels::BANNER_EN)?;
        self.console.say(&rule)
    }

    fn print_menu(&mut self) -> AppResult<()> {
        self.console.say(format!("\n{}", labels::MENU_TITLE))?;
        for choice in MenuChoice::ALL {
            self.console.say(choice.label())?;
        }
        Ok(())
    }

    fn print_cart(&mut self) -> AppResult<Flow> {
        if self.cart.is_empty() {
            self.console.say(format!("\n{}", labels::CART_EMPTY))?;
            return Ok(Flow::Continue);
        }

        let rule = "-".repeat(labels::RULE_WIDTH);
        let fmt = |m| self.config.format_currency(m);

        let mut lines = vec![format!("\n{}", labels::CART_CURRENT), rule.clone()];
        for item in self.cart.items() {
            lines.push(format!(
                "{} | Qty: {} | Price: {} | Total: {}",
                item.name(),
                item.quantity(),
                fmt(item.unit_price()),
                fmt(item.line_total()),
            ));
        }
        lines.push(rule);

        let totals = self.cart.totals();
        lines.push(format!("Subtotal: {}", fmt(totals.subtotal)));
        if !totals.discount_percent.is_zero() {
            lines.push(format!(
                "Discount ({}%): -{}",
                totals.discount_percent.format_one_decimal(),
                fmt(totals.discount_amount)
            ));
        }
        if !totals.tax_percent.is_zero() {
            lines.push(format!(
                "Tax ({}%): +{}",
                totals.tax_percent.format_one_decimal(),
                fmt(totals.tax_amount)
            ));
        }
        lines.push(format!("Total Due: {}", fmt(totals.total_due)));

        for line in lines {
            self.console.say(line)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    use chrono::NaiveDate;
    use till_core::{Money, Percent};

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn run_session(receipts_dir: &Path, script: &[&str]) -> TestSession {
        let mut input = script.join("\n");
        input.push('\n');

        let config = CashierConfig {
            receipts_dir: receipts_dir.to_path_buf(),
            ..CashierConfig::default()
        };
        let mut session = Session::new(Cursor::new(input.into_bytes()), Vec::new(), config)
            .with_clock(fixed_clock);
        session.run().unwrap();
        session
    }

    fn output_of(session: &TestSession) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["0"]);

        let out = output_of(&session);
        assert!(out.contains(labels::BANNER_EN));
        assert!(out.contains(labels::MENU_CHECKOUT));
        assert!(out.ends_with(&format!("{}\n", labels::GOODBYE)));
    }

    #[test]
    fn test_invalid_choice_continues() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["9", "abc", "0"]);

        let out = output_of(&session);
        assert_eq!(out.matches(labels::WARN_INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches(labels::MENU_TITLE).count(), 3);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let tmp = tempfile::tempdir().unwrap();
        // Input runs out while the price is being asked for
        let session = run_session(tmp.path(), &["2", "Tea"]);

        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_merges_and_overwrites_price() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(
            tmp.path(),
            &["2", "Coffee", "3.50", "2", "2", " coffee ", "4", "1", "0"],
        );

        let cart = session.cart();
        assert_eq!(cart.item_count(), 1);
        let item = cart.get("COFFEE").unwrap();
        assert_eq!(item.name(), "Coffee");
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.unit_price(), Money::from_cents(400));
        assert_eq!(cart.subtotal(), Money::from_cents(1200));
        assert_eq!(output_of(&session).matches(labels::OK_ADDED).count(), 2);
    }

    #[test]
    fn test_add_reprompts_bad_price() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["2", "Tea", "abc", "-1", "2", "1", "0"]);

        let out = output_of(&session);
        assert!(out.contains(labels::WARN_NOT_A_NUMBER));
        assert!(out.contains(labels::WARN_NEGATIVE));
        assert_eq!(session.cart().get("tea").unwrap().unit_price(), Money::from_cents(200));
    }

    #[test]
    fn test_add_rejects_empty_name_and_non_positive_quantity() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["2", "   ", "2", "Tea", "2", "0", "0"]);

        let out = output_of(&session);
        assert!(out.contains(labels::WARN_NAME_REQUIRED));
        assert!(out.contains(labels::WARN_QUANTITY_POSITIVE));
        assert!(!out.contains(labels::OK_ADDED));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_accepts_long_names() {
        let tmp = tempfile::tempdir().unwrap();
        let name = "Extra Large ".repeat(40);
        let session = run_session(tmp.path(), &["2", name.as_str(), "1", "1", "0"]);

        assert!(output_of(&session).contains(labels::OK_ADDED));
        assert_eq!(session.cart().items()[0].name(), name.trim());
    }

    #[test]
    fn test_out_of_range_amounts_are_refused_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("receipts");
        let session = run_session(
            &dir,
            &[
                // 100,000,000.00 × 1,000,000,000 does not fit
                "2", "Yacht", "100000000", "1000000000", "1",
                // One fits; a billion of them still does not
                "2", "Yacht", "100000000", "1", "3", "yacht", "1000000000", "1",
                "7", "0",
            ],
        );

        let out = output_of(&session);
        assert_eq!(out.matches("Amount too large").count(), 2);
        assert!(out.contains(labels::CART_EMPTY));
        assert!(out.contains("Total Due: 100,000,000.00"));

        let csv = fs::read_to_string(dir.join("receipt_20261016_140509.csv")).unwrap();
        assert!(csv.contains("Yacht,1,100000000.00,100000000.00\r\n"));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_update_to_zero_deletes() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(
            tmp.path(),
            &["2", "Tea", "2", "1", "3", "TEA", "0", "0"],
        );

        assert!(session.cart().is_empty());
        assert!(output_of(&session).contains(labels::OK_UPDATED));
    }

    #[test]
    fn test_update_and_remove_missing_item() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["3", "Ghost", "5", "4", "Ghost", "0"]);

        assert_eq!(output_of(&session).matches(labels::WARN_NOT_FOUND).count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["2", "Tea", "2", "1", "4", " tea", "0"]);

        assert!(session.cart().is_empty());
        assert!(output_of(&session).contains(labels::OK_REMOVED));
    }

    #[test]
    fn test_view_cart_with_discount_and_tax() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(
            tmp.path(),
            &["1", "2", "Laptop", "1000", "2", "5", "10", "6", "5", "1", "0"],
        );

        let out = output_of(&session);
        assert!(out.contains(labels::CART_EMPTY));
        assert!(out.contains("Laptop | Qty: 2 | Price: 1,000.00 | Total: 2,000.00"));
        assert!(out.contains("Subtotal: 2,000.00"));
        assert!(out.contains("Discount (10.0%): -200.00"));
        assert!(out.contains("Tax (5.0%): +90.00"));
        assert!(out.contains("Total Due: 1,890.00"));

        let cart = session.cart();
        assert_eq!(cart.discount(), Percent::from_bps(1000));
        assert_eq!(cart.tax(), Percent::from_bps(500));
    }

    #[test]
    fn test_view_cart_hides_zero_rates() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["2", "Tea", "2", "1", "1", "0"]);

        let out = output_of(&session);
        assert!(out.contains("Total Due: 2.00"));
        assert!(!out.contains("Discount ("));
        assert!(!out.contains("Tax ("));
    }

    #[test]
    fn test_checkout_empty_cart_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("receipts");
        let session = run_session(&dir, &["5", "10", "7", "0"]);

        assert!(output_of(&session).contains(labels::WARN_CART_EMPTY));
        assert!(!dir.exists());
        // The discount set before the rejected checkout is still there
        assert_eq!(session.cart().discount(), Percent::from_bps(1000));
    }

    #[test]
    fn test_checkout_saves_receipt_and_clears_cart() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("receipts");
        let session = run_session(
            &dir,
            &["2", "Coffee", "3.50", "2", "5", "10", "6", "5", "7", "0"],
        );

        let path = dir.join("receipt_20261016_140509.csv");
        let csv = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(
            rows,
            [
                "Item,Qty,Price,Total",
                "Coffee,2,3.50,7.00",
                "",
                "Subtotal,7.00",
                "Discount %,10.0",
                "Discount Amount,0.70",
                "Tax %,5.0",
                "Tax Amount,0.32",
                "Total Due,6.62",
                "",
            ]
        );

        let out = output_of(&session);
        assert!(out.contains(&format!("{} {}", labels::OK_SAVED, path.display())));

        let cart = session.cart();
        assert!(cart.is_empty());
        assert!(cart.discount().is_zero());
        assert!(cart.tax().is_zero());
    }

    #[test]
    fn test_clear_cart() {
        let tmp = tempfile::tempdir().unwrap();
        let session = run_session(tmp.path(), &["2", "Tea", "2", "1", "6", "8", "8", "0"]);

        assert_eq!(session.cart(), &Cart::new());
        assert!(output_of(&session).contains(labels::OK_CLEARED));
    }
}
