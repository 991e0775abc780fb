//! # Receipt Export
//!
//! Writes the final receipt of a checkout to disk.
//!
//! ## CSV Layout
//! ```text
//! Item,Qty,Price,Total
//! Coffee,2,3.50,7.00          ◄── one row per line item
//!                             ◄── blank separator row
//! Subtotal,7.00
//! Discount %,0.0
//! Discount Amount,0.00
//! Tax %,0.0
//! Tax Amount,0.00
//! Total Due,7.00
//! ```
//!
//! Values are plain (no thousands separators): money with two decimals,
//! percentages with one. Rows end with CRLF and fields are quoted only when
//! they need it, both handled by the `csv` writer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use till_core::{Cart, CartTotals, Money};
use tracing::info;

use crate::config::ReceiptFormat;
use crate::error::{AppError, AppResult};

/// A line on the receipt, frozen from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Everything written to a receipt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub issued_at: NaiveDateTime,
    pub lines: Vec<ReceiptLine>,
    pub totals: CartTotals,
}

impl Receipt {
    /// Snapshots the cart. The cart itself is left untouched.
    pub fn from_cart(cart: &Cart, issued_at: NaiveDateTime) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| ReceiptLine {
                name: item.name().to_string(),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                line_total: item.line_total(),
            })
            .collect();

        Receipt {
            issued_at,
            lines,
            totals: cart.totals(),
        }
    }

    /// `receipt_<YYYYMMDD_HHMMSS>.<ext>`
    pub fn file_name(&self, format: ReceiptFormat) -> String {
        format!(
            "receipt_{}.{}",
            self.issued_at.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }

    /// Renders the CSV document.
    pub fn to_csv(&self) -> AppResult<Vec<u8>> {
        let mut items = csv_writer(Vec::new());
        items.write_record(["Item", "Qty", "Price", "Total"])?;
        for line in &self.lines {
            items.write_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.line_total.to_string(),
            ])?;
        }

        // An empty csv record is written as `""`; the separator is a bare CRLF
        let mut out = finish(items)?;
        out.extend_from_slice(b"\r\n");

        let t = &self.totals;
        let mut summary = csv_writer(out);
        for (label, value) in [
            ("Subtotal", t.subtotal.to_string()),
            ("Discount %", t.discount_percent.format_one_decimal()),
            ("Discount Amount", t.discount_amount.to_string()),
            ("Tax %", t.tax_percent.format_one_decimal()),
            ("Tax Amount", t.tax_amount.to_string()),
            ("Total Due", t.total_due.to_string()),
        ] {
            summary.write_record([label, value.as_str()])?;
        }
        finish(summary)
    }

    /// Renders the JSON document.
    pub fn to_json(&self) -> AppResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Renders the receipt in the requested format.
    pub fn render(&self, format: ReceiptFormat) -> AppResult<Vec<u8>> {
        match format {
            ReceiptFormat::Csv => self.to_csv(),
            ReceiptFormat::Json => self.to_json(),
        }
    }
}

fn csv_writer(buf: Vec<u8>) -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(buf)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> AppResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| AppError::Csv(csv::Error::from(e.into_error())))
}

/// Writes `receipt` into `dir`, creating the directory if needed.
///
/// A receipt issued in the same second as an earlier one replaces it.
///
/// ## Returns
/// The path of the written file.
pub fn save_receipt(receipt: &Receipt, dir: &Path, format: ReceiptFormat) -> AppResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| AppError::io("create directory", dir, e))?;

    let path = dir.join(receipt.file_name(format));
    let contents = receipt.render(format)?;
    fs::write(&path, contents).map_err(|e| AppError::io("write receipt", &path, e))?;

    info!(
        path = %path.display(),
        lines = receipt.lines.len(),
        total_due = %receipt.totals.total_due,
        "receipt saved"
    );
    Ok(path)
}
