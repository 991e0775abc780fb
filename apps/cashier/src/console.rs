//! # Console
//!
//! Line-oriented prompting over any reader/writer pair.
//!
//! Every read returns `None` once input is exhausted, so the session can
//! end cleanly when stdin is closed mid-prompt.
//!
//! ## Re-prompt Rules
//! ```text
//! prompt_amount / prompt_percent        prompt_integer
//! ──────────────────────────────        ──────────────
//! "abc"  → "Enter a valid number."      "abc" → "Enter an integer."
//! "-1"   → "Must be non-negative."      "-1"  → accepted
//! "3.5"  → accepted                     "3.5" → "Enter an integer."
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use till_core::validation::validate_price;
use till_core::{Money, Percent, ValidationError};

use crate::error::AppResult;
use crate::labels;

/// Prompting wrapper around an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Everything written so far (useful when `W` is a `Vec<u8>`).
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line, trimmed.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until a non-negative amount is entered.
    pub fn prompt_amount(&mut self, prompt: &str) -> AppResult<Option<Money>> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match Money::parse(&raw).and_then(|m| validate_price(m).map(|()| m)) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) => self.warn_invalid_number(&err)?,
            }
        }
    }

    /// Asks until a non-negative percentage is entered.
    pub fn prompt_percent(&mut self, prompt: &str) -> AppResult<Option<Percent>> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match Percent::parse(&raw) {
                Ok(percent) => return Ok(Some(percent)),
                Err(err) => self.warn_invalid_number(&err)?,
            }
        }
    }

    /// Asks until an integer is entered. Any sign is accepted.
    pub fn prompt_integer(&mut self, prompt: &str) -> AppResult<Option<i64>> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match raw.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(labels::WARN_NOT_AN_INTEGER)?,
            }
        }
    }

    fn warn_invalid_number(&mut self, err: &ValidationError) -> AppResult<()> {
        match err {
            ValidationError::InvalidFormat { .. } => self.say(labels::WARN_NOT_A_NUMBER),
            ValidationError::MustBeNonNegative { .. } => self.say(labels::WARN_NEGATIVE),
            other => self.say(format!("⚠️  {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_read_line_trims_and_detects_eof() {
        let mut c = console("  hello  \n");
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.read_line("> ").unwrap(), None);
        assert_eq!(written(&c), "> > ");
    }

    #[test]
    fn test_prompt_amount_reprompts() {
        let mut c = console("abc\n-1\n3.50\n");
        let amount = c.prompt_amount("price: ").unwrap();

        assert_eq!(amount, Some(Money::from_cents(350)));
        let out = written(&c);
        assert!(out.contains(labels::WARN_NOT_A_NUMBER));
        assert!(out.contains(labels::WARN_NEGATIVE));
        assert_eq!(out.matches("price: ").count(), 3);
    }

    #[test]
    fn test_prompt_percent_reprompts() {
        let mut c = console("ten\n-5\n12.5\n");
        let percent = c.prompt_percent("pct: ").unwrap();

        assert_eq!(percent, Some(Percent::from_bps(1250)));
        let out = written(&c);
        assert!(out.contains(labels::WARN_NOT_A_NUMBER));
        assert!(out.contains(labels::WARN_NEGATIVE));
    }

    #[test]
    fn test_prompt_integer_accepts_negative() {
        let mut c = console("1.5\nx\n-3\n");
        assert_eq!(c.prompt_integer("qty: ").unwrap(), Some(-3));
        assert_eq!(written(&c).matches(labels::WARN_NOT_AN_INTEGER).count(), 2);
    }

    #[test]
    fn test_prompts_return_none_at_eof() {
        assert_eq!(console("abc\n").prompt_amount("p: ").unwrap(), None);
        assert_eq!(console("").prompt_percent("p: ").unwrap(), None);
        assert_eq!(console("").prompt_integer("p: ").unwrap(), None);
    }
}
