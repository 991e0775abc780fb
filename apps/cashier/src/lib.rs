//! # Till Cashier Library
//!
//! Core library for the Till console cashier.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! till_cashier/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Settings from TILL_* environment variables
//! ├── session.rs      ◄─── Menu loop and action dispatch
//! ├── console.rs      ◄─── Prompting with re-prompt on bad input
//! ├── menu.rs         ◄─── Menu choices
//! ├── labels.rs       ◄─── Bilingual console text
//! ├── receipt.rs      ◄─── CSV / JSON receipt export
//! └── error.rs        ◄─── Unrecoverable app errors
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod labels;
pub mod menu;
pub mod receipt;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CashierConfig;
use error::AppResult;
use session::Session;

/// Runs a cashier session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, till=info; override with RUST_LOG                  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then TILL_* environment variables                       │
/// │                                                                         │
/// │  3. Run Session ──────────────────────────────────────────────────────► │
/// │     • Menu loop until "0" or end of input                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = CashierConfig::from_env()?;
    info!(
        receipts_dir = %config.receipts_dir.display(),
        format = ?config.receipt_format,
        "configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart mutation
/// - `RUST_LOG=till_core=trace` - Trace the cart model only
/// - Default: warnings, plus info from the till crates
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till_cashier=info,till_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
