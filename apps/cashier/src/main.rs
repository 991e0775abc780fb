//! # Till Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Run the menu loop on stdin/stdout
//!
//! Any error reaching this point is unrecoverable (e.g. the receipts
//! directory cannot be written). It is printed and the process exits with a
//! failure status.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match till_cashier::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
