//! # App Error Type
//!
//! Faults the session cannot recover from.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Till                                   │
//! │                                                                         │
//! │  Recoverable (printed inline, loop continues)                          │
//! │  ├── "abc" typed as a price ─────────► re-prompt                       │
//! │  ├── negative price / percent ───────► re-prompt                       │
//! │  ├── empty name, quantity ≤ 0 ───────► abort the add                   │
//! │  ├── item not found ─────────────────► warning                         │
//! │  └── checkout on empty cart ─────────► warning                         │
//! │                                                                         │
//! │  Unrecoverable (AppError, session ends)                                │
//! │  ├── receipts directory or file cannot be written                      │
//! │  ├── console cannot be read or written                                 │
//! │  └── invalid configuration at startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the session.
#[derive(Debug, Error)]
pub enum AppError {
    /// File system failure while exporting a receipt.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    /// A JSON receipt could not be serialized.
    #[error("Failed to serialize receipt: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A CSV receipt could not be rendered.
    #[error("Failed to write CSV receipt: {0}")]
    Csv(#[from] csv::Error),

    /// An environment variable holds an unusable value.
    #[error("Invalid configuration {key}={value}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl AppError {
    /// Wraps an I/O error with the path and the action being attempted.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
