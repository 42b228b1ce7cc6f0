//! Error types for the foundation crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading numeric colour tables.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, got {got}")]
    Ragged {
        line: usize,
        expected: usize,
        got: usize,
    },
}

/// Result type alias for foundation operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
