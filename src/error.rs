use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and interpreting series input files.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Malformed date '{input}', expected MM/DD/YYYY")]
    MalformedDate { input: String },

    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("{}:{line}: expected {expected} columns but found {found}", path.display())]
    SchemaMismatch {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: column '{column}' is not a number: '{input}'", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        input: String,
    },

    #[error("Invalid color '{input}'")]
    InvalidColor { input: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
