//! Error types for the data-loader crate.
//!
//! Only failures that make the whole file unusable surface as errors.
//! Problems confined to a single row are logged and the row is skipped.

use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("The file '{path}' was not found")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader failed on headers or framing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column the catalog relies on is absent from the header row
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Row couldn't be parsed into a title record
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl DataLoadError {
    /// True when the source file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            DataLoadError::FileNotFound { .. } => true,
            DataLoadError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
