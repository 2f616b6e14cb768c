//! Error types for the statement converter
//!
//! Only the boundary collaborators (file reading, text extraction, output
//! writing, async runtime) produce errors. The line-classification core never
//! fails: incomplete or malformed records are dropped without a diagnostic.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Extraction Errors**: The PDF could not be turned into text
//! - **CSV Errors**: The output writer rejected a row or could not flush
//! - **Runtime Errors**: The async runtime could not be built or a task failed

use thiserror::Error;

/// Main error type for the statement converter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatementError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Text could not be extracted from the source document
    #[error("Failed to extract text from '{path}': {message}")]
    ExtractionError {
        /// The document that failed
        path: String,
        /// Description reported by the extractor
        message: String,
    },

    /// CSV output could not be written
    #[error("CSV write error: {message}")]
    CsvError {
        /// Description of the writer failure
        message: String,
    },

    /// Async runtime failure
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

// Conversion from io::Error to StatementError
impl From<std::io::Error> for StatementError {
    fn from(error: std::io::Error) -> Self {
        StatementError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to StatementError
impl From<csv::Error> for StatementError {
    fn from(error: csv::Error) -> Self {
        StatementError::CsvError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StatementError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        StatementError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an ExtractionError
    pub fn extraction(path: &std::path::Path, message: impl ToString) -> Self {
        StatementError::ExtractionError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a RuntimeError
    pub fn runtime(message: impl ToString) -> Self {
        StatementError::RuntimeError {
            message: message.to_string(),
        }
    }

    /// Map an I/O error raised while reading `path`
    ///
    /// A missing file becomes `FileNotFound`, everything else an `IoError`
    /// that names the path.
    pub fn from_read(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            StatementError::IoError {
                message: format!("Failed to read '{}': {}", path.display(), error),
            }
        }
    }
}
