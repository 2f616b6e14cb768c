//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `record`: Finalized transaction records and the conversion summary
//! - `error`: Error types raised by the I/O boundary

pub mod error;
pub mod record;

pub use error::StatementError;
pub use record::{ConversionSummary, TransactionRecord};
