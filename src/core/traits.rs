//! Core traits for the conversion pipeline
//!
//! The engine hands finalized records to a `RecordSink` so the same
//! accumulation pass can feed the CSV emitter or an in-memory collection.

use crate::types::{StatementError, TransactionRecord};

/// Destination for finalized transaction records
pub trait RecordSink {
    /// Write whatever must precede the first record
    fn begin(&mut self) -> Result<(), StatementError>;

    /// Accept one finalized record, in statement order
    fn emit(&mut self, record: &TransactionRecord) -> Result<(), StatementError>;

    /// Signal that no more records follow
    fn finish(&mut self) -> Result<(), StatementError>;
}

impl RecordSink for Vec<TransactionRecord> {
    fn begin(&mut self) -> Result<(), StatementError> {
        Ok(())
    }

    fn emit(&mut self, record: &TransactionRecord) -> Result<(), StatementError> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), StatementError> {
        Ok(())
    }
}
