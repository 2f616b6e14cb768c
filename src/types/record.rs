//! Record types for the statement converter
//!
//! This module defines the finalized transaction record handed to the CSV
//! emitter and the summary returned once a whole statement has been converted.

use rust_decimal::Decimal;

/// A finalized transaction row reconstructed from statement text
///
/// Only complete records are ever built: the accumulator checks that the date,
/// document code, credit amount and detail were all captured before creating one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction date exactly as printed, `DD/MM/YYYY`
    pub date: String,

    /// Dotted numeric document code, e.g. `100.1`
    pub code: String,

    /// Credit amount with the thousands separators removed, digits only
    pub amount: String,

    /// Free-text detail joined from one or more physical lines, trimmed
    pub detail: String,
}

/// Outcome of a single conversion pass
///
/// Informational only; nothing in here influences the CSV that was written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
    /// Number of text lines fed to the accumulator
    pub lines_read: usize,

    /// Number of record rows written after the header
    pub records_written: usize,

    /// Sum of all written credit amounts
    pub total_credit: Decimal,
}

impl ConversionSummary {
    /// Account for one written record
    ///
    /// Amounts too large for a `Decimal`, or that would overflow the running
    /// total, still count as written rows but are left out of the total.
    pub fn record_written(&mut self, record: &TransactionRecord) {
        self.records_written += 1;
        let amount = match record.amount.parse::<Decimal>() {
            Ok(amount) => amount,
            Err(e) => {
                log::debug!("Amount '{}' left out of total: {}", record.amount, e);
                return;
            }
        };

        match self.total_credit.checked_add(amount) {
            Some(total) => self.total_credit = total,
            None => log::debug!("Amount '{}' left out of total: overflow", record.amount),
        }
    }
}
