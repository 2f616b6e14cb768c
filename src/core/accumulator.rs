//! Record accumulator
//!
//! Reassembles transaction records from the flat line stream produced by PDF
//! text extraction. A date line opens a record; the first code line after it
//! sets the document code, the first amount line after that sets the credit,
//! and every further line until the next date is appended to the detail.
//!
//! # States
//!
//! ```text
//!            date                code              amount            any line
//!   Idle ──────────▶ Empty ──────────▶ HasCode ──────────▶ HasAmount ──────────▶ InDetail ─┐
//!                      ▲                                                            ▲     │
//!                      └──────────────── date (finalize previous) ──────────────────┘     │
//!                                                                                   └─────┘
//! ```
//!
//! A date line finalizes the open record from any state. Lines that do not
//! advance the current state are discarded.
//!
//! # Finalization
//!
//! A record is emitted only when it is still valid and its date, code, amount
//! and detail are all non-empty. Anything else is dropped silently; a partially
//! legible statement simply yields fewer rows.

use crate::core::classifier::{extract_amount, is_amount, is_date, is_transaction_code};
use crate::types::TransactionRecord;

/// Position of the accumulator inside the record being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordState {
    /// No date has opened a record yet, or the last one was just flushed
    #[default]
    Idle,

    /// A date opened the record; waiting for the document code
    Empty,

    /// Code captured; waiting for the amount line
    HasCode,

    /// Amount captured; the next line starts the detail
    HasAmount,

    /// At least one detail line has been appended
    InDetail,
}

/// Working fields of the record currently being assembled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PendingRecord {
    date: String,
    code: String,
    amount: String,
    detail: String,
    valid: bool,
}

impl PendingRecord {
    fn dated(date: &str) -> Self {
        Self {
            date: date.to_string(),
            valid: true,
            ..Self::default()
        }
    }

    /// Store an extracted amount; a line that yields no digits poisons the record
    fn accept_amount(&mut self, amount: Option<String>) -> RecordState {
        match amount {
            Some(amount) => {
                self.amount = amount;
                RecordState::HasAmount
            }
            None => {
                self.valid = false;
                RecordState::HasCode
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.valid
            && !self.date.is_empty()
            && !self.code.is_empty()
            && !self.amount.is_empty()
            && !self.detail.is_empty()
    }

    fn into_record(self) -> Option<TransactionRecord> {
        if !self.is_complete() {
            return None;
        }

        Some(TransactionRecord {
            detail: self.detail.trim().to_string(),
            date: self.date,
            code: self.code,
            amount: self.amount,
        })
    }
}

/// Apply one non-date line to the open record and return the next state
fn step(state: RecordState, record: &mut PendingRecord, raw_line: &str) -> RecordState {
    let line = raw_line.trim();

    match state {
        RecordState::Idle => RecordState::Idle,
        RecordState::Empty => {
            if is_transaction_code(line) {
                record.code = line.to_string();
                RecordState::HasCode
            } else {
                RecordState::Empty
            }
        }
        RecordState::HasCode if is_amount(raw_line) => {
            record.accept_amount(extract_amount(raw_line))
        }
        RecordState::HasCode => RecordState::HasCode,
        RecordState::HasAmount | RecordState::InDetail => {
            record.detail.push_str(line);
            record.detail.push(' ');
            RecordState::InDetail
        }
    }
}

/// Line-by-line state machine that turns statement text into records
///
/// # Examples
///
/// ```
/// use statement_csv::core::RecordAccumulator;
///
/// let mut accumulator = RecordAccumulator::new();
/// for line in ["01/02/2023", "100.1", " 1.500", "Salary payment"] {
///     assert!(accumulator.push_line(line).is_none());
/// }
///
/// let record = accumulator.finalize().unwrap();
/// assert_eq!(record.amount, "1500");
/// assert_eq!(record.detail, "Salary payment");
/// ```
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    state: RecordState,
    record: PendingRecord,
}

impl RecordAccumulator {
    /// Create an accumulator with no open record
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the record being assembled
    pub fn state(&self) -> RecordState {
        self.state
    }

    /// Feed the next line of statement text
    ///
    /// Returns the previous record when this line is a date that closes it and
    /// that record is complete.
    pub fn push_line(&mut self, raw_line: &str) -> Option<TransactionRecord> {
        if is_date(raw_line) {
            let finished = self.finalize();
            self.record = PendingRecord::dated(raw_line.trim());
            self.state = RecordState::Empty;
            return finished;
        }

        self.state = step(self.state, &mut self.record, raw_line);
        None
    }

    /// Close the open record and reset to `Idle`
    ///
    /// Returns the record if it was complete. Must be called once after the
    /// last line to flush the final record.
    pub fn finalize(&mut self) -> Option<TransactionRecord> {
        let pending = std::mem::take(&mut self.record);
        self.state = RecordState::Idle;
        pending.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Feed all lines, flush, and collect emitted records
    fn run(lines: &[&str]) -> Vec<TransactionRecord> {
        let mut accumulator = RecordAccumulator::new();
        let mut records: Vec<TransactionRecord> =
            lines.iter().filter_map(|line| accumulator.push_line(line)).collect();
        records.extend(accumulator.finalize());
        records
    }

    fn record(date: &str, code: &str, amount: &str, detail: &str) -> TransactionRecord {
        TransactionRecord {
            date: date.to_string(),
            code: code.to_string(),
            amount: amount.to_string(),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_single_complete_record() {
        let records = run(&["01/02/2023", "100.1", " 1.500", "Salary payment"]);
        assert_eq!(records, vec![record("01/02/2023", "100.1", "1500", "Salary payment")]);
    }

    #[test]
    fn test_detail_joined_across_lines() {
        let records = run(&["01/02/2023", "100.1", " 12", "Payment", "for", "invoice"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].detail, "Payment for invoice");
        assert_eq!(records[0].amount, "12");
    }

    #[test]
    fn test_detail_lines_are_trimmed_before_joining() {
        let records = run(&["01/02/2023", "100.1", " 1.500", "  Wire  ", "\tfrom ACME  "]);
        assert_eq!(records[0].detail, "Wire from ACME");
    }

    #[test]
    fn test_two_records_in_order() {
        let records = run(&[
            "01/02/2023",
            "100.1",
            " 1.500",
            "Salary payment",
            "02/02/2023",
            "100.2",
            " 2.000.000",
            "Bonus",
        ]);
        assert_eq!(
            records,
            vec![
                record("01/02/2023", "100.1", "1500", "Salary payment"),
                record("02/02/2023", "100.2", "2000000", "Bonus"),
            ]
        );
    }

    #[test]
    fn test_date_line_emits_previous_record() {
        let mut accumulator = RecordAccumulator::new();
        for line in ["01/02/2023", "100.1", " 1.500", "Salary payment"] {
            assert_eq!(accumulator.push_line(line), None);
        }

        let emitted = accumulator.push_line("02/02/2023");
        assert_eq!(
            emitted,
            Some(record("01/02/2023", "100.1", "1500", "Salary payment"))
        );
        assert_eq!(accumulator.state(), RecordState::Empty);
    }

    #[test]
    fn test_date_without_fields_is_dropped() {
        let records = run(&[
            "01/02/2023",
            "02/02/2023",
            "100.2",
            " 1.500",
            "Transfer",
        ]);
        assert_eq!(records, vec![record("02/02/2023", "100.2", "1500", "Transfer")]);
    }

    #[rstest]
    #[case::only_date(&["01/02/2023"])]
    #[case::missing_code(&["01/02/2023", " 1.500", "Salary payment"])]
    #[case::missing_amount(&["01/02/2023", "100.1", "Salary payment"])]
    #[case::missing_detail(&["01/02/2023", "100.1", " 1.500"])]
    #[case::missing_date(&["100.1", " 1.500", "Salary payment"])]
    #[case::code_and_detail_only(&["01/02/2023", "100.1", "Salary", "payment"])]
    #[case::amount_before_code(&["01/02/2023", " 1.500", "100.1", "Salary payment"])]
    #[case::no_lines(&[])]
    fn test_incomplete_records_are_dropped(#[case] lines: &[&str]) {
        assert!(run(lines).is_empty());
    }

    #[test]
    fn test_lines_before_first_date_are_ignored() {
        let records = run(&[
            "ACCOUNT STATEMENT",
            "999.9",
            " 7.000",
            "Header noise",
            "01/02/2023",
            "100.1",
            " 1.500",
            "Salary payment",
        ]);
        assert_eq!(records, vec![record("01/02/2023", "100.1", "1500", "Salary payment")]);
    }

    #[test]
    fn test_first_code_wins() {
        let records = run(&["01/02/2023", "100.1", "200.2", " 1.500", "Salary payment"]);
        assert_eq!(records[0].code, "100.1");
    }

    #[test]
    fn test_first_amount_wins_and_later_numbers_join_detail() {
        let records = run(&["01/02/2023", "100.1", " 1.500", " 2.500", "300.3", "Refund"]);
        assert_eq!(records[0].amount, "1500");
        assert_eq!(records[0].detail, "2.500 300.3 Refund");
    }

    #[test]
    fn test_amount_shaped_line_can_become_code() {
        // " 1.500" trims to a dotted code, and the code check runs first
        let records = run(&["01/02/2023", " 1.500", " 12", "Fee"]);
        assert_eq!(records, vec![record("01/02/2023", "1.500", "12", "Fee")]);
    }

    #[test]
    fn test_amount_requires_single_leading_space() {
        let records = run(&["01/02/2023", "100.1", "1.500", "  2.500", "Salary payment"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_date_with_surrounding_whitespace_is_trimmed() {
        let records = run(&["  01/02/2023  ", "100.1", " 1.500", "Salary payment"]);
        assert_eq!(records[0].date, "01/02/2023");
    }

    #[test]
    fn test_blank_detail_line_still_completes_record() {
        let records = run(&["01/02/2023", "100.1", " 1.500", ""]);
        assert_eq!(records, vec![record("01/02/2023", "100.1", "1500", "")]);
    }

    #[test]
    fn test_state_transitions() {
        let mut accumulator = RecordAccumulator::new();
        assert_eq!(accumulator.state(), RecordState::Idle);

        accumulator.push_line("100.1");
        assert_eq!(accumulator.state(), RecordState::Idle);

        accumulator.push_line("01/02/2023");
        assert_eq!(accumulator.state(), RecordState::Empty);

        accumulator.push_line("noise");
        assert_eq!(accumulator.state(), RecordState::Empty);

        accumulator.push_line("100.1");
        assert_eq!(accumulator.state(), RecordState::HasCode);

        accumulator.push_line(" 1.500");
        assert_eq!(accumulator.state(), RecordState::HasAmount);

        accumulator.push_line("Salary");
        assert_eq!(accumulator.state(), RecordState::InDetail);

        accumulator.push_line("payment");
        assert_eq!(accumulator.state(), RecordState::InDetail);

        assert!(accumulator.finalize().is_some());
        assert_eq!(accumulator.state(), RecordState::Idle);
    }

    #[test]
    fn test_finalize_resets_even_when_dropped() {
        let mut accumulator = RecordAccumulator::new();
        accumulator.push_line("01/02/2023");
        accumulator.push_line("100.1");

        assert_eq!(accumulator.finalize(), None);
        assert_eq!(accumulator.state(), RecordState::Idle);

        // A stray amount after the reset has nothing to attach to
        accumulator.push_line(" 1.500");
        accumulator.push_line("Salary payment");
        assert_eq!(accumulator.finalize(), None);
    }

    #[test]
    fn test_invalid_amount_poisons_record() {
        let mut record = PendingRecord::dated("01/02/2023");
        record.code = "100.1".to_string();

        let next = record.accept_amount(None);
        assert_eq!(next, RecordState::HasCode);
        assert!(!record.valid);

        let next = step(next, &mut record, " 1.500");
        let next = step(next, &mut record, "Salary payment");
        assert_eq!(next, RecordState::InDetail);
        assert_eq!(record.into_record(), None);
    }

    #[test]
    fn test_pending_record_completeness() {
        let mut record = PendingRecord::dated("01/02/2023");
        assert!(!record.is_complete());

        record.code = "100.1".to_string();
        record.amount = "1500".to_string();
        record.detail = "Salary payment ".to_string();
        assert!(record.is_complete());

        record.valid = false;
        assert!(!record.is_complete());
    }
}
