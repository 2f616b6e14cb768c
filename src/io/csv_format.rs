//! CSV output for transaction records
//!
//! Every output starts with the fixed header line
//! `TNX Date,Doc No,Credit,Transactions in detail`, followed by one line per
//! record in the form `date,code,amount,"detail"`.
//!
//! Only the detail is wrapped in double quotes. Quotes and commas inside the
//! detail are written as-is; downstream consumers of these files expect the
//! raw text, so the writer runs with quoting disabled and adds the quotes
//! itself.

use crate::core::RecordSink;
use crate::types::{StatementError, TransactionRecord};
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;

/// Column names of the output file
pub const CSV_HEADER: [&str; 4] = ["TNX Date", "Doc No", "Credit", "Transactions in detail"];

/// One output row as handed to the CSV writer
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    code: &'a str,
    amount: &'a str,
    detail: String,
}

impl<'a> From<&'a TransactionRecord> for CsvRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        CsvRow {
            date: &record.date,
            code: &record.code,
            amount: &record.amount,
            detail: format!("\"{}\"", record.detail),
        }
    }
}

/// CSV emitter writing records to any `Write` destination
///
/// # Examples
///
/// ```
/// use statement_csv::core::convert_text;
/// use statement_csv::io::CsvEmitter;
///
/// let mut output = Vec::new();
/// let mut emitter = CsvEmitter::new(&mut output);
/// convert_text("01/02/2023\n100.1\n 1.500\nSalary payment\n", &mut emitter).unwrap();
/// drop(emitter);
///
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "TNX Date,Doc No,Credit,Transactions in detail\n01/02/2023,100.1,1500,\"Salary payment\"\n"
/// );
/// ```
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvEmitter<W> {
    /// Create an emitter over `output`
    pub fn new(output: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(output);

        Self { writer }
    }
}

impl<W: Write> RecordSink for CsvEmitter<W> {
    fn begin(&mut self) -> Result<(), StatementError> {
        self.writer.write_record(CSV_HEADER)?;
        Ok(())
    }

    fn emit(&mut self, record: &TransactionRecord) -> Result<(), StatementError> {
        self.writer.serialize(CsvRow::from(record))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), StatementError> {
        self.writer.flush()?;
        Ok(())
    }
}
