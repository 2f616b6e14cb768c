//! Bank Statement to CSV Library
//! # Overview
//!
//! This library reconstructs transaction rows from the text of a bank
//! statement PDF and writes them as CSV.
//!
//! PDF text extraction flattens the statement table into a stream of short
//! lines, scattering each row's fields over several of them. The converter
//! walks that stream once, recognising date, document code and amount lines,
//! and stitches the remaining lines back together as the transaction detail.
//!
//! # Architecture
//!
//! - [`types`] - Records, conversion summary and error types
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Conversion logic:
//!   - [`core::classifier`] - Line patterns (date, code, amount)
//!   - [`core::accumulator`] - Record state machine
//!   - [`core::engine`] - Drives the state machine over a whole statement
//! - [`io`] - Text extraction and CSV output
//! - [`strategy`] - Sync and async end-to-end pipelines
//!
//! # Output
//!
//! ```text
//! TNX Date,Doc No,Credit,Transactions in detail
//! 01/02/2023,100.1,1500,"Salary payment"
//! ```
//!
//! Records missing any of date, code, amount or detail are left out.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::core::{convert_text, RecordAccumulator, RecordSink};
pub use io::CsvEmitter;
pub use types::{ConversionSummary, StatementError, TransactionRecord};
