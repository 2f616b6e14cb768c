//! Bank statement to CSV CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- statement.pdf transactions.csv
//! cargo run -- statement.pdf > transactions.csv
//! cargo run -- --input-format text extracted.txt transactions.csv
//! cargo run -- --strategy async --worker-threads 2 statement.pdf transactions.csv
//! ```
//!
//! Set `RUST_LOG=info` to see extraction and conversion progress.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input not found, extraction failed, output not writable, etc.)
//! - 2: Invalid command-line arguments

use statement_csv::cli;
use statement_csv::strategy;
use statement_csv::types::{ConversionSummary, StatementError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

fn run(args: &cli::CliArgs) -> Result<ConversionSummary, StatementError> {
    let config = if matches!(args.strategy, cli::StrategyType::Async) {
        Some(args.to_async_config())
    } else {
        None
    };
    let extractor = args.resolved_input_format().extractor();
    let strategy = strategy::create_strategy(args.strategy.clone(), config, extractor);

    match &args.output_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| StatementError::IoError {
                message: format!("Failed to create '{}': {}", path.display(), e),
            })?;
            let mut output = BufWriter::new(file);
            let summary = strategy.process(&args.input_file, &mut output)?;
            output.flush()?;
            log::info!("CSV file has been successfully created at: {}", path.display());
            Ok(summary)
        }
        None => {
            let mut output = std::io::stdout().lock();
            strategy.process(&args.input_file, &mut output)
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let args = cli::parse_args();

    match run(&args) {
        Ok(summary) => log::info!(
            "Wrote {} records from {} lines (total credit {})",
            summary.records_written,
            summary.lines_read,
            summary.total_credit
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
