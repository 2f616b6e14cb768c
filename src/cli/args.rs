use crate::io::InputFormat;
use crate::strategy::AsyncConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert a bank statement PDF into a CSV of credit transactions
#[derive(Parser, Debug)]
#[command(name = "statement-csv")]
#[command(about = "Convert a bank statement PDF into a CSV of transactions", long_about = None)]
pub struct CliArgs {
    /// Input statement path
    #[arg(value_name = "INPUT", help = "Path to the statement PDF (or extracted text)")]
    pub input_file: PathBuf,

    /// Output CSV path; stdout when omitted
    #[arg(value_name = "OUTPUT", help = "Path of the CSV file to create (default: stdout)")]
    pub output_file: Option<PathBuf>,

    /// How to read the input file
    #[arg(
        long = "input-format",
        value_name = "FORMAT",
        help = "Input format: 'pdf' or 'text' (default: inferred from the file extension)"
    )]
    pub input_format: Option<InputFormat>,

    /// I/O strategy to use for reading the input
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "I/O strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of async runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,
}

/// Available I/O strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Input format from `--input-format`, or inferred from the input extension
    pub fn resolved_input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| InputFormat::from_path(&self.input_file))
    }

    /// Create an AsyncConfig from CLI arguments
    pub fn to_async_config(&self) -> AsyncConfig {
        match self.worker_threads {
            Some(worker_threads) => AsyncConfig::new(worker_threads),
            None => AsyncConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "in.pdf"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "in.pdf"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "in.pdf"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[rstest]
    #[case::input_only(&["program", "in.pdf"], None)]
    #[case::input_and_output(&["program", "in.pdf", "out.csv"], Some("out.csv"))]
    fn test_output_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("in.pdf"));
        assert_eq!(parsed.output_file, expected.map(PathBuf::from));
    }

    #[rstest]
    #[case::inferred_pdf(&["program", "statement.pdf"], InputFormat::Pdf)]
    #[case::inferred_text(&["program", "statement.txt"], InputFormat::Text)]
    #[case::explicit_text(&["program", "--input-format", "text", "statement.pdf"], InputFormat::Text)]
    #[case::explicit_pdf(&["program", "--input-format", "pdf", "dump.txt"], InputFormat::Pdf)]
    fn test_input_format_resolution(#[case] args: &[&str], #[case] expected: InputFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.resolved_input_format(), expected);
    }

    #[rstest]
    #[case::default(&["program", "in.pdf"], num_cpus::get())]
    #[case::custom(&["program", "--worker-threads", "4", "in.pdf"], 4)]
    #[case::zero_falls_back(&["program", "--worker-threads", "0", "in.pdf"], num_cpus::get())]
    fn test_async_config_conversion(#[case] args: &[&str], #[case] expected_threads: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_async_config().worker_threads, expected_threads);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "in.pdf"])]
    #[case::invalid_format(&["program", "--input-format", "docx", "in.pdf"])]
    #[case::extra_positional(&["program", "in.pdf", "out.csv", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
