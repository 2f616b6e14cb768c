//! Conversion engine
//!
//! Drives a [`RecordAccumulator`] over the full statement text and hands every
//! finalized record to a [`RecordSink`]. The pass is synchronous and runs to
//! completion once it has the text; the strategies take care of getting the
//! text there.

use crate::core::accumulator::RecordAccumulator;
use crate::core::traits::RecordSink;
use crate::types::{ConversionSummary, StatementError};

/// Split extracted text into lines on `\n` or `\r\n`
///
/// A trailing line break yields a final empty line, mirroring a plain
/// regex split of the text.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Convert statement text into records written to `sink`
///
/// The sink is opened before the first line is read, so it always sees
/// `begin` even when no record survives.
pub fn convert_text<S>(text: &str, sink: &mut S) -> Result<ConversionSummary, StatementError>
where
    S: RecordSink + ?Sized,
{
    convert_lines(split_lines(text), sink)
}

/// Convert an ordered sequence of lines into records written to `sink`
pub fn convert_lines<'a, I, S>(lines: I, sink: &mut S) -> Result<ConversionSummary, StatementError>
where
    I: IntoIterator<Item = &'a str>,
    S: RecordSink + ?Sized,
{
    let mut summary = ConversionSummary::default();
    let mut accumulator = RecordAccumulator::new();

    sink.begin()?;

    for line in lines {
        summary.lines_read += 1;
        if let Some(record) = accumulator.push_line(line) {
            sink.emit(&record)?;
            summary.record_written(&record);
        }
    }

    if let Some(record) = accumulator.finalize() {
        sink.emit(&record)?;
        summary.record_written(&record);
    }

    sink.finish()?;

    log::debug!(
        "Converted {} lines into {} records",
        summary.lines_read,
        summary.records_written
    );

    Ok(summary)
}
