//! Line classifier
//!
//! Pure predicates that recognise the three field shapes found in extracted
//! statement text: the transaction date, the dotted document code and the
//! credit amount.
//!
//! The date and code matchers look at a trimmed line. The amount matcher does
//! not: in the statement layout an amount line is the only numeric line that
//! starts with exactly one space, so it must see the raw line.

use regex::Regex;
use std::sync::LazyLock;

/// `DD/MM/YYYY`
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

/// `<digits>.<digits>`
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid regex"));

/// One leading space, then a dot-grouped integer such as ` 1.234.567`
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ [0-9]{1,3}(?:\.[0-9]{3})*$").expect("valid regex"));

/// Returns true if the trimmed line is a `DD/MM/YYYY` date
pub fn is_date(line: &str) -> bool {
    DATE_RE.is_match(line.trim())
}

/// Returns true if the trimmed line is a dotted numeric transaction code
pub fn is_transaction_code(line: &str) -> bool {
    CODE_RE.is_match(line.trim())
}

/// Returns true if the untrimmed line is a single space followed by a
/// thousands-grouped integer
pub fn is_amount(raw_line: &str) -> bool {
    AMOUNT_RE.is_match(raw_line)
}

/// Extract the digits of an amount line
///
/// Takes the first space-separated token of the trimmed line and drops every
/// `.` separator, so ` 1.234.567` becomes `1234567`. Returns `None` when no
/// digits remain.
pub fn extract_amount(raw_line: &str) -> Option<String> {
    let token = raw_line.trim().split(' ').next()?;
    let digits: String = token.chars().filter(|c| *c != '.').collect();

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
