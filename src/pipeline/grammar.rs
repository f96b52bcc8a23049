//! Compiled line grammars for the leave report dialect.
//!
//! The report is line-oriented with three recognized line shapes:
//!
//! ```text
//! header:  <2-4 upper alnum> <2-4 upper alnum>  <PP[alnum]+>  <letters/spaces>  Annual <int>
//! values:  Annual <int> <dec> <dec> <dec> <dec> <dec>
//! sick:    Sick Leave <int> <dec> <dec>
//! ```
//!
//! Each grammar is compiled once into a static [`Regex`]. Lines are matched
//! after trimming; anything that matches none of the grammars is noise and
//! is skipped by the extractor.

use once_cell::sync::Lazy;
use regex::Regex;

/// Header grammar: department/position pair, employee number, surname,
/// then the literal `Annual` and an integer.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z0-9]{2,4}\s+[A-Z0-9]{2,4})\s+(PP[A-Z0-9]+)\s+([A-Za-z\s]+?)\s+Annual\s+\d+")
        .unwrap()
});

/// Values grammar: literal `Annual`, an integer, then five decimal figures.
/// Balances can go negative when leave is taken in advance, so each figure
/// accepts an optional leading sign.
static VALUES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Annual\s+\d+\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)")
        .unwrap()
});

/// Sick grammar: literal `Sick Leave`, an integer, then two decimal figures.
static SICK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Sick Leave\s+\d+\s+(-?[\d.]+)\s+(-?[\d.]+)").unwrap());

/// Captures from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderCapture {
    /// The employee number, e.g. "PPA021".
    pub employee_number: String,
    /// The surname run, trimmed, e.g. "Heshe L".
    pub surname: String,
}

/// Captures from a values line.
///
/// Group 4 of the grammar is matched but deliberately unbound: the slot has
/// no known consumer in this report dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValuesCapture {
    /// Annual leave balance (group 1).
    pub annual_leave: String,
    /// Accrued annual leave (group 2).
    pub acc_annual: String,
    /// Maternity leave balance (group 3).
    pub maternity_leave: String,
    /// Lost leave balance (group 5).
    pub lost_leave: String,
}

/// Matches a trimmed line against the header grammar.
pub(crate) fn match_header(line: &str) -> Option<HeaderCapture> {
    let caps = HEADER_RE.captures(line)?;
    Some(HeaderCapture {
        employee_number: caps[2].to_string(),
        surname: caps[3].trim().to_string(),
    })
}

/// Matches a trimmed line against the values grammar.
pub(crate) fn match_values(line: &str) -> Option<ValuesCapture> {
    let caps = VALUES_RE.captures(line)?;
    Some(ValuesCapture {
        annual_leave: caps[1].to_string(),
        acc_annual: caps[2].to_string(),
        maternity_leave: caps[3].to_string(),
        lost_leave: caps[5].to_string(),
    })
}

/// Matches a trimmed line against the sick grammar, returning the sick
/// leave balance (group 1).
///
/// Callers gate on the `Sick Leave` prefix first; a line with the prefix
/// but malformed figures is not a sick line.
pub(crate) fn match_sick(line: &str) -> Option<String> {
    let caps = SICK_RE.captures(line)?;
    Some(caps[1].to_string())
}
