//! Record extraction from raw report text.
//!
//! The extractor scans one source's lines in order and emits an
//! [`EmployeeRecord`] for every header line that is immediately followed by
//! a matching values line, with an optional trailing sick line. It is a
//! best-effort, non-validating scanner: lines that match no grammar are
//! skipped silently and extraction never fails.
//!
//! The lookahead is implemented as an explicit state machine. Each
//! transition takes the current state and cursor and returns the next state,
//! the next cursor, and any record emitted, so extraction stays a pure
//! function of the line sequence with no implicit shared index. Re-running
//! over the same text yields the same records, and no state survives
//! between sources.

use crate::models::EmployeeRecord;

use super::grammar::{self, HeaderCapture, ValuesCapture};

/// Prefix gating the optional third line of a record.
const SICK_LINE_PREFIX: &str = "Sick Leave";

/// A header+values pair waiting on the optional sick line.
#[derive(Debug, Clone)]
struct PendingRecord {
    header: HeaderCapture,
    values: ValuesCapture,
}

impl PendingRecord {
    fn into_record(self, sick_leave: Option<String>) -> EmployeeRecord {
        EmployeeRecord {
            employee_number: self.header.employee_number,
            surname: self.header.surname,
            annual_leave: self.values.annual_leave,
            acc_annual: self.values.acc_annual,
            maternity_leave: self.values.maternity_leave,
            lost_leave: self.values.lost_leave,
            sick_leave,
        }
    }
}

/// Scanner state between line examinations.
#[derive(Debug, Clone)]
enum ScanState {
    /// Looking for a header line; everything else is noise.
    Scanning,
    /// Header matched; the next line must be a values line or the header
    /// is abandoned.
    ExpectValues(HeaderCapture),
    /// Header and values matched; peeking for an optional sick line.
    ExpectSick(PendingRecord),
}

/// Examines the line at `cursor` and performs one state transition.
///
/// Returns the next state, the next cursor position, and the record emitted
/// by this transition, if any. A transition that abandons or completes a
/// match without consuming the current line returns `cursor` unchanged so
/// the line is re-examined from [`ScanState::Scanning`].
fn step(
    state: ScanState,
    lines: &[&str],
    cursor: usize,
) -> (ScanState, usize, Option<EmployeeRecord>) {
    match state {
        ScanState::Scanning => match grammar::match_header(lines[cursor]) {
            Some(header) => (ScanState::ExpectValues(header), cursor + 1, None),
            None => (ScanState::Scanning, cursor + 1, None),
        },
        ScanState::ExpectValues(header) => match grammar::match_values(lines[cursor]) {
            Some(values) => (
                ScanState::ExpectSick(PendingRecord { header, values }),
                cursor + 1,
                None,
            ),
            // Abandon the header without emitting; the offending line is
            // re-examined (it may itself be a header).
            None => (ScanState::Scanning, cursor, None),
        },
        ScanState::ExpectSick(pending) => {
            let line = lines[cursor];
            if line.starts_with(SICK_LINE_PREFIX) {
                if let Some(sick) = grammar::match_sick(line) {
                    return (
                        ScanState::Scanning,
                        cursor + 1,
                        Some(pending.into_record(Some(sick))),
                    );
                }
            }
            // Peeked line is not a sick line: emit without sick leave and
            // leave the line for re-examination.
            (ScanState::Scanning, cursor, Some(pending.into_record(None)))
        }
    }
}

/// Extracts every employee record from one source's report text.
///
/// Lines are trimmed before matching. Records are returned in emission
/// order. At end of input a header with no values line emits nothing; a
/// completed header+values pair emits its record without a sick balance.
///
/// # Example
///
/// ```
/// use leave_engine::pipeline::extract_records;
///
/// let text = "MAN 25TH PPA021 Heshe L Annual 1\nAnnual 1 5.00 2.50 0.00 0.00 1.00";
/// let records = extract_records(text);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].employee_number, "PPA021");
/// assert_eq!(records[0].annual_leave, "5.00");
/// ```
pub fn extract_records(text: &str) -> Vec<EmployeeRecord> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut records = Vec::new();
    let mut state = ScanState::Scanning;
    let mut cursor = 0;

    while cursor < lines.len() {
        let (next_state, next_cursor, emitted) = step(state, &lines, cursor);
        state = next_state;
        cursor = next_cursor;
        if let Some(record) = emitted {
            records.push(record);
        }
    }

    // The sick line is optional, so a pair that was still peeking for one
    // when the input ended is complete. A bare header is not.
    if let ScanState::ExpectSick(pending) = state {
        records.push(pending.into_record(None));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "MAN 25TH PPA021 Heshe L Annual 1";
    const VALUES: &str = "Annual 1 5.00 2.50 0.00 0.00 1.00";
    const SICK: &str = "Sick Leave 1 3.00 0.50";

    fn join(lines: &[&str]) -> String {
        lines.join("\n")
    }

    #[test]
    fn test_header_and_values_emit_one_record() {
        let records = extract_records(&join(&[HEADER, VALUES]));
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.employee_number, "PPA021");
        assert_eq!(record.surname, "Heshe L");
        assert_eq!(record.annual_leave, "5.00");
        assert_eq!(record.acc_annual, "2.50");
        assert_eq!(record.maternity_leave, "0.00");
        assert_eq!(record.lost_leave, "1.00");
        assert_eq!(record.sick_leave, None);
    }

    #[test]
    fn test_sick_line_is_captured_when_present() {
        let records = extract_records(&join(&[HEADER, VALUES, SICK]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sick_leave.as_deref(), Some("3.00"));
    }

    #[test]
    fn test_header_without_values_emits_nothing() {
        let records = extract_records(&join(&[HEADER, "some unrelated line"]));
        assert!(records.is_empty());
    }

    #[test]
    fn test_header_alone_at_end_of_input_emits_nothing() {
        let records = extract_records(HEADER);
        assert!(records.is_empty());
    }

    #[test]
    fn test_abandoned_header_line_is_reexamined_as_header() {
        // The line that fails the values grammar is itself a header and
        // must start a fresh match.
        let second_header = "OPS 31ST PPB042 Jones Annual 4";
        let records = extract_records(&join(&[HEADER, second_header, VALUES]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_number, "PPB042");
        assert_eq!(records[0].surname, "Jones");
    }

    #[test]
    fn test_peeked_header_after_values_is_reexamined() {
        // No sick line between two records: the second header is peeked,
        // the first record emits, and the second still extracts.
        let second = [
            "OPS 31ST PPB042 Jones Annual 4",
            "Annual 4 1.00 0.50 0.00 0.00 0.00",
        ];
        let records = extract_records(&join(&[HEADER, VALUES, second[0], second[1]]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_number, "PPA021");
        assert_eq!(records[1].employee_number, "PPB042");
    }

    #[test]
    fn test_noise_and_blank_lines_are_skipped_silently() {
        let text = join(&[
            "Leave Report for period 2511",
            "",
            "   ",
            HEADER,
            VALUES,
            "--------",
            "Totals 12 34",
        ]);
        let records = extract_records(&text);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_sick_prefix_with_malformed_figures_is_not_consumed() {
        let records = extract_records(&join(&[HEADER, VALUES, "Sick Leave summary follows"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sick_leave, None);
    }

    #[test]
    fn test_lines_are_trimmed_before_matching() {
        let text = format!("  {}  \n\t{}\n   {}", HEADER, VALUES, SICK);
        let records = extract_records(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sick_leave.as_deref(), Some("3.00"));
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert!(extract_records("").is_empty());
    }

    #[test]
    fn test_extraction_is_restartable() {
        let text = join(&[HEADER, VALUES, SICK]);
        assert_eq!(extract_records(&text), extract_records(&text));
    }

    #[test]
    fn test_emission_order_follows_line_order() {
        let text = join(&[
            "OPS 31ST PPB042 Jones Annual 4",
            "Annual 4 1.00 0.50 0.00 0.00 0.00",
            HEADER,
            VALUES,
        ]);
        let records = extract_records(&text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_number, "PPB042");
        assert_eq!(records[1].employee_number, "PPA021");
    }
}
