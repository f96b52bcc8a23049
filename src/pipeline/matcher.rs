//! Query matching over normalized records.
//!
//! This module applies the two-mode match predicate: a case-insensitive
//! surname substring match, or an exact, case-sensitive employee number
//! match. One employee number is excluded from every result set outright.

use crate::models::NormalizedRecord;

/// Employee number excluded from all query results, regardless of the
/// search term.
pub const EXCLUDED_EMPLOYEE_NUMBER: &str = "PPA091";

/// Decides whether one record matches the search term.
///
/// The exclusion is checked first and is unconditional: the excluded record
/// is rejected even when the term is its own number or surname. Otherwise
/// the record matches if its lowercased surname contains the lowercased
/// term, or its employee number equals the term exactly (case-sensitive).
pub fn record_matches(record: &NormalizedRecord, term: &str) -> bool {
    if record.employee_number == EXCLUDED_EMPLOYEE_NUMBER {
        return false;
    }

    record
        .surname
        .to_lowercase()
        .contains(&term.to_lowercase())
        || record.employee_number == term
}

/// Filters the concatenated records down to the ordered subsequence
/// matching the search term.
///
/// Callers must pass a non-empty, trimmed term; empty terms are rejected
/// with a validation error before retrieval and never reach this stage.
/// Input order is preserved.
pub fn match_records(records: &[NormalizedRecord], term: &str) -> Vec<NormalizedRecord> {
    records
        .iter()
        .filter(|record| record_matches(record, term))
        .cloned()
        .collect()
}
