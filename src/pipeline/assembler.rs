//! Result assembly for matched records.
//!
//! This module maps each matched [`NormalizedRecord`] to a [`LeaveSummary`]
//! for the presentation layer, computing the display bucket from the total
//! annual leave balance. The bucket is derived here per query, never stored
//! on the record.

use crate::models::{LeaveBucket, LeaveSummary, NormalizedRecord};

/// Builds the presentation record for one matched record.
///
/// Optional leave fields are carried over only when defined on the source
/// record. They are never defaulted to zero or an empty string.
pub fn assemble_summary(record: NormalizedRecord) -> LeaveSummary {
    let bucket = LeaveBucket::classify(record.total_annual_leave);

    LeaveSummary {
        employee_number: record.employee_number,
        surname: record.surname,
        company: record.company,
        total_annual_leave: record.total_annual_leave,
        sick_leave: record.sick_leave,
        personal_leave: record.personal_leave,
        bucket,
    }
}

/// Assembles the full ordered result set for a query.
pub fn assemble_results(records: Vec<NormalizedRecord>) -> Vec<LeaveSummary> {
    records.into_iter().map(assemble_summary).collect()
}
