//! Field normalization for extracted records.
//!
//! This module converts a raw [`EmployeeRecord`] into a [`NormalizedRecord`]:
//! the two annual leave figures become numbers under a parse-or-zero
//! contract and are summed, the originating source's tag is attached, and
//! the internal-only maternity and lost leave fields are pruned.

use crate::models::{EmployeeRecord, NormalizedRecord};

/// Parses a raw leave figure, treating anything unparseable as zero.
///
/// Empty and non-numeric text contribute nothing to the total rather than
/// failing the record.
fn numeric(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Normalizes one extracted record, tagging it with its source.
///
/// `total_annual_leave` is the sum of the parsed annual and accrued annual
/// figures. The sick leave balance passes through as raw text when present;
/// personal leave is never synthesized. Maternity and lost leave are
/// dropped here and never reappear downstream.
///
/// # Example
///
/// ```
/// use leave_engine::models::EmployeeRecord;
/// use leave_engine::pipeline::normalize_record;
///
/// let record = EmployeeRecord {
///     employee_number: "PPA021".to_string(),
///     surname: "Heshe L".to_string(),
///     annual_leave: "5.00".to_string(),
///     acc_annual: "2.50".to_string(),
///     maternity_leave: "0.00".to_string(),
///     lost_leave: "1.00".to_string(),
///     sick_leave: None,
/// };
///
/// let normalized = normalize_record(record, "001LVE2511.csv");
/// assert_eq!(normalized.total_annual_leave, 7.5);
/// assert_eq!(normalized.company, "001LVE2511.csv");
/// ```
pub fn normalize_record(record: EmployeeRecord, company: &str) -> NormalizedRecord {
    let total_annual_leave = numeric(&record.annual_leave) + numeric(&record.acc_annual);

    NormalizedRecord {
        employee_number: record.employee_number,
        surname: record.surname,
        company: company.to_string(),
        total_annual_leave,
        sick_leave: record.sick_leave,
        personal_leave: None,
    }
}
