//! Raw employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct emitted by the record
//! extractor. It is an internal type: every field holds the captured text
//! verbatim, and the record never crosses the normalizer boundary.

/// One employee's leave record as captured from the report text.
///
/// Created only by a successful header+values (optionally +sick) grammar
/// match, never mutated afterwards, and discarded once normalized. The
/// numeric fields are kept as raw text; conversion to numbers happens in
/// the normalizer with a parse-or-zero contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// The employee number (`PP` followed by alphanumerics, e.g. "PPA021").
    pub employee_number: String,
    /// The employee's surname, free text that may contain spaces.
    pub surname: String,
    /// Annual leave balance, raw numeric text (values line, group 1).
    pub annual_leave: String,
    /// Accrued annual leave, raw numeric text (values line, group 2).
    pub acc_annual: String,
    /// Maternity leave balance, raw numeric text (values line, group 3).
    /// Dropped by the normalizer.
    pub maternity_leave: String,
    /// Lost leave balance, raw numeric text (values line, group 5).
    /// Dropped by the normalizer.
    pub lost_leave: String,
    /// Sick leave balance, raw numeric text. Present only when a sick line
    /// followed the values line.
    pub sick_leave: Option<String>,
}
