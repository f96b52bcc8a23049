//! Normalized employee record model.
//!
//! This module defines the [`NormalizedRecord`] struct produced by the field
//! normalizer: the raw leave text converted to a numeric total, tagged with
//! its originating source, with the internal-only fields pruned.

use serde::{Deserialize, Serialize};

/// An employee leave record after normalization.
///
/// Immutable once created. Maternity and lost leave from the raw record are
/// dropped at this stage and never reappear. `personal_leave` is a schema
/// slot kept for compatibility; no extraction path populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// The employee number (e.g. "PPA021").
    pub employee_number: String,
    /// The employee's surname.
    pub surname: String,
    /// Tag identifying the report source this record came from.
    pub company: String,
    /// Sum of the annual and accrued annual leave balances.
    /// Raw values that fail to parse contribute zero.
    pub total_annual_leave: f64,
    /// Sick leave balance, passed through as raw text when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<String>,
    /// Personal leave balance. Reserved in the schema; never populated by
    /// any known extraction path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_leave: Option<String>,
}
