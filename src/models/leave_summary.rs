//! Presentation record model.
//!
//! This module defines the [`LeaveSummary`] struct returned to the
//! presentation layer, and the [`LeaveBucket`] classification derived from
//! the total annual leave balance.

use serde::{Deserialize, Serialize};

/// Display classification for a total annual leave balance.
///
/// Used by the presentation layer to highlight unusually high or negative
/// balances. The boundary values 15 and 0 classify as [`LeaveBucket::Normal`].
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveBucket;
///
/// assert_eq!(LeaveBucket::classify(16.0), LeaveBucket::High);
/// assert_eq!(LeaveBucket::classify(15.0), LeaveBucket::Normal);
/// assert_eq!(LeaveBucket::classify(-1.0), LeaveBucket::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveBucket {
    /// Total annual leave strictly greater than 15.
    High,
    /// Total annual leave strictly less than 0.
    Negative,
    /// Everything else, including the boundary values 15 and 0.
    Normal,
}

impl LeaveBucket {
    /// Classifies a total annual leave balance into its display bucket.
    pub fn classify(total_annual_leave: f64) -> Self {
        if total_annual_leave > 15.0 {
            LeaveBucket::High
        } else if total_annual_leave < 0.0 {
            LeaveBucket::Negative
        } else {
            LeaveBucket::Normal
        }
    }
}

impl std::fmt::Display for LeaveBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveBucket::High => write!(f, "high"),
            LeaveBucket::Negative => write!(f, "negative"),
            LeaveBucket::Normal => write!(f, "normal"),
        }
    }
}

/// One matched employee record as presented to the caller.
///
/// Serializes with the report's original column headings as JSON keys. The
/// optional leave fields are present only when defined on the underlying
/// record; they are never defaulted to zero or an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// The employee number.
    #[serde(rename = "Employee Number")]
    pub employee_number: String,
    /// The employee's surname.
    #[serde(rename = "Surname")]
    pub surname: String,
    /// The source the record was extracted from.
    #[serde(rename = "Company")]
    pub company: String,
    /// Sum of the annual and accrued annual leave balances.
    #[serde(rename = "Total Annual Leave")]
    pub total_annual_leave: f64,
    /// Sick leave balance, when the report carried one.
    #[serde(rename = "Sick Leave", default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<String>,
    /// Personal leave balance, when the report carried one.
    #[serde(rename = "Personal Leave", default, skip_serializing_if = "Option::is_none")]
    pub personal_leave: Option<String>,
    /// Display classification derived from the total annual leave balance.
    pub bucket: LeaveBucket,
}
