//! Core data models for the leave lookup engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee_record;
mod leave_summary;
mod normalized_record;

pub use employee_record::EmployeeRecord;
pub use leave_summary::{LeaveBucket, LeaveSummary};
pub use normalized_record::NormalizedRecord;
