//! The record extraction and query pipeline.
//!
//! Data flows strictly Extractor → Normalizer → Matcher → Assembler; each
//! stage is a pure function over its input, so every stage tests without a
//! network or display dependency. [`run_search`] drives the whole pipeline
//! for one query across all configured sources.

mod assembler;
mod extractor;
mod grammar;
mod matcher;
mod normalizer;
mod search;

pub use assembler::{assemble_results, assemble_summary};
pub use extractor::extract_records;
pub use matcher::{EXCLUDED_EMPLOYEE_NUMBER, match_records, record_matches};
pub use normalizer::normalize_record;
pub use search::run_search;
