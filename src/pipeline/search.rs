//! Search orchestration across report sources.
//!
//! This module wires the pure stages together for one query: fetch each
//! configured source, extract and normalize its records, concatenate in
//! source order, then match and assemble. Each source is an independent
//! unit of work; a failed fetch is logged and skipped so the remaining
//! sources still contribute records.

use tracing::{debug, warn};

use crate::config::ReportSource;
use crate::error::{EngineError, EngineResult};
use crate::fetch::ReportFetcher;
use crate::models::LeaveSummary;

use super::assembler::assemble_results;
use super::extractor::extract_records;
use super::matcher::match_records;
use super::normalizer::normalize_record;

/// Runs one leave lookup query end to end.
///
/// The term is trimmed and validated before any retrieval. Records are
/// concatenated in the fixed iteration order over `sources`, preserving
/// per-source emission order; results are recomputed fresh per call.
///
/// # Errors
///
/// * [`EngineError::EmptySearchTerm`] when the trimmed term is empty; no
///   source is fetched in that case.
/// * [`EngineError::NoData`] when every source failed or none contained an
///   extractable record. A term that simply matches nothing returns an
///   empty `Vec`, not an error.
pub fn run_search(
    term: &str,
    sources: &[ReportSource],
    fetcher: &dyn ReportFetcher,
) -> EngineResult<Vec<LeaveSummary>> {
    let term = term.trim();
    if term.is_empty() {
        return Err(EngineError::EmptySearchTerm);
    }

    let mut all_records = Vec::new();
    for source in sources {
        let text = match fetcher.fetch(source) {
            Ok(text) => text,
            Err(err) => {
                warn!(source = %source.id, error = %err, "Skipping report source");
                continue;
            }
        };

        let extracted = extract_records(&text);
        debug!(source = %source.id, records = extracted.len(), "Extracted records");
        all_records.extend(
            extracted
                .into_iter()
                .map(|record| normalize_record(record, &source.id)),
        );
    }

    if all_records.is_empty() {
        return Err(EngineError::NoData);
    }

    let matched = match_records(&all_records, term);
    Ok(assemble_results(matched))
}
