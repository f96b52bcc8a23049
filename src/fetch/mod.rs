//! Report text retrieval.
//!
//! Retrieval is an external collaborator to the core pipeline: the engine
//! only requires something that can turn a configured source into a blob of
//! line-oriented text, or a captured failure. The [`ReportFetcher`] trait is
//! that seam; [`HttpFetcher`] is the production implementation, and tests
//! substitute canned-text stubs so the core never touches the network.

mod http;

pub use http::HttpFetcher;

use crate::config::ReportSource;
use crate::error::EngineResult;

/// Retrieves the raw report text for one source.
///
/// Implementations must be safe to call once per source per query; the
/// engine treats each source as an independent unit of work and a failure
/// for one source never aborts the others.
pub trait ReportFetcher: Send + Sync {
    /// Fetches the report text for `source`.
    ///
    /// Returns [`EngineError::SourceFetch`](crate::error::EngineError::SourceFetch)
    /// on any transport failure or non-success status.
    fn fetch(&self, source: &ReportSource) -> EngineResult<String>;
}
