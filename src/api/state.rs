//! Application state for the leave lookup API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportSource};
use crate::fetch::ReportFetcher;

/// Shared application state.
///
/// Contains the configured report sources and the fetcher used to retrieve
/// them. The fetcher is behind a trait object so tests can serve canned
/// report text without touching the network.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    fetcher: Arc<dyn ReportFetcher>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, fetcher: Arc<dyn ReportFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
        }
    }

    /// Returns the configured report sources in retrieval order.
    pub fn sources(&self) -> &[ReportSource] {
        self.config.sources()
    }

    /// Returns a handle to the report fetcher.
    pub fn fetcher(&self) -> Arc<dyn ReportFetcher> {
        Arc::clone(&self.fetcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
