//! Request types for the leave lookup API.
//!
//! This module defines the query parameters for the `/search` endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for the `/search` endpoint.
///
/// The term is free text: either part of a surname (matched
/// case-insensitively) or a full employee number (matched exactly).
/// Whitespace around the term is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// The search term.
    pub term: String,
}
