//! HTTP API module for the leave lookup engine.
//!
//! This module provides the REST endpoint for querying leave balances
//! extracted from the configured report sources.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SearchParams;
pub use response::ApiError;
pub use state::AppState;
