//! Configuration loading and management for the leave lookup engine.
//!
//! This module provides functionality to load the list of report sources
//! from a YAML file. Each source pairs an opaque id (used as the company
//! tag on extracted records) with the URL its raw text is fetched from.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sources.yaml").unwrap();
//! println!("Configured sources: {}", config.sources().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ReportSource, SourcesConfig};
