//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! source list from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ReportSource, SourcesConfig};

/// Loads and provides access to the configured report sources.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sources.yaml").unwrap();
/// for source in loader.sources() {
///     println!("{} <- {}", source.id, source.url);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SourcesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the sources file (e.g. "./config/sources.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: SourcesConfig =
            serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Builds a loader from an already-parsed source list.
    ///
    /// Used by tests and by callers that configure sources programmatically.
    pub fn from_sources(sources: Vec<ReportSource>) -> Self {
        Self {
            config: SourcesConfig { sources },
        }
    }

    /// Returns the configured sources in retrieval order.
    pub fn sources(&self) -> &[ReportSource] {
        &self.config.sources
    }
}
