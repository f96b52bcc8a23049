//! Configuration types for the leave lookup engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML sources file.

use serde::Deserialize;

/// One configured report source.
///
/// The `id` doubles as the company tag attached to every record extracted
/// from this source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSource {
    /// Opaque identifier for the source, e.g. "001LVE2511.csv".
    pub id: String,
    /// URL the raw report text is fetched from.
    pub url: String,
}

/// Sources configuration file structure.
///
/// The order of entries is the fixed iteration order for retrieval, and
/// therefore the concatenation order of extracted records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcesConfig {
    /// The configured report sources, in retrieval order.
    pub sources: Vec<ReportSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sources_config() {
        let yaml = r#"
sources:
  - id: "001LVE2511.csv"
    url: "http://reports.example.com/001LVE2511.csv"
  - id: "002LVE2511.csv"
    url: "http://reports.example.com/002LVE2511.csv"
"#;
        let config: SourcesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].id, "001LVE2511.csv");
        assert_eq!(
            config.sources[1].url,
            "http://reports.example.com/002LVE2511.csv"
        );
    }

    #[test]
    fn test_deserialize_preserves_source_order() {
        let yaml = r#"
sources:
  - id: "b"
    url: "http://example.com/b"
  - id: "a"
    url: "http://example.com/a"
"#;
        let config: SourcesConfig = serde_yaml::from_str(yaml).unwrap();
        let ids: Vec<&str> = config.sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_deserialize_rejects_missing_url() {
        let yaml = r#"
sources:
  - id: "001LVE2511.csv"
"#;
        assert!(serde_yaml::from_str::<SourcesConfig>(yaml).is_err());
    }
}
