//! Resolution configuration.

use serde::Deserialize;

/// Default root entity marker.
pub const DEFAULT_ROOT_MARKER: &str = "Entity";

/// Default discriminator column for discriminated inheritance.
pub const DEFAULT_DISCRIMINATOR_COLUMN: &str = "dtype";

/// Metadata factory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Base types that sit above every mapped hierarchy.
    ///
    /// Ancestry walks stop before reaching one of these.
    pub root_markers: Vec<String>,

    /// Discriminator column given to single-table and joined roots that declare none.
    pub default_discriminator_column: String,
}

impl MetadataConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self {
            root_markers: vec![DEFAULT_ROOT_MARKER.to_string()],
            default_discriminator_column: DEFAULT_DISCRIMINATOR_COLUMN.to_string(),
        }
    }

    /// Replace the root markers.
    pub fn with_root_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a root marker.
    pub fn with_root_marker(mut self, marker: impl Into<String>) -> Self {
        self.root_markers.push(marker.into());
        self
    }

    /// Set the default discriminator column.
    pub fn with_default_discriminator_column(mut self, column: impl Into<String>) -> Self {
        self.default_discriminator_column = column.into();
        self
    }

    /// Check if `class_name` is a root marker.
    pub fn is_root_marker(&self, class_name: &str) -> bool {
        self.root_markers.iter().any(|m| m == class_name)
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MetadataConfig::default();
        assert_eq!(config.root_markers, vec![DEFAULT_ROOT_MARKER.to_string()]);
        assert_eq!(config.default_discriminator_column, DEFAULT_DISCRIMINATOR_COLUMN);
        assert!(config.is_root_marker("Entity"));
        assert!(!config.is_root_marker("User"));
    }

    #[test]
    fn test_config_builder() {
        let config = MetadataConfig::new()
            .with_root_markers(["Model"])
            .with_root_marker("Record")
            .with_default_discriminator_column("kind");

        assert!(config.is_root_marker("Model"));
        assert!(config.is_root_marker("Record"));
        assert!(!config.is_root_marker("Entity"));
        assert_eq!(config.default_discriminator_column, "kind");
    }

    #[test]
    fn test_partial_config_document() {
        let config: MetadataConfig =
            serde_json::from_str(r#"{"default_discriminator_column": "type"}"#).unwrap();

        assert!(config.is_root_marker("Entity"));
        assert_eq!(config.default_discriminator_column, "type");
    }
}
