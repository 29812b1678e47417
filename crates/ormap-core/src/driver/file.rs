//! JSON mapping documents.

use super::{ClassMapping, MappingDriver, StaticDriver};
use crate::config::MetadataConfig;
use crate::error::Result;
use crate::hierarchy::ClassHierarchy;
use crate::mapping::ClassMetadataBuilder;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// A mapping document: optional resolution settings plus class mappings.
///
/// ```json
/// {
///   "config": { "root_markers": ["Entity"] },
///   "classes": [
///     { "name": "User", "parent": "Entity",
///       "fields": [{ "name": "id", "type": "integer", "id": true }] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingDocument {
    /// Resolution settings.
    #[serde(default)]
    pub config: MetadataConfig,
    /// Class mappings.
    #[serde(default)]
    pub classes: Vec<ClassMapping>,
}

impl MappingDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Driver backed by a [`MappingDocument`].
///
/// Besides serving class mappings, it exposes the hierarchy and configuration the
/// document declares.
#[derive(Debug, Clone)]
pub struct FileDriver {
    inner: StaticDriver,
    hierarchy: ClassHierarchy,
    config: MetadataConfig,
}

impl FileDriver {
    /// Load a driver from a mapping file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = MappingDocument::open(path)?;
        debug!(path = %path.display(), classes = document.classes.len(), "loaded mapping document");
        Ok(Self::from_document(document))
    }

    /// Build a driver from a parsed document.
    pub fn from_document(document: MappingDocument) -> Self {
        let mut inner = StaticDriver::new();
        for mapping in document.classes {
            inner.add_class(mapping);
        }
        let hierarchy = inner.hierarchy();

        Self {
            inner,
            hierarchy,
            config: document.config,
        }
    }

    /// Hierarchy declared by the document.
    pub fn hierarchy(&self) -> &ClassHierarchy {
        &self.hierarchy
    }

    /// Configuration declared by the document.
    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }
}

impl MappingDriver for FileDriver {
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()> {
        self.inner.load_metadata_for_class(class_name, target)
    }
}
