//! Programmatic mapping driver.

use super::{ClassMapping, MappingDriver};
use crate::error::{Error, Result};
use crate::hierarchy::ClassHierarchy;
use crate::mapping::ClassMetadataBuilder;
use std::collections::HashMap;

/// Driver serving mappings registered in code.
#[derive(Debug, Clone, Default)]
pub struct StaticDriver {
    classes: HashMap<String, ClassMapping>,
}

impl StaticDriver {
    /// Create an empty driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class mapping.
    pub fn with_class(mut self, mapping: ClassMapping) -> Self {
        self.add_class(mapping);
        self
    }

    /// Register or replace a class mapping.
    pub fn add_class(&mut self, mapping: ClassMapping) {
        self.classes.insert(mapping.name.clone(), mapping);
    }

    /// Get the mapping registered for a class.
    pub fn get(&self, class_name: &str) -> Option<&ClassMapping> {
        self.classes.get(class_name)
    }

    /// Names of all registered classes, sorted.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the hierarchy declared by the registered mappings' `parent` entries.
    pub fn hierarchy(&self) -> ClassHierarchy {
        let mut hierarchy = ClassHierarchy::new();
        for mapping in self.classes.values() {
            hierarchy.insert(mapping.name.clone(), mapping.parent.clone());
        }
        hierarchy
    }
}

impl MappingDriver for StaticDriver {
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()> {
        let mapping = self
            .classes
            .get(class_name)
            .ok_or_else(|| Error::ClassNotFound(class_name.to_string()))?;

        mapping.apply(target);
        Ok(())
    }
}
