//! Explicit class hierarchy descriptor.
//!
//! Maps each known class to the parent it declares. Ancestry walks stop at root
//! markers (see [`MetadataConfig::root_markers`]) or at classes without a parent.

use crate::config::MetadataConfig;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Class name to declared parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHierarchy {
    parents: HashMap<String, Option<String>>,
}

impl ClassHierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class without a parent.
    pub fn with_root(mut self, class_name: impl Into<String>) -> Self {
        self.insert(class_name, None::<String>);
        self
    }

    /// Register a class with its parent.
    pub fn with_class(mut self, class_name: impl Into<String>, parent: impl Into<String>) -> Self {
        self.insert(class_name, Some(parent));
        self
    }

    /// Register or re-parent a class.
    pub fn insert(&mut self, class_name: impl Into<String>, parent: Option<impl Into<String>>) {
        self.parents
            .insert(class_name.into(), parent.map(Into::into));
    }

    /// Check if the class is registered.
    pub fn contains(&self, class_name: &str) -> bool {
        self.parents.contains_key(class_name)
    }

    /// Declared parent of a class.
    pub fn parent_of(&self, class_name: &str) -> Option<&str> {
        self.parents.get(class_name).and_then(|p| p.as_deref())
    }

    /// All registered class names, sorted.
    pub fn classes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check if no class is registered.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Mapped ancestors of a class, nearest first.
    ///
    /// Excludes the class itself and root markers. Fails when the chain references an
    /// unregistered class or loops.
    pub fn ancestors(&self, class_name: &str, config: &MetadataConfig) -> Result<Vec<String>> {
        if !self.contains(class_name) {
            return Err(Error::UnknownClass(class_name.to_string()));
        }

        let mut seen: HashSet<&str> = HashSet::from([class_name]);
        let mut ancestors = Vec::new();
        let mut current = class_name;

        while let Some(parent) = self.parent_of(current) {
            if config.is_root_marker(parent) {
                break;
            }
            if !self.contains(parent) {
                return Err(Error::ClassNotFound(parent.to_string()));
            }
            if !seen.insert(parent) {
                return Err(Error::CyclicInheritance(parent.to_string()));
            }
            ancestors.push(parent.to_string());
            current = parent;
        }

        Ok(ancestors)
    }
}
