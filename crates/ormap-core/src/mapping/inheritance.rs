//! Inheritance strategies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a class hierarchy is laid out in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InheritanceType {
    /// No inheritance mapping; every class owns its table.
    #[default]
    None,
    /// All classes of the hierarchy share the root's table.
    SingleTable,
    /// Each class has its own table joined to the parent's by identifier.
    Joined,
    /// Each concrete class has a standalone table with all inherited columns.
    TablePerClass,
}

impl InheritanceType {
    /// Check if this strategy needs a discriminator column.
    pub fn uses_discriminator(&self) -> bool {
        matches!(self, InheritanceType::SingleTable | InheritanceType::Joined)
    }
}

/// Strategy-specific inheritance parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InheritanceOptions {
    /// Column telling subclasses apart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator_column: Option<String>,
    /// Discriminator value to class name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub discriminator_map: BTreeMap<String, String>,
}

impl InheritanceOptions {
    /// Create options with a discriminator column.
    pub fn discriminated(column: impl Into<String>) -> Self {
        Self {
            discriminator_column: Some(column.into()),
            discriminator_map: BTreeMap::new(),
        }
    }

    /// Map a discriminator value to a class.
    pub fn with_discriminator(
        mut self,
        value: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        self.discriminator_map
            .insert(value.into(), class_name.into());
        self
    }

    /// Check if no option is set.
    pub fn is_empty(&self) -> bool {
        self.discriminator_column.is_none() && self.discriminator_map.is_empty()
    }

    /// Check that these options make sense for `inheritance_type`.
    ///
    /// Returns the reason when they don't.
    pub fn check_against(&self, inheritance_type: InheritanceType) -> Result<(), String> {
        if inheritance_type.uses_discriminator() {
            if self.discriminator_column.is_none() && !self.discriminator_map.is_empty() {
                return Err("discriminator map given without a discriminator column".into());
            }
            Ok(())
        } else if !self.is_empty() {
            Err(format!(
                "{:?} inheritance does not take discriminator options",
                inheritance_type
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(InheritanceType::default(), InheritanceType::None);
        assert!(InheritanceOptions::default().is_empty());
    }

    #[test]
    fn test_discriminator_options() {
        let options = InheritanceOptions::discriminated("kind")
            .with_discriminator("user", "User")
            .with_discriminator("admin", "Admin");

        assert!(options.check_against(InheritanceType::SingleTable).is_ok());
        assert!(options.check_against(InheritanceType::Joined).is_ok());
        assert!(options.check_against(InheritanceType::None).is_err());
        assert!(options.check_against(InheritanceType::TablePerClass).is_err());
    }

    #[test]
    fn test_map_without_column() {
        let options = InheritanceOptions::default().with_discriminator("user", "User");
        assert!(options.check_against(InheritanceType::SingleTable).is_err());
    }
}
