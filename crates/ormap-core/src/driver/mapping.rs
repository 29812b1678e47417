//! Declarative class mappings.

use crate::mapping::{
    AssociationMapping, ClassMetadataBuilder, FieldMapping, InheritanceOptions, InheritanceType,
};
use serde::{Deserialize, Serialize};

/// Inheritance declaration of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceMapping {
    /// Strategy.
    #[serde(rename = "type")]
    pub inheritance_type: InheritanceType,
    /// Strategy options.
    #[serde(flatten)]
    pub options: InheritanceOptions,
}

/// Mapping facts declared for a single class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMapping {
    /// Class name.
    pub name: String,
    /// Declared parent class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Explicit table name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Inheritance declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<InheritanceMapping>,
    /// Fields declared by this class.
    #[serde(default)]
    pub fields: Vec<FieldMapping>,
    /// Associations declared by this class.
    #[serde(default)]
    pub associations: Vec<AssociationMapping>,
}

impl ClassMapping {
    /// Create an empty mapping for a class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            table: None,
            inheritance: None,
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Set the declared parent.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Declare an inheritance strategy.
    pub fn with_inheritance(
        mut self,
        inheritance_type: InheritanceType,
        options: InheritanceOptions,
    ) -> Self {
        self.inheritance = Some(InheritanceMapping {
            inheritance_type,
            options,
        });
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldMapping) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldMapping>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add an association.
    pub fn with_association(mut self, association: AssociationMapping) -> Self {
        self.associations.push(association);
        self
    }

    /// Write these facts into a metadata builder.
    pub fn apply(&self, target: &mut ClassMetadataBuilder) {
        if let Some(table) = &self.table {
            target.set_table_name(table.clone());
        }
        if let Some(inheritance) = &self.inheritance {
            target.set_inheritance_type(inheritance.inheritance_type, inheritance.options.clone());
        }
        for field in &self.fields {
            target.add_field_mapping(field.clone());
        }
        for association in &self.associations {
            target.add_association_mapping(association.clone());
        }
    }
}
