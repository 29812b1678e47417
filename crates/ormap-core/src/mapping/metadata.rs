//! Per-class metadata and the builder it is resolved through.

use super::association::AssociationMapping;
use super::field::FieldMapping;
use super::inheritance::{InheritanceOptions, InheritanceType};
use crate::error::{Error, Result};
use crate::naming::tableize;
use serde::Serialize;

/// Accumulates mapping facts for one class during resolution.
///
/// Drivers write into the builder; only [`complete_identifier_mapping`] turns it into a
/// [`ClassMetadata`].
///
/// [`complete_identifier_mapping`]: ClassMetadataBuilder::complete_identifier_mapping
#[derive(Debug, Clone)]
pub struct ClassMetadataBuilder {
    class_name: String,
    parent_classes: Vec<String>,
    table_name: Option<String>,
    field_mappings: Vec<FieldMapping>,
    association_mappings: Vec<AssociationMapping>,
    inheritance_type: InheritanceType,
    inheritance_options: InheritanceOptions,
}

impl ClassMetadataBuilder {
    pub(crate) fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent_classes: Vec::new(),
            table_name: None,
            field_mappings: Vec::new(),
            association_mappings: Vec::new(),
            inheritance_type: InheritanceType::None,
            inheritance_options: InheritanceOptions::default(),
        }
    }

    /// Name of the class being built.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub(crate) fn set_parent_classes(&mut self, names: Vec<String>) {
        self.parent_classes = names;
    }

    /// Ancestors of the class, nearest first.
    pub fn parent_classes(&self) -> &[String] {
        &self.parent_classes
    }

    /// Add a field mapping, replacing any mapping of the same field.
    pub fn add_field_mapping(&mut self, mapping: FieldMapping) {
        match self
            .field_mappings
            .iter_mut()
            .find(|f| f.field_name == mapping.field_name)
        {
            Some(existing) => *existing = mapping,
            None => self.field_mappings.push(mapping),
        }
    }

    /// Add an association mapping, replacing any mapping of the same field.
    pub fn add_association_mapping(&mut self, mapping: AssociationMapping) {
        match self
            .association_mappings
            .iter_mut()
            .find(|a| a.field_name == mapping.field_name)
        {
            Some(existing) => *existing = mapping,
            None => self.association_mappings.push(mapping),
        }
    }

    /// Field mappings collected so far.
    pub fn field_mappings(&self) -> &[FieldMapping] {
        &self.field_mappings
    }

    /// Association mappings collected so far.
    pub fn association_mappings(&self) -> &[AssociationMapping] {
        &self.association_mappings
    }

    /// Set the inheritance strategy and its options.
    pub fn set_inheritance_type(
        &mut self,
        inheritance_type: InheritanceType,
        options: InheritanceOptions,
    ) {
        self.inheritance_type = inheritance_type;
        self.inheritance_options = options;
    }

    /// Current inheritance strategy.
    pub fn inheritance_type(&self) -> InheritanceType {
        self.inheritance_type
    }

    /// Current inheritance options.
    pub fn inheritance_options(&self) -> &InheritanceOptions {
        &self.inheritance_options
    }

    pub(crate) fn inheritance_options_mut(&mut self) -> &mut InheritanceOptions {
        &mut self.inheritance_options
    }

    /// Set the table name.
    pub fn set_table_name(&mut self, table_name: impl Into<String>) {
        self.table_name = Some(table_name.into());
    }

    /// Table name set so far, if any.
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Derive the identifier and freeze the metadata.
    ///
    /// Falls back to the tableized class name when no table name was set.
    pub fn complete_identifier_mapping(self) -> Result<ClassMetadata> {
        let identifier: Vec<String> = self
            .field_mappings
            .iter()
            .filter(|f| f.is_identifier())
            .map(|f| f.field_name.clone())
            .collect();

        if identifier.is_empty() {
            return Err(Error::NoIdentifierDefined(self.class_name));
        }

        let table_name = match self.table_name {
            Some(name) if !name.is_empty() => name,
            _ => tableize(&self.class_name),
        };
        if table_name.is_empty() {
            return Err(Error::UnknownClass(self.class_name));
        }

        Ok(ClassMetadata {
            class_name: self.class_name,
            parent_classes: self.parent_classes,
            table_name,
            field_mappings: self.field_mappings,
            association_mappings: self.association_mappings,
            inheritance_type: self.inheritance_type,
            inheritance_options: self.inheritance_options,
            identifier,
        })
    }
}

/// Resolved, immutable mapping description of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMetadata {
    class_name: String,
    parent_classes: Vec<String>,
    table_name: String,
    field_mappings: Vec<FieldMapping>,
    association_mappings: Vec<AssociationMapping>,
    inheritance_type: InheritanceType,
    inheritance_options: InheritanceOptions,
    identifier: Vec<String>,
}

impl ClassMetadata {
    /// Class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Ancestors nearest first, excluding root markers.
    pub fn parent_classes(&self) -> &[String] {
        &self.parent_classes
    }

    /// Topmost mapped class of the hierarchy.
    pub fn root_class_name(&self) -> &str {
        self.parent_classes
            .last()
            .map(String::as_str)
            .unwrap_or(&self.class_name)
    }

    /// Check if this class is the root of its hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent_classes.is_empty()
    }

    /// Table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// All field mappings, inherited ones first.
    pub fn field_mappings(&self) -> &[FieldMapping] {
        &self.field_mappings
    }

    /// Get a field mapping by field name.
    pub fn get_field_mapping(&self, field_name: &str) -> Option<&FieldMapping> {
        self.field_mappings
            .iter()
            .find(|f| f.field_name == field_name)
    }

    /// Check if a field is mapped.
    pub fn has_field(&self, field_name: &str) -> bool {
        self.get_field_mapping(field_name).is_some()
    }

    /// Check if a field was declared by an ancestor.
    pub fn is_inherited_field(&self, field_name: &str) -> bool {
        self.get_field_mapping(field_name)
            .is_some_and(FieldMapping::is_inherited)
    }

    /// Mapped field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_mappings.iter().map(|f| f.field_name.as_str())
    }

    /// Mapped column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.field_mappings.iter().map(FieldMapping::column_name)
    }

    /// All association mappings.
    pub fn association_mappings(&self) -> &[AssociationMapping] {
        &self.association_mappings
    }

    /// Get an association mapping by field name.
    pub fn get_association_mapping(&self, field_name: &str) -> Option<&AssociationMapping> {
        self.association_mappings
            .iter()
            .find(|a| a.field_name == field_name)
    }

    /// Check if an association is mapped.
    pub fn has_association(&self, field_name: &str) -> bool {
        self.get_association_mapping(field_name).is_some()
    }

    /// Inheritance strategy.
    pub fn inheritance_type(&self) -> InheritanceType {
        self.inheritance_type
    }

    /// Inheritance options.
    pub fn inheritance_options(&self) -> &InheritanceOptions {
        &self.inheritance_options
    }

    /// Discriminator column, for discriminated strategies.
    pub fn discriminator_column(&self) -> Option<&str> {
        self.inheritance_options.discriminator_column.as_deref()
    }

    /// Check for single-table inheritance.
    pub fn is_inheritance_type_single_table(&self) -> bool {
        self.inheritance_type == InheritanceType::SingleTable
    }

    /// Check for joined inheritance.
    pub fn is_inheritance_type_joined(&self) -> bool {
        self.inheritance_type == InheritanceType::Joined
    }

    /// Check for no inheritance mapping.
    pub fn is_inheritance_type_none(&self) -> bool {
        self.inheritance_type == InheritanceType::None
    }

    /// Identifier field names.
    pub fn identifier(&self) -> &[String] {
        &self.identifier
    }

    /// Check if the identifier spans more than one field.
    pub fn is_identifier_composite(&self) -> bool {
        self.identifier.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ColumnType, JoinColumn};

    fn user_builder() -> ClassMetadataBuilder {
        let mut builder = ClassMetadataBuilder::new("UserProfile");
        builder.add_field_mapping(FieldMapping::id("id", ColumnType::Integer));
        builder.add_field_mapping(FieldMapping::new("name", ColumnType::String));
        builder
    }

    #[test]
    fn test_add_field_overwrites_in_place() {
        let mut builder = user_builder();
        builder.add_field_mapping(FieldMapping::nullable("id", ColumnType::BigInt).identifier());

        assert_eq!(builder.field_mappings().len(), 2);
        assert_eq!(builder.field_mappings()[0].column_type, ColumnType::BigInt);
    }

    #[test]
    fn test_add_association_overwrites() {
        let mut builder = user_builder();
        builder.add_association_mapping(AssociationMapping::many_to_one("group", "Group"));
        builder.add_association_mapping(
            AssociationMapping::many_to_one("group", "Team")
                .with_join_column(JoinColumn::new("team_id", "id")),
        );

        assert_eq!(builder.association_mappings().len(), 1);
        assert_eq!(builder.association_mappings()[0].target_class, "Team");
    }

    #[test]
    fn test_complete_table_name_never_empty() {
        let mut builder = ClassMetadataBuilder::new("app::");
        builder.add_field_mapping(FieldMapping::id("id", ColumnType::Integer));
        let metadata = builder.complete_identifier_mapping().unwrap();
        assert_eq!(metadata.table_name(), "app");

        let mut builder = ClassMetadataBuilder::new("");
        builder.add_field_mapping(FieldMapping::id("id", ColumnType::Integer));
        assert!(matches!(
            builder.complete_identifier_mapping(),
            Err(Error::UnknownClass(_))
        ));
    }

    #[test]
    fn test_complete_defaults_table_name() {
        let metadata = user_builder().complete_identifier_mapping().unwrap();

        assert_eq!(metadata.table_name(), "user_profile");
        assert_eq!(metadata.identifier(), ["id".to_string()]);
        assert!(!metadata.is_identifier_composite());
        assert!(metadata.is_root());
        assert_eq!(metadata.root_class_name(), "UserProfile");
    }

    #[test]
    fn test_complete_keeps_explicit_table_name() {
        let mut builder = user_builder();
        builder.set_table_name("profiles");
        builder.set_table_name("people");

        let metadata = builder.complete_identifier_mapping().unwrap();
        assert_eq!(metadata.table_name(), "people");
    }

    #[test]
    fn test_complete_without_identifier() {
        let mut builder = ClassMetadataBuilder::new("Log");
        builder.add_field_mapping(FieldMapping::new("message", ColumnType::Text));

        let err = builder.complete_identifier_mapping().unwrap_err();
        assert!(matches!(err, Error::NoIdentifierDefined(name) if name == "Log"));
    }

    #[test]
    fn test_composite_identifier() {
        let mut builder = ClassMetadataBuilder::new("Membership");
        builder.add_field_mapping(FieldMapping::id("user_id", ColumnType::Integer));
        builder.add_field_mapping(FieldMapping::id("group_id", ColumnType::Integer));

        let metadata = builder.complete_identifier_mapping().unwrap();
        assert!(metadata.is_identifier_composite());
        assert_eq!(
            metadata.identifier(),
            ["user_id".to_string(), "group_id".to_string()]
        );
    }

    #[test]
    fn test_parent_classes_and_root() {
        let mut builder = user_builder();
        builder.set_parent_classes(vec!["Person".into(), "Party".into()]);

        let metadata = builder.complete_identifier_mapping().unwrap();
        assert_eq!(metadata.root_class_name(), "Party");
        assert!(!metadata.is_root());
    }
}
