//! Field mappings.

use super::types::ColumnType;
use serde::{Deserialize, Serialize};

/// Maps one class field onto a table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Field name on the class.
    #[serde(rename = "name")]
    pub field_name: String,
    /// Column name; the field name is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Column storage type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the column accepts NULL.
    #[serde(default)]
    pub nullable: bool,
    /// Maximum length for string-like columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Whether the column carries a unique constraint.
    #[serde(default)]
    pub unique: bool,
    /// Whether the field is part of the identifier.
    #[serde(default)]
    pub id: bool,
    /// Ancestor class that declared this field, when inherited. Only set during resolution.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub inherited: Option<String>,
}

impl FieldMapping {
    /// Create a new non-nullable field.
    pub fn new(field_name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            field_name: field_name.into(),
            column_name: None,
            column_type,
            nullable: false,
            length: None,
            unique: false,
            id: false,
            inherited: None,
        }
    }

    /// Create an identifier field.
    pub fn id(field_name: impl Into<String>, column_type: ColumnType) -> Self {
        Self::new(field_name, column_type).identifier()
    }

    /// Create a nullable field.
    pub fn nullable(field_name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            nullable: true,
            ..Self::new(field_name, column_type)
        }
    }

    /// Set an explicit column name.
    pub fn with_column(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    /// Set the maximum length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Mark as unique.
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark as part of the identifier.
    pub fn identifier(mut self) -> Self {
        self.id = true;
        self
    }

    /// Column name, falling back to the field name.
    pub fn column_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.field_name)
    }

    /// Check if this field is part of the identifier.
    pub fn is_identifier(&self) -> bool {
        self.id
    }

    /// Check if this field was declared by an ancestor.
    pub fn is_inherited(&self) -> bool {
        self.inherited.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mapping_builder() {
        let field = FieldMapping::new("email", ColumnType::String)
            .with_column("email_address")
            .with_length(255)
            .with_unique();

        assert_eq!(field.field_name, "email");
        assert_eq!(field.column_name(), "email_address");
        assert_eq!(field.length, Some(255));
        assert!(field.unique);
        assert!(!field.nullable);
        assert!(!field.is_identifier());
    }

    #[test]
    fn test_column_name_defaults_to_field() {
        let field = FieldMapping::id("id", ColumnType::Integer);
        assert_eq!(field.column_name(), "id");
        assert!(field.is_identifier());
        assert!(!field.is_inherited());
    }

    #[test]
    fn test_nullable_field() {
        let field = FieldMapping::nullable("bio", ColumnType::Text);
        assert!(field.nullable);
    }

    #[test]
    fn test_deserialize_minimal() {
        let field: FieldMapping =
            serde_json::from_str(r#"{"name": "id", "type": "integer", "id": true}"#)
                .unwrap();
        assert_eq!(field, FieldMapping::id("id", ColumnType::Integer));
    }

    #[test]
    fn test_deserialize_ignores_inherited_marker() {
        let field: FieldMapping = serde_json::from_str(
            r#"{"name": "code", "type": "string", "inherited": "Ghost"}"#,
        )
        .unwrap();
        assert!(!field.is_inherited());
    }
}
