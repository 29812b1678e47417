//! Association mappings between classes.

use serde::{Deserialize, Serialize};

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// One-to-one association.
    OneToOne,
    /// Many-to-one association (foreign key on this side).
    ManyToOne,
    /// One-to-many association (foreign key on the target side).
    OneToMany,
    /// Many-to-many association (requires a join table).
    ManyToMany,
}

/// Join column of an owning association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinColumn {
    /// Foreign key column on the owning table.
    pub name: String,
    /// Referenced column on the target table.
    pub referenced_column_name: String,
}

impl JoinColumn {
    /// Create a join column.
    pub fn new(name: impl Into<String>, referenced_column_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            referenced_column_name: referenced_column_name.into(),
        }
    }
}

/// Maps one class field onto an association with another class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationMapping {
    /// Field name on the class.
    #[serde(rename = "name")]
    pub field_name: String,
    /// Target class name.
    pub target_class: String,
    /// Association cardinality.
    pub cardinality: Cardinality,
    /// Join columns on the owning side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub join_columns: Vec<JoinColumn>,
    /// Join table for many-to-many associations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<String>,
    /// Field on the target that owns this association (inverse side only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    /// Field on the target holding the inverse side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inversed_by: Option<String>,
    /// Ancestor class that declared this association, when inherited. Only set during resolution.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub inherited: Option<String>,
}

impl AssociationMapping {
    fn with_cardinality(
        field_name: impl Into<String>,
        target_class: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            target_class: target_class.into(),
            cardinality,
            join_columns: Vec::new(),
            join_table: None,
            mapped_by: None,
            inversed_by: None,
            inherited: None,
        }
    }

    /// Create a one-to-one association.
    pub fn one_to_one(field_name: impl Into<String>, target_class: impl Into<String>) -> Self {
        Self::with_cardinality(field_name, target_class, Cardinality::OneToOne)
    }

    /// Create a many-to-one association.
    pub fn many_to_one(field_name: impl Into<String>, target_class: impl Into<String>) -> Self {
        Self::with_cardinality(field_name, target_class, Cardinality::ManyToOne)
    }

    /// Create a one-to-many association, inverse of `mapped_by` on the target.
    pub fn one_to_many(
        field_name: impl Into<String>,
        target_class: impl Into<String>,
        mapped_by: impl Into<String>,
    ) -> Self {
        Self {
            mapped_by: Some(mapped_by.into()),
            ..Self::with_cardinality(field_name, target_class, Cardinality::OneToMany)
        }
    }

    /// Create a many-to-many association through a join table.
    pub fn many_to_many(
        field_name: impl Into<String>,
        target_class: impl Into<String>,
        join_table: impl Into<String>,
    ) -> Self {
        Self {
            join_table: Some(join_table.into()),
            ..Self::with_cardinality(field_name, target_class, Cardinality::ManyToMany)
        }
    }

    /// Add a join column.
    pub fn with_join_column(mut self, join_column: JoinColumn) -> Self {
        self.join_columns.push(join_column);
        self
    }

    /// Mark as the inverse side of `mapped_by` on the target.
    pub fn with_mapped_by(mut self, mapped_by: impl Into<String>) -> Self {
        self.mapped_by = Some(mapped_by.into());
        self
    }

    /// Name the inverse field on the target.
    pub fn with_inversed_by(mut self, inversed_by: impl Into<String>) -> Self {
        self.inversed_by = Some(inversed_by.into());
        self
    }

    /// Check if this side owns the association.
    pub fn is_owning_side(&self) -> bool {
        self.mapped_by.is_none()
    }

    /// Check if the association points to a single target instance.
    pub fn is_to_one(&self) -> bool {
        matches!(
            self.cardinality,
            Cardinality::OneToOne | Cardinality::ManyToOne
        )
    }

    /// Check if this association was declared by an ancestor.
    pub fn is_inherited(&self) -> bool {
        self.inherited.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_many_to_one_association() {
        let assoc = AssociationMapping::many_to_one("author", "User")
            .with_join_column(JoinColumn::new("author_id", "id"))
            .with_inversed_by("posts");

        assert_eq!(assoc.cardinality, Cardinality::ManyToOne);
        assert!(assoc.is_owning_side());
        assert!(assoc.is_to_one());
        assert_eq!(assoc.join_columns.len(), 1);
    }

    #[test]
    fn test_one_to_many_association() {
        let assoc = AssociationMapping::one_to_many("posts", "Post", "author");

        assert_eq!(assoc.cardinality, Cardinality::OneToMany);
        assert!(!assoc.is_owning_side());
        assert!(!assoc.is_to_one());
    }

    #[test]
    fn test_many_to_many_association() {
        let assoc = AssociationMapping::many_to_many("tags", "Tag", "post_tags");

        assert_eq!(assoc.join_table.as_deref(), Some("post_tags"));
        assert!(assoc.is_owning_side());
        assert!(!assoc.is_inherited());
    }

    #[test]
    fn test_deserialize_ignores_inherited_marker() {
        let assoc: AssociationMapping = serde_json::from_str(
            r#"{"name": "owner", "target_class": "User", "cardinality": "many_to_one",
                "inherited": "Ghost"}"#,
        )
        .unwrap();
        assert!(!assoc.is_inherited());
        assert_eq!(assoc, AssociationMapping::many_to_one("owner", "User"));
    }
}
