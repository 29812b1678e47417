//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ormap_core::{
    AssociationMapping, ClassMapping, ClassMetadataBuilder, ColumnType, FieldMapping,
    InheritanceOptions, InheritanceType, JoinColumn, MappingDriver, Result, StaticDriver,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Driver wrapper counting invocations per class.
pub struct CountingDriver {
    inner: StaticDriver,
    calls: Mutex<HashMap<String, usize>>,
}

impl CountingDriver {
    pub fn new(inner: StaticDriver) -> Self {
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &StaticDriver {
        &self.inner
    }

    pub fn calls_for(&self, class_name: &str) -> usize {
        self.calls.lock().get(class_name).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }

    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl MappingDriver for CountingDriver {
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()> {
        *self.calls.lock().entry(class_name.to_string()).or_default() += 1;
        self.inner.load_metadata_for_class(class_name, target)
    }
}

/// Content hierarchy: single-table `Content <- Article <- FeatureArticle`, plus a
/// standalone `UserProfile` and a `Comment` with an explicit table.
pub fn content_driver() -> StaticDriver {
    StaticDriver::new()
        .with_class(
            ClassMapping::new("Content")
                .with_parent("Entity")
                .with_table("contents")
                .with_inheritance(
                    InheritanceType::SingleTable,
                    InheritanceOptions::discriminated("content_type")
                        .with_discriminator("content", "Content")
                        .with_discriminator("article", "Article")
                        .with_discriminator("feature", "FeatureArticle"),
                )
                .with_field(FieldMapping::id("id", ColumnType::BigInt))
                .with_field(FieldMapping::new("title", ColumnType::String).with_length(200))
                .with_association(
                    AssociationMapping::many_to_one("author", "UserProfile")
                        .with_join_column(JoinColumn::new("author_id", "id")),
                ),
        )
        .with_class(
            ClassMapping::new("Article")
                .with_parent("Content")
                .with_table("articles")
                .with_field(FieldMapping::new("body", ColumnType::Text))
                .with_association(AssociationMapping::many_to_many(
                    "tags",
                    "Tag",
                    "article_tags",
                )),
        )
        .with_class(
            ClassMapping::new("FeatureArticle")
                .with_parent("Article")
                .with_field(FieldMapping::nullable("banner", ColumnType::Binary))
                .with_field(FieldMapping::new("title", ColumnType::Text)),
        )
        .with_class(
            ClassMapping::new("UserProfile")
                .with_parent("Entity")
                .with_field(FieldMapping::id("id", ColumnType::Uuid))
                .with_field(FieldMapping::new("email", ColumnType::String).with_unique()),
        )
        .with_class(
            ClassMapping::new("Comment")
                .with_parent("Entity")
                .with_table("post_comments")
                .with_field(FieldMapping::id("id", ColumnType::Integer)),
        )
        .with_class(
            ClassMapping::new("Tag")
                .with_field(FieldMapping::id("name", ColumnType::String)),
        )
}

/// Plain chain `A <- B <- C` without inheritance mapping.
pub fn chain_driver() -> StaticDriver {
    StaticDriver::new()
        .with_class(
            ClassMapping::new("A")
                .with_parent("Entity")
                .with_field(FieldMapping::id("id", ColumnType::Integer)),
        )
        .with_class(
            ClassMapping::new("B")
                .with_parent("A")
                .with_field(FieldMapping::new("b", ColumnType::String)),
        )
        .with_class(
            ClassMapping::new("C")
                .with_parent("B")
                .with_field(FieldMapping::new("c", ColumnType::String)),
        )
}
