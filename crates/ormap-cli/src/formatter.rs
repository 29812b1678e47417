//! Output formatters for resolved metadata.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use ormap_core::{Cardinality, ClassMetadata, InheritanceType};
use std::sync::Arc;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a summary of several classes.
    fn format_class_list(&self, classes: &[Arc<ClassMetadata>]) -> String;

    /// Format the full metadata of one class.
    fn format_class(&self, metadata: &ClassMetadata) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_class_list(&self, classes: &[Arc<ClassMetadata>]) -> String {
        let mut table = Table::new();
        table.set_header(vec![
            "Class",
            "Table",
            "Parent",
            "Inheritance",
            "Fields",
            "Identifier",
        ]);

        for metadata in classes {
            table.add_row(vec![
                Cell::new(metadata.class_name()),
                Cell::new(metadata.table_name()),
                Cell::new(metadata.parent_classes().first().map_or("-", String::as_str)),
                Cell::new(inheritance_label(metadata.inheritance_type())),
                Cell::new(metadata.field_mappings().len()),
                Cell::new(metadata.identifier().join(", ")),
            ]);
        }

        format!("{}\n{} class(es)", table, classes.len())
    }

    fn format_class(&self, metadata: &ClassMetadata) -> String {
        let mut output = format!(
            "Class: {}\nTable: {}\nInheritance: {}",
            metadata.class_name(),
            metadata.table_name(),
            inheritance_label(metadata.inheritance_type())
        );
        if let Some(column) = metadata.discriminator_column() {
            output.push_str(&format!(" (discriminator: {})", column));
        }
        if !metadata.is_root() {
            output.push_str(&format!(
                "\nParents: {}",
                metadata.parent_classes().join(" -> ")
            ));
        }

        let mut fields = Table::new();
        fields.set_header(vec!["Field", "Column", "Type", "Nullable", "Id", "Inherited from"]);
        for field in metadata.field_mappings() {
            fields.add_row(vec![
                Cell::new(&field.field_name),
                Cell::new(field.column_name()),
                Cell::new(&field.column_type),
                Cell::new(yes_no(field.nullable)),
                Cell::new(yes_no(field.is_identifier())),
                Cell::new(field.inherited.as_deref().unwrap_or("-")),
            ]);
        }
        output.push_str(&format!("\n\n{}", fields));

        if !metadata.association_mappings().is_empty() {
            let mut associations = Table::new();
            associations.set_header(vec!["Association", "Target", "Cardinality", "Inherited from"]);
            for association in metadata.association_mappings() {
                associations.add_row(vec![
                    Cell::new(&association.field_name),
                    Cell::new(&association.target_class),
                    Cell::new(cardinality_label(association.cardinality)),
                    Cell::new(association.inherited.as_deref().unwrap_or("-")),
                ]);
            }
            output.push_str(&format!("\n\n{}", associations));
        }

        output
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_class_list(&self, classes: &[Arc<ClassMetadata>]) -> String {
        let values: Vec<&ClassMetadata> = classes.iter().map(|m| m.as_ref()).collect();
        serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_class(&self, metadata: &ClassMetadata) -> String {
        serde_json::to_string_pretty(metadata).unwrap_or_else(|_| "{}".to_string())
    }
}

fn inheritance_label(inheritance_type: InheritanceType) -> &'static str {
    match inheritance_type {
        InheritanceType::None => "none",
        InheritanceType::SingleTable => "single table",
        InheritanceType::Joined => "joined",
        InheritanceType::TablePerClass => "table per class",
    }
}

fn cardinality_label(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::OneToOne => "one-to-one",
        Cardinality::ManyToOne => "many-to-one",
        Cardinality::OneToMany => "one-to-many",
        Cardinality::ManyToMany => "many-to-many",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
