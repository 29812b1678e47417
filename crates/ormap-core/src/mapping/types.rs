//! Column type descriptors.

use serde::{Deserialize, Serialize};

/// Storage type of a mapped column.
///
/// Values are only named here; converting between application values and their
/// storage representation is left to the type converters of the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Boolean value.
    Boolean,
    /// 16-bit signed integer.
    SmallInt,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    BigInt,
    /// Floating point number.
    Float,
    /// Fixed-precision decimal.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Number of digits after decimal point.
        scale: u8,
    },
    /// Bounded string.
    String,
    /// Unbounded text.
    Text,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// JSON document.
    Json,
    /// Binary data.
    Binary,
    /// UUID (128-bit identifier).
    Uuid,
    /// Type handled by a registered custom converter.
    Custom(String),
}

impl ColumnType {
    /// Create a custom column type.
    pub fn custom(name: impl Into<String>) -> Self {
        ColumnType::Custom(name.into())
    }

    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::SmallInt
                | ColumnType::Integer
                | ColumnType::BigInt
                | ColumnType::Float
                | ColumnType::Decimal { .. }
        )
    }

    /// Check if this type is a string-like type.
    pub fn is_string_like(&self) -> bool {
        matches!(self, ColumnType::String | ColumnType::Text | ColumnType::Json)
    }

    /// The type name as written in mapping documents.
    pub fn name(&self) -> &str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::SmallInt => "small_int",
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "big_int",
            ColumnType::Float => "float",
            ColumnType::Decimal { .. } => "decimal",
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::DateTime => "date_time",
            ColumnType::Json => "json",
            ColumnType::Binary => "binary",
            ColumnType::Uuid => "uuid",
            ColumnType::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Decimal { precision, scale } => {
                write!(f, "decimal({}, {})", precision, scale)
            }
            other => f.write_str(other.name()),
        }
    }
}
