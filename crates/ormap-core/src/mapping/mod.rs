//! Mapping descriptors for classes.
//!
//! Drivers describe fields, associations and inheritance of a class with these types;
//! the factory merges them down the hierarchy into [`ClassMetadata`].

mod association;
mod field;
mod inheritance;
mod metadata;
mod types;

pub use association::{AssociationMapping, Cardinality, JoinColumn};
pub use field::FieldMapping;
pub use inheritance::{InheritanceOptions, InheritanceType};
pub use metadata::{ClassMetadata, ClassMetadataBuilder};
pub use types::ColumnType;
