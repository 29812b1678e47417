//! ORMAP Core - Class metadata resolution for ORM inheritance hierarchies.
//!
//! Given a [`ClassHierarchy`] and a [`MappingDriver`], the [`ClassMetadataFactory`]
//! derives a flattened [`ClassMetadata`] for each class: table name, field and
//! association mappings, inheritance strategy and identifier. Mappings declared on an
//! ancestor are merged down into its subclasses and marked with the declaring class.
//!
//! ```ignore
//! use ormap_core::{ClassMetadataFactory, FileDriver};
//!
//! let driver = FileDriver::open("mapping.json")?;
//! let hierarchy = driver.hierarchy().clone();
//! let factory = ClassMetadataFactory::new(driver, hierarchy);
//!
//! let metadata = factory.get_metadata_for("UserProfile")?;
//! assert_eq!(metadata.table_name(), "user_profile");
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod factory;
pub mod hierarchy;
pub mod mapping;
pub mod naming;

pub use config::MetadataConfig;
pub use driver::{ClassMapping, FileDriver, MappingDocument, MappingDriver, StaticDriver};
pub use error::{Error, Result};
pub use factory::{ClassMetadataFactory, FactoryStats};
pub use hierarchy::ClassHierarchy;
pub use mapping::{
    AssociationMapping, Cardinality, ClassMetadata, ClassMetadataBuilder, ColumnType,
    FieldMapping, InheritanceOptions, InheritanceType, JoinColumn,
};
pub use naming::tableize;
