//! Mapping drivers.
//!
//! A driver reads the mapping facts of one class from some declaration source and
//! writes them into a [`ClassMetadataBuilder`]. Ancestor propagation is the factory's
//! job; a driver only describes the class it is asked about.

mod file;
mod mapping;
mod static_driver;

pub use file::{FileDriver, MappingDocument};
pub use mapping::{ClassMapping, InheritanceMapping};
pub use static_driver::StaticDriver;

use crate::error::Result;
use crate::mapping::ClassMetadataBuilder;
use std::sync::Arc;

/// Source of class-specific mapping facts.
pub trait MappingDriver: Send + Sync {
    /// Populate `target` with the mapping of `class_name`.
    ///
    /// Fails with [`Error::ClassNotFound`](crate::Error::ClassNotFound) when the driver
    /// knows nothing about the class.
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()>;
}

impl<D: MappingDriver + ?Sized> MappingDriver for Box<D> {
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()> {
        (**self).load_metadata_for_class(class_name, target)
    }
}

impl<D: MappingDriver + ?Sized> MappingDriver for Arc<D> {
    fn load_metadata_for_class(
        &self,
        class_name: &str,
        target: &mut ClassMetadataBuilder,
    ) -> Result<()> {
        (**self).load_metadata_for_class(class_name, target)
    }
}
