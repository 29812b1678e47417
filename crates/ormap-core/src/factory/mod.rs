//! Class metadata factory.
//!
//! Resolves the metadata of a class together with every ancestor that is not cached
//! yet. Resolution starts at the highest unresolved ancestor and walks back down: each
//! subclass starts from its parent's inheritance settings, fields and associations,
//! then receives its own driver facts.

mod stats;

pub use stats::FactoryStats;

use crate::config::MetadataConfig;
use crate::driver::MappingDriver;
use crate::error::{Error, Result};
use crate::hierarchy::ClassHierarchy;
use crate::mapping::{ClassMetadata, ClassMetadataBuilder};
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Resolves and caches [`ClassMetadata`] for the classes of a hierarchy.
///
/// Cached entries are never evicted. Reads go straight to the cache; resolution
/// passes are serialized so each class is resolved at most once.
pub struct ClassMetadataFactory<D> {
    driver: D,
    hierarchy: ClassHierarchy,
    config: MetadataConfig,
    loaded: DashMap<String, Arc<ClassMetadata>>,
    resolve_lock: Mutex<()>,
    stats: FactoryStats,
}

impl<D: MappingDriver> ClassMetadataFactory<D> {
    /// Create a factory with the default configuration.
    pub fn new(driver: D, hierarchy: ClassHierarchy) -> Self {
        Self::with_config(driver, hierarchy, MetadataConfig::default())
    }

    /// Create a factory with an explicit configuration.
    pub fn with_config(driver: D, hierarchy: ClassHierarchy, config: MetadataConfig) -> Self {
        Self {
            driver,
            hierarchy,
            config,
            loaded: DashMap::new(),
            resolve_lock: Mutex::new(()),
            stats: FactoryStats::default(),
        }
    }

    /// The mapping driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The class hierarchy.
    pub fn hierarchy(&self) -> &ClassHierarchy {
        &self.hierarchy
    }

    /// The resolution configuration.
    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Cache statistics.
    pub fn stats(&self) -> &FactoryStats {
        &self.stats
    }

    /// Get the metadata of a class, resolving it and its uncached ancestors if needed.
    ///
    /// Repeated calls return the same instance. On failure, ancestors resolved before
    /// the failing class stay cached.
    #[instrument(skip(self))]
    pub fn get_metadata_for(&self, class_name: &str) -> Result<Arc<ClassMetadata>> {
        if let Some(metadata) = self.cached(class_name) {
            self.stats.record_hit();
            return Ok(metadata);
        }

        if class_name.is_empty()
            || self.config.is_root_marker(class_name)
            || !self.hierarchy.contains(class_name)
        {
            return Err(Error::UnknownClass(class_name.to_string()));
        }

        let _guard = self.resolve_lock.lock();

        // Another caller may have finished the same class while we waited.
        if let Some(metadata) = self.cached(class_name) {
            self.stats.record_hit();
            return Ok(metadata);
        }
        self.stats.record_miss();

        match self.load_classes(class_name) {
            Ok(metadata) => {
                info!(
                    class = class_name,
                    table = metadata.table_name(),
                    fields = metadata.field_mappings().len(),
                    "resolved class metadata"
                );
                Ok(metadata)
            }
            Err(e) => {
                warn!(class = class_name, error = %e, "class metadata resolution failed");
                Err(e)
            }
        }
    }

    /// Check if the metadata of a class is already cached.
    pub fn has_metadata_for(&self, class_name: &str) -> bool {
        self.loaded.contains_key(class_name)
    }

    /// Names of all cached classes, sorted.
    pub fn loaded_class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loaded.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }

    /// Resolve every class of the hierarchy, sorted by class name.
    pub fn get_all_metadata(&self) -> Result<Vec<Arc<ClassMetadata>>> {
        self.hierarchy
            .classes()
            .into_iter()
            .filter(|name| !self.config.is_root_marker(name))
            .map(|name| self.get_metadata_for(name))
            .collect()
    }

    fn cached(&self, class_name: &str) -> Option<Arc<ClassMetadata>> {
        self.loaded.get(class_name).map(|e| Arc::clone(e.value()))
    }

    /// Resolve `name` and the ancestors between it and the nearest cached one.
    fn load_classes(&self, name: &str) -> Result<Arc<ClassMetadata>> {
        let mut path = Vec::new();
        let mut loaded_parent = None;
        let mut seen: HashSet<&str> = HashSet::from([name]);
        let mut current = name;

        while let Some(parent) = self.hierarchy.parent_of(current) {
            if self.config.is_root_marker(parent) {
                break;
            }
            if let Some(metadata) = self.cached(parent) {
                loaded_parent = Some(metadata);
                break;
            }
            if !self.hierarchy.contains(parent) {
                return Err(Error::ClassNotFound(parent.to_string()));
            }
            if !seen.insert(parent) {
                return Err(Error::CyclicInheritance(parent.to_string()));
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        path.push(name);

        let mut remaining = path.into_iter();
        let mut parent = match loaded_parent {
            Some(metadata) => metadata,
            None => {
                // The walk always yields at least `name`.
                let root = remaining
                    .next()
                    .ok_or_else(|| Error::UnknownClass(name.to_string()))?;
                let metadata = self.load_root(root)?;
                self.store(metadata)
            }
        };

        for subclass in remaining {
            let metadata = self.load_subclass(subclass, &parent)?;
            parent = self.store(metadata);
        }

        Ok(parent)
    }

    fn load_root(&self, name: &str) -> Result<ClassMetadata> {
        let mut builder = ClassMetadataBuilder::new(name);
        self.load_metadata(&mut builder)?;
        self.complete_root_inheritance(&mut builder)?;
        builder.complete_identifier_mapping()
    }

    fn load_subclass(&self, name: &str, parent: &ClassMetadata) -> Result<ClassMetadata> {
        let mut builder = ClassMetadataBuilder::new(name);
        builder.set_inheritance_type(
            parent.inheritance_type(),
            parent.inheritance_options().clone(),
        );
        add_inherited_fields(&mut builder, parent);
        add_inherited_associations(&mut builder, parent);

        self.load_metadata(&mut builder)?;
        inherit_unset_options(&mut builder, parent);

        if builder.inheritance_type() != parent.inheritance_type()
            || builder.inheritance_options() != parent.inheritance_options()
        {
            return Err(Error::invalid_inheritance(
                name,
                format!(
                    "inheritance must be declared on the hierarchy root '{}' only",
                    parent.root_class_name()
                ),
            ));
        }

        if parent.is_inheritance_type_single_table() {
            builder.set_table_name(parent.table_name());
        }

        builder.complete_identifier_mapping()
    }

    /// Record the ancestor chain and apply the driver's facts.
    fn load_metadata(&self, builder: &mut ClassMetadataBuilder) -> Result<()> {
        let name = builder.class_name().to_string();
        let parents = self.hierarchy.ancestors(&name, &self.config)?;
        builder.set_parent_classes(parents);

        self.driver.load_metadata_for_class(&name, builder)?;
        debug!(
            class = %name,
            fields = builder.field_mappings().len(),
            associations = builder.association_mappings().len(),
            "loaded driver metadata"
        );
        Ok(())
    }

    /// Validate the root's inheritance declaration and fill in defaults.
    fn complete_root_inheritance(&self, builder: &mut ClassMetadataBuilder) -> Result<()> {
        let inheritance_type = builder.inheritance_type();
        let options = builder.inheritance_options();

        options
            .check_against(inheritance_type)
            .map_err(|reason| Error::invalid_inheritance(builder.class_name(), reason))?;

        if !inheritance_type.uses_discriminator() {
            return Ok(());
        }

        if let Some(unknown) = options
            .discriminator_map
            .values()
            .find(|class| !self.hierarchy.contains(class))
        {
            return Err(Error::invalid_inheritance(
                builder.class_name(),
                format!("discriminator map references unknown class '{}'", unknown),
            ));
        }

        if options.discriminator_column.is_none() {
            builder.inheritance_options_mut().discriminator_column =
                Some(self.config.default_discriminator_column.clone());
        }

        Ok(())
    }

    fn store(&self, metadata: ClassMetadata) -> Arc<ClassMetadata> {
        let metadata = Arc::new(metadata);
        self.loaded
            .insert(metadata.class_name().to_string(), Arc::clone(&metadata));
        self.stats.record_resolved();
        debug!(
            class = metadata.class_name(),
            table = metadata.table_name(),
            "cached class metadata"
        );
        metadata
    }
}

/// Fill discriminator options a subclass left unset when restating its parent's strategy.
fn inherit_unset_options(builder: &mut ClassMetadataBuilder, parent: &ClassMetadata) {
    if builder.inheritance_type() != parent.inheritance_type() {
        return;
    }
    let inherited = parent.inheritance_options();
    let options = builder.inheritance_options_mut();
    if options.discriminator_column.is_none() {
        options.discriminator_column = inherited.discriminator_column.clone();
    }
    if options.discriminator_map.is_empty() {
        options.discriminator_map = inherited.discriminator_map.clone();
    }
}

/// Copy the parent's fields, marking each with the class that declared it.
fn add_inherited_fields(builder: &mut ClassMetadataBuilder, parent: &ClassMetadata) {
    for mapping in parent.field_mappings() {
        let mut mapping = mapping.clone();
        if mapping.inherited.is_none() {
            mapping.inherited = Some(parent.class_name().to_string());
        }
        builder.add_field_mapping(mapping);
    }
}

/// Copy the parent's associations, marking each with the class that declared it.
fn add_inherited_associations(builder: &mut ClassMetadataBuilder, parent: &ClassMetadata) {
    for mapping in parent.association_mappings() {
        let mut mapping = mapping.clone();
        if mapping.inherited.is_none() {
            mapping.inherited = Some(parent.class_name().to_string());
        }
        builder.add_association_mapping(mapping);
    }
}
