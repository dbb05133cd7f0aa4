//! The type registry.
//!
//! A registry owns type descriptors keyed by name, in insertion order. Every
//! type is inserted after the types it references, so iteration order is
//! always a valid dependency order.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{RegistryError, Result};
use crate::names::is_valid_typename;
use crate::types::{AsTypeName, TypeData, TypeDescriptor, TypeId};

/// Canonical store of structural type descriptors.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, TypeDescriptor>,
    /// Alias name to canonical type name. Chains are collapsed on insertion.
    aliases: IndexMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of types, aliases excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, name: impl AsTypeName) -> bool {
        self.find(name).is_some()
    }

    /// Look up a type by name, following aliases.
    pub fn find(&self, name: impl AsTypeName) -> Option<&TypeDescriptor> {
        self.types.get(self.canonical_name(name.as_type_name()))
    }

    /// Look up a type by name, following aliases.
    pub fn get(&self, name: impl AsTypeName) -> Result<&TypeDescriptor> {
        let name = name.as_type_name();
        self.find(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    pub fn id_of(&self, name: impl AsTypeName) -> Result<TypeId> {
        let name = name.as_type_name();
        self.types
            .get_index_of(self.canonical_name(name))
            .map(|i| TypeId(i as u32))
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    /// Resolve a handle back to its descriptor.
    ///
    /// # Panics
    /// Panics if the handle was not issued by this registry.
    #[inline]
    pub fn resolve(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.index()]
    }

    #[inline]
    pub fn try_resolve(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get_index(id.index()).map(|(_, ty)| ty)
    }

    /// Iterate over all types in dependency order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types
            .values()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Iterate over `(alias, canonical name)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    /// Register `name` as another name for `target`.
    pub fn alias(&mut self, name: &str, target: &str) -> Result<&TypeDescriptor> {
        if !is_valid_typename(name) {
            return Err(RegistryError::InvalidName(name.to_owned()));
        }
        let canonical = self.get(target)?.name().to_owned();
        if self.types.contains_key(name) {
            return Err(RegistryError::Conflict(name.to_owned()));
        }
        if let Some(existing) = self.aliases.get(name)
            && *existing != canonical
        {
            return Err(RegistryError::Conflict(name.to_owned()));
        }

        trace!(alias = name, target = %canonical, "registering alias");
        self.aliases.insert(name.to_owned(), canonical);
        self.get(target)
    }

    /// Insert a type whose dependencies are already registered.
    ///
    /// Re-inserting an identical definition returns the existing handle.
    pub(crate) fn insert(&mut self, name: String, size: usize, data: TypeData) -> Result<TypeId> {
        if !is_valid_typename(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        if self.aliases.contains_key(&name) {
            return Err(RegistryError::Conflict(name));
        }

        let mut contains_opaques = matches!(data, TypeData::Opaque);
        for dependency in data.dependencies() {
            contains_opaques |= self.get(dependency)?.contains_opaques();
        }

        let descriptor = TypeDescriptor::new(name, size, data, contains_opaques);
        if let Some((index, _, existing)) = self.types.get_full(descriptor.name()) {
            return if existing.same_definition(&descriptor) {
                Ok(TypeId(index as u32))
            } else {
                Err(RegistryError::Conflict(descriptor.name().to_owned()))
            };
        }

        trace!(name = descriptor.name(), category = %descriptor.category(), "inserting type");
        let (index, _) = self
            .types
            .insert_full(descriptor.name().to_owned(), descriptor);
        Ok(TypeId(index as u32))
    }

    /// Extract the sub-registry needed to define `name`.
    ///
    /// Contains the type, everything it references transitively, and the
    /// aliases that point into that set.
    pub fn minimal(&self, name: impl AsTypeName) -> Result<Registry> {
        let name = name.as_type_name();
        let root = self.get(name)?;

        let mut result = Registry::new();
        self.copy_with_dependencies(root, &mut result)?;
        for (alias, target) in &self.aliases {
            if result.types.contains_key(target) {
                result.aliases.insert(alias.clone(), target.clone());
            }
        }
        Ok(result)
    }

    fn copy_with_dependencies(&self, ty: &TypeDescriptor, into: &mut Registry) -> Result<()> {
        if into.types.contains_key(ty.name()) {
            return Ok(());
        }
        for dependency in ty.data().dependencies() {
            self.copy_with_dependencies(self.get(dependency)?, into)?;
        }
        into.types.insert(ty.name().to_owned(), ty.clone());
        Ok(())
    }

    /// Add every type and alias of `other` to this registry.
    ///
    /// Types already present must have identical definitions. Each alias is
    /// registered right after its target, before any type that uses it.
    pub fn merge(&mut self, other: &Registry) -> Result<()> {
        for ty in other.types.values() {
            self.insert(ty.name().to_owned(), ty.size(), ty.data().clone())?;
            for (alias, target) in &other.aliases {
                if target == ty.name() {
                    self.alias(alias, target)?;
                }
            }
        }
        Ok(())
    }

    fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }
}
