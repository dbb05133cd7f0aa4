//! The typekit: a registry, its typelist and its opaque declarations.

use std::cell::OnceCell;
use std::fmt;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use typekit_core::{AsTypeName, Registry, TypeDescriptor, TypeId};

use crate::builder::TypekitBuilder;
use crate::error::{Error, Result};
use crate::opaque::{OpaqueDefinition, OpaqueExtraction};
use crate::typelist::Typelist;

static ARRAY_SUFFIXES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\[\d+\])+$").expect("suffix pattern is valid"));

/// A named bundle of types plus the metadata needed to marshal them.
///
/// Lookups are cached lazily through `OnceCell`, so a `Typekit` is not
/// `Sync`. Wrap it in a `Mutex` to share it between threads.
#[derive(Debug)]
pub struct Typekit {
    name: String,
    registry: Registry,
    typelist: Typelist,
    opaques: Vec<OpaqueDefinition>,
    opaque_registry: Registry,
    imported_typekits: IndexSet<String>,
    is_virtual: bool,
    define_dummy_types: bool,

    has_opaques: OnceCell<bool>,
    /// Synthesized intermediate name to the opaque-containing type it stands for.
    pub(crate) reverse_index: OnceCell<IndexMap<String, TypeId>>,
}

impl Typekit {
    pub fn new(name: impl Into<String>, registry: Registry, typelist: Typelist) -> Self {
        Self {
            name: name.into(),
            registry,
            typelist,
            opaques: Vec::new(),
            opaque_registry: Registry::new(),
            imported_typekits: IndexSet::new(),
            is_virtual: false,
            define_dummy_types: false,
            has_opaques: OnceCell::new(),
            reverse_index: OnceCell::new(),
        }
    }

    /// Build a typekit from registry XML and typelist text with default settings.
    pub fn from_raw_data(name: &str, registry_xml: &str, typelist_txt: &str) -> Result<Self> {
        TypekitBuilder::new(name).build(registry_xml, typelist_txt)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn typelist(&self) -> &Typelist {
        &self.typelist
    }

    pub fn interface_typelist(&self) -> impl Iterator<Item = &str> {
        self.typelist.interface_types()
    }

    pub fn opaques(&self) -> &[OpaqueDefinition] {
        &self.opaques
    }

    /// Sub-registry holding only the opaque base types and their dependencies.
    pub fn opaque_registry(&self) -> &Registry {
        &self.opaque_registry
    }

    pub fn imported_typekits(&self) -> impl Iterator<Item = &str> {
        self.imported_typekits.iter().map(String::as_str)
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn define_dummy_types(&self) -> bool {
        self.define_dummy_types
    }

    pub(crate) fn set_virtual(&mut self, is_virtual: bool) {
        self.is_virtual = is_virtual;
    }

    pub(crate) fn set_define_dummy_types(&mut self, define: bool) {
        self.define_dummy_types = define;
    }

    pub(crate) fn add_import(&mut self, typekit: String) {
        self.imported_typekits.insert(typekit);
    }

    /// Attach extracted opaque declarations.
    pub fn add_opaques(&mut self, extraction: OpaqueExtraction) -> Result<()> {
        self.opaque_registry.merge(&extraction.registry)?;
        self.opaques.extend(extraction.opaques);
        self.invalidate_caches();
        Ok(())
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub(crate) fn typelist_mut(&mut self) -> &mut Typelist {
        &mut self.typelist
    }

    pub(crate) fn invalidate_caches(&mut self) {
        self.has_opaques.take();
        self.reverse_index.take();
    }

    /// Whether `t` is one of this typekit's types.
    pub fn include(&self, t: impl AsTypeName) -> bool {
        self.typelist.contains(t)
    }

    pub fn interface_type(&self, t: impl AsTypeName) -> bool {
        self.typelist.is_interface(t)
    }

    /// Whether the typelist holds an array (of any dimension) of `t`.
    pub fn defines_array_of(&self, t: impl AsTypeName) -> bool {
        let name = t.as_type_name();
        self.typelist.types().any(|entry| {
            entry
                .strip_prefix(name)
                .is_some_and(|suffix| ARRAY_SUFFIXES.is_match(suffix))
        })
    }

    /// Whether one of this typekit's own types is opaque.
    pub fn has_opaques(&self) -> bool {
        *self.has_opaques.get_or_init(|| {
            self.typelist
                .types()
                .any(|name| self.registry.find(name).is_some_and(TypeDescriptor::is_opaque))
        })
    }

    /// Look `t` up in the typekit's registry.
    pub fn resolve_type(&self, t: impl AsTypeName) -> Result<&TypeDescriptor> {
        Ok(self.registry.get(t.as_type_name())?)
    }

    /// Descriptors of the typelist entries, in declaration order.
    pub fn self_types(&self) -> Result<Vec<&TypeDescriptor>> {
        self.typelist
            .types()
            .map(|name| self.resolve_type(name))
            .collect()
    }

    /// The opaque declaration of `t`.
    pub fn opaque_specification(&self, t: impl AsTypeName) -> Result<&OpaqueDefinition> {
        let ty = self.resolve_type(t)?;
        if !ty.is_opaque() {
            return Err(Error::NotOpaque(ty.name().to_owned()));
        }
        self.opaques
            .iter()
            .find(|def| def.type_name == ty.name())
            .ok_or_else(|| Error::InternalInconsistency {
                typekit: self.name.clone(),
                type_name: ty.name().to_owned(),
            })
    }
}

impl fmt::Display for Typekit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typekit {}", self.name)
    }
}
