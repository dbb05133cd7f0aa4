use tracing::debug;
use typekit_core::Registry;

use crate::error::Result;
use crate::opaque::extract_opaques;
use crate::typekit::Typekit;
use crate::typelist::Typelist;

pub struct TypekitConfig {
    /// Register the standard C++ types before importing the registry XML.
    pub standard_types: bool,
    /// Build the reverse intermediate index during construction.
    pub eager_reverse_index: bool,
    pub is_virtual: bool,
    pub define_dummy_types: bool,
    pub imports: Vec<String>,
}

impl Default for TypekitConfig {
    fn default() -> Self {
        Self {
            standard_types: true,
            eager_reverse_index: false,
            is_virtual: false,
            define_dummy_types: false,
            imports: Vec::new(),
        }
    }
}

/// Builds a [`Typekit`] from registry XML and typelist text.
pub struct TypekitBuilder {
    name: String,
    config: TypekitConfig,
}

impl TypekitBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: TypekitConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TypekitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_standard_types(mut self, enabled: bool) -> Self {
        self.config.standard_types = enabled;
        self
    }

    pub fn with_eager_reverse_index(mut self, enabled: bool) -> Self {
        self.config.eager_reverse_index = enabled;
        self
    }

    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.config.is_virtual = is_virtual;
        self
    }

    pub fn with_dummy_types(mut self, enabled: bool) -> Self {
        self.config.define_dummy_types = enabled;
        self
    }

    /// Record a typekit this one depends on.
    pub fn with_import(mut self, typekit: impl Into<String>) -> Self {
        self.config.imports.push(typekit.into());
        self
    }

    pub fn build(self, registry_xml: &str, typelist_txt: &str) -> Result<Typekit> {
        let mut registry = Registry::new();
        if self.config.standard_types {
            registry.add_standard_types()?;
        }
        registry.merge_xml(registry_xml)?;

        let typelist = Typelist::parse(typelist_txt);
        let extraction = extract_opaques(registry_xml, &registry)?;

        let mut typekit = Typekit::new(self.name, registry, typelist);
        typekit.add_opaques(extraction)?;
        typekit.set_virtual(self.config.is_virtual);
        typekit.set_define_dummy_types(self.config.define_dummy_types);
        for import in self.config.imports {
            typekit.add_import(import);
        }
        if self.config.eager_reverse_index {
            typekit.prepare_reverse_index();
        }

        debug!(
            typekit = typekit.name(),
            types = typekit.registry().len(),
            listed = typekit.typelist().len(),
            opaques = typekit.opaques().len(),
            "loaded typekit"
        );
        Ok(typekit)
    }
}
