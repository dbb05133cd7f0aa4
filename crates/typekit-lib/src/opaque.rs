//! Opaque declarations carried by registry XML.
//!
//! ```xml
//! <opaque name="/base/Angle" size="8" marshal_as="/base/Angle_m"
//!         includes="base/Angle.hpp:base/Float.hpp" needs_copy="1"/>
//! ```

use std::cell::OnceCell;

use roxmltree::Document;
use serde::Serialize;
use tracing::{debug, trace};
use typekit_core::{Registry, TypeId};

use crate::error::{Error, Result};

/// How one opaque type is marshalled.
#[derive(Clone, Debug, Serialize)]
pub struct OpaqueDefinition {
    /// Canonical name of the opaque type.
    pub type_name: String,
    /// Name of the type it is converted to for marshalling.
    pub intermediate: String,
    /// Headers needed to convert between the two.
    pub includes: Vec<String>,
    /// Whether conversion needs a copy of the value.
    pub needs_copy: bool,
    #[serde(skip)]
    pub(crate) resolved_intermediate: OnceCell<TypeId>,
}

impl OpaqueDefinition {
    pub fn new(
        type_name: impl Into<String>,
        intermediate: impl Into<String>,
        includes: Vec<String>,
        needs_copy: bool,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            intermediate: intermediate.into(),
            includes,
            needs_copy,
            resolved_intermediate: OnceCell::new(),
        }
    }

    /// The intermediate type's handle in `registry`, resolved on first use.
    pub fn intermediate_id(&self, registry: &Registry) -> Result<TypeId> {
        if let Some(&id) = self.resolved_intermediate.get() {
            return Ok(id);
        }
        let id = registry.id_of(self.intermediate.as_str())?;
        Ok(*self.resolved_intermediate.get_or_init(|| id))
    }
}

impl PartialEq for OpaqueDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.intermediate == other.intermediate
            && self.includes == other.includes
            && self.needs_copy == other.needs_copy
    }
}

impl Eq for OpaqueDefinition {}

/// Result of [`extract_opaques`].
#[derive(Debug, Default)]
pub struct OpaqueExtraction {
    pub opaques: Vec<OpaqueDefinition>,
    /// Just the opaque base types and what they depend on.
    pub registry: Registry,
}

/// Collect every `<opaque>` element of `xml`, checking each against `registry`.
///
/// Elements are found at any depth. The base type must be registered and
/// opaque.
pub fn extract_opaques(xml: &str, registry: &Registry) -> Result<OpaqueExtraction> {
    let doc = Document::parse(xml)?;
    let mut extraction = OpaqueExtraction::default();

    for node in doc.descendants().filter(|n| n.has_tag_name("opaque")) {
        let attribute = |name: &str| {
            node.attribute(name).ok_or_else(|| {
                Error::MalformedOpaque(format!("missing `{name}` attribute"))
            })
        };
        let base = attribute("name")?;
        let intermediate = attribute("marshal_as")?;

        let ty = registry.get(base)?;
        if !ty.is_opaque() {
            return Err(Error::NotOpaque(base.to_owned()));
        }

        let includes = node
            .attribute("includes")
            .unwrap_or_default()
            .split(':')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        let needs_copy = node.attribute("needs_copy") == Some("1");

        trace!(opaque = ty.name(), intermediate, needs_copy, "extracted opaque");
        extraction.registry.merge(&registry.minimal(ty)?)?;
        extraction.opaques.push(OpaqueDefinition::new(
            ty.name(),
            intermediate,
            includes,
            needs_copy,
        ));
    }

    debug!(count = extraction.opaques.len(), "extracted opaque declarations");
    Ok(extraction)
}
