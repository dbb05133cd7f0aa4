//! Intermediate types: the marshallable stand-ins of opaque-containing types.
//!
//! Forward resolution is a pure function of the registry and the opaque
//! declarations. Reverse resolution consults an index from synthesized
//! intermediate names to their sources, built on first use.

use indexmap::IndexMap;
use tracing::{debug, trace};
use typekit_core::names::{SEPARATOR, array_name, container_name, split_typename};
use typekit_core::{AsTypeName, TypeData, TypeDescriptor, TypeId};

use crate::error::Result;
use crate::typekit::Typekit;

/// Suffix of generated intermediate type names.
const INTERMEDIATE_SUFFIX: &str = "_m";

/// Name generated for the intermediate of an opaque-containing compound.
///
/// Every segment has `<`, `>`, `[`, `]`, `,`, space and nested `/` replaced
/// by `_`, and `_m` is appended.
///
/// # Examples
/// ```
/// use typekit_lib::synthesized_intermediate_name;
/// assert_eq!(synthesized_intermediate_name("/base/Pose"), "/base/Pose_m");
/// assert_eq!(
///     synthesized_intermediate_name("/base/Wrapper</base/Angle>"),
///     "/base/Wrapper__base_Angle__m",
/// );
/// ```
pub fn synthesized_intermediate_name(name: &str) -> String {
    let segments: Vec<String> = split_typename(name)
        .into_iter()
        .map(|segment| {
            segment
                .chars()
                .map(|c| match c {
                    '<' | '>' | '[' | ']' | ',' | ' ' | SEPARATOR => '_',
                    c => c,
                })
                .collect()
        })
        .collect();
    format!("{SEPARATOR}{}{INTERMEDIATE_SUFFIX}", segments.join("/"))
}

impl Typekit {
    /// Name of the type used to marshal `t`.
    ///
    /// Opaques map to their declared intermediate; arrays and containers
    /// holding opaques map element-wise; other opaque-containing types get a
    /// synthesized name. Anything else is its own intermediate.
    pub fn intermediate_type_name_for(&self, t: impl AsTypeName) -> Result<String> {
        self.intermediate_name(self.resolve_type(t)?)
    }

    fn intermediate_name(&self, ty: &TypeDescriptor) -> Result<String> {
        if ty.is_opaque() {
            return Ok(self.opaque_specification(ty)?.intermediate.clone());
        }
        if !ty.contains_opaques() {
            return Ok(ty.name().to_owned());
        }

        match ty.data() {
            TypeData::Array { element, length } => {
                let element = self.resolve_type(element)?;
                Ok(array_name(&self.intermediate_name(element)?, *length))
            }
            TypeData::Container { kind, element } => {
                let element = self.resolve_type(element)?;
                Ok(container_name(kind, &self.intermediate_name(element)?))
            }
            _ => Ok(synthesized_intermediate_name(ty.name())),
        }
    }

    /// The registered intermediate type of `t`.
    pub fn intermediate_type_for(&self, t: impl AsTypeName) -> Result<&TypeDescriptor> {
        let ty = self.resolve_type(t)?;
        if ty.is_opaque() {
            let id = self
                .opaque_specification(ty)?
                .intermediate_id(self.registry())?;
            return Ok(self.registry().resolve(id));
        }
        let name = self.intermediate_name(ty)?;
        self.resolve_type(name)
    }

    /// The opaque (or opaque-containing) type `t` is the intermediate of.
    pub fn find_opaque_for_intermediate(
        &self,
        t: impl AsTypeName,
    ) -> Result<Option<&TypeDescriptor>> {
        self.find_opaque(self.resolve_type(t)?)
    }

    fn find_opaque(&self, ty: &TypeDescriptor) -> Result<Option<&TypeDescriptor>> {
        if self.looks_generated(ty) {
            // A built index is authoritative; before that, try the cheap candidate.
            if self.reverse_index.get().is_none()
                && let Some(source) = self.stripped_source(ty)
            {
                return Ok(Some(source));
            }
            if let Some(&id) = self.reverse_index().get(ty.name()) {
                return Ok(Some(self.registry().resolve(id)));
            }
        }

        if let TypeData::Container { kind, element } = ty.data()
            && let Some(opaque) = self.find_opaque(self.resolve_type(element)?)?
            && let Some(container) = self.registry().find(container_name(kind, opaque.name()))
        {
            return Ok(Some(container));
        }

        let declared = self.opaques().iter().find(|def| {
            self.registry()
                .find(def.intermediate.as_str())
                .is_some_and(|intermediate| intermediate.name() == ty.name())
        });
        Ok(declared.and_then(|def| self.registry().find(def.type_name.as_str())))
    }

    /// Cheap check before building the index: `/ns/T_m` usually comes from `/ns/T`.
    fn stripped_source(&self, ty: &TypeDescriptor) -> Option<&TypeDescriptor> {
        let candidate = self
            .registry()
            .find(ty.name().strip_suffix(INTERMEDIATE_SUFFIX)?)?;
        let matches = candidate.contains_opaques()
            && self
                .intermediate_name(candidate)
                .is_ok_and(|name| name == ty.name());
        matches.then_some(candidate)
    }

    /// Whether `ty`, or the innermost element of an array or container, has
    /// a generated intermediate name.
    fn looks_generated(&self, ty: &TypeDescriptor) -> bool {
        let mut current = ty;
        loop {
            if current.name().ends_with(INTERMEDIATE_SUFFIX) {
                return true;
            }
            match current.element().and_then(|e| self.registry().find(e)) {
                Some(element) => current = element,
                None => return false,
            }
        }
    }

    pub fn is_intermediate_type(&self, t: impl AsTypeName) -> Result<bool> {
        Ok(self.find_opaque_for_intermediate(t)?.is_some())
    }

    /// The opaque type `t` stands for, or `t` itself.
    pub fn opaque_type_for(&self, t: impl AsTypeName) -> Result<&TypeDescriptor> {
        let ty = self.resolve_type(t)?;
        Ok(self.find_opaque(ty)?.unwrap_or(ty))
    }

    /// Build the reverse index now instead of on the first reverse lookup.
    pub fn prepare_reverse_index(&self) {
        self.reverse_index();
    }

    pub(crate) fn reverse_index(&self) -> &IndexMap<String, TypeId> {
        self.reverse_index.get_or_init(|| {
            let mut index = IndexMap::new();
            for (id, ty) in self.registry().iter() {
                if !ty.contains_opaques() {
                    continue;
                }
                match self.intermediate_name(ty) {
                    Ok(name) => {
                        trace!(intermediate = %name, source = ty.name(), "indexing intermediate");
                        // Later sources win on colliding names.
                        index.insert(name, id);
                    }
                    Err(err) => debug!(source = ty.name(), %err, "no intermediate"),
                }
            }
            debug!(typekit = self.name(), entries = index.len(), "built reverse intermediate index");
            index
        })
    }
}
