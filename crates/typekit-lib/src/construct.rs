//! Type construction through a typekit.
//!
//! Every registry factory is available as `create_<kind>`, which also adds
//! the new type to the typelist, and `create_interface_<kind>`, which adds it
//! to the interface as well.

use tracing::debug;
use typekit_core::{NumericCategory, TypeCategory, TypeDescriptor, TypeSpec};

use crate::error::{Error, Result};
use crate::typekit::Typekit;

const CREATE_PREFIX: &str = "create_";
const INTERFACE_PREFIX: &str = "interface_";

/// A construction method named as text, e.g. `create_interface_opaque`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constructor {
    pub interface: bool,
    pub category: TypeCategory,
}

impl Constructor {
    /// Parse `create_<kind>` or `create_interface_<kind>`.
    pub fn parse(method: &str) -> Result<Self> {
        let rest = method
            .strip_prefix(CREATE_PREFIX)
            .ok_or_else(|| Error::UnsupportedCapability(method.to_owned()))?;
        let (interface, kind) = match rest.strip_prefix(INTERFACE_PREFIX) {
            Some(kind) => (true, kind),
            None => (false, rest),
        };
        let category = kind
            .parse()
            .map_err(|_| Error::UnsupportedCapability(kind.to_owned()))?;
        Ok(Self {
            interface,
            category,
        })
    }

    pub fn method_name(&self) -> String {
        let interface = if self.interface { INTERFACE_PREFIX } else { "" };
        format!("{CREATE_PREFIX}{interface}{}", self.category)
    }
}

impl Typekit {
    /// Create a type in the registry and add it to the typelist.
    pub fn create(&mut self, spec: TypeSpec) -> Result<&TypeDescriptor> {
        self.construct(spec, false)
    }

    /// Create a type and add it to both the typelist and the interface.
    pub fn create_interface(&mut self, spec: TypeSpec) -> Result<&TypeDescriptor> {
        self.construct(spec, true)
    }

    /// Whether [`Typekit::call`] accepts `method`.
    pub fn responds_to(&self, method: &str) -> bool {
        Constructor::parse(method).is_ok()
    }

    /// Run a construction method given by name, with textual arguments.
    pub fn call(&mut self, method: &str, args: &[&str]) -> Result<&TypeDescriptor> {
        let constructor = Constructor::parse(method)?;
        let spec = TypeSpec::from_args(constructor.category, args)?;
        self.construct(spec, constructor.interface)
    }

    fn construct(&mut self, spec: TypeSpec, interface: bool) -> Result<&TypeDescriptor> {
        let category = spec.category();
        // Aliases are listed under their own name, not their target's.
        let alias = match &spec {
            TypeSpec::Alias { name, .. } => Some(name.clone()),
            _ => None,
        };
        let created = self.registry_mut().create(spec)?.name().to_owned();
        let name = alias.unwrap_or(created);
        debug!(typekit = self.name(), %category, name = %name, interface, "created type");

        self.typelist_mut().insert(name.as_str(), interface);
        self.invalidate_caches();
        self.resolve_type(name)
    }
}

macro_rules! construction_table {
    ($(
        $(#[$doc:meta])*
        $create:ident, $create_interface:ident ($($arg:ident: $ty:ty),*)
            => $variant:ident { $($field:ident $(: $value:expr)?),* };
    )*) => {
        impl Typekit {
            $(
                $(#[$doc])*
                pub fn $create(&mut self, $($arg: $ty),*) -> Result<&TypeDescriptor> {
                    self.create(TypeSpec::$variant { $($field $(: $value)?),* })
                }

                $(#[$doc])*
                ///
                /// The type is also added to the interface.
                pub fn $create_interface(&mut self, $($arg: $ty),*) -> Result<&TypeDescriptor> {
                    self.create_interface(TypeSpec::$variant { $($field $(: $value)?),* })
                }
            )*
        }
    };
}

construction_table! {
    /// Create a type without content.
    create_null, create_interface_null(name: &str)
        => Null { name: name.to_owned() };
    create_numeric, create_interface_numeric(name: &str, size: usize, category: NumericCategory)
        => Numeric { name: name.to_owned(), size, category };
    /// Create an opaque type of the given size.
    create_opaque, create_interface_opaque(name: &str, size: usize)
        => Opaque { name: name.to_owned(), size };
    create_enum, create_interface_enum(name: &str, values: Vec<(String, i64)>)
        => Enum { name: name.to_owned(), values };
    /// Create a compound from `(field, type)` pairs laid out in order.
    create_compound, create_interface_compound(name: &str, fields: Vec<(String, String)>)
        => Compound { name: name.to_owned(), fields };
    /// Create `element[length]`.
    create_array, create_interface_array(element: &str, length: usize)
        => Array { element: element.to_owned(), length };
    /// Create `kind<element>`.
    create_container, create_interface_container(kind: &str, element: &str)
        => Container { kind: kind.to_owned(), element: element.to_owned() };
    create_alias, create_interface_alias(name: &str, target: &str)
        => Alias { name: name.to_owned(), target: target.to_owned() };
}
