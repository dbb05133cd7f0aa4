//! Structural type descriptors.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::UnknownCategory;

/// A handle to a type inside one [`Registry`](crate::Registry).
///
/// Handles are dense insertion indices. Types are never removed from a
/// registry, so a handle stays valid for the registry's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Representation of a numeric type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericCategory {
    Signed,
    Unsigned,
    Float,
}

impl NumericCategory {
    /// Parse the category spelling used in registry XML (`sint`, `uint`, `float`).
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "sint" => Some(Self::Signed),
            "uint" => Some(Self::Unsigned),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    pub fn as_xml(self) -> &'static str {
        match self {
            Self::Signed => "sint",
            Self::Unsigned => "uint",
            Self::Float => "float",
        }
    }
}

/// A named, typed member of a compound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub offset: usize,
}

/// Kind-specific part of a type descriptor.
///
/// Element and field types are referenced by name; the registry guarantees
/// they exist before the referencing type is inserted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeData {
    Null,
    Numeric { category: NumericCategory },
    Enum { values: IndexMap<String, i64> },
    /// Layout unknown to the registry; marshalled through an intermediate.
    Opaque,
    Array { element: String, length: usize },
    Container { kind: String, element: String },
    Compound { fields: Vec<Field> },
}

impl TypeData {
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Null => TypeCategory::Null,
            Self::Numeric { .. } => TypeCategory::Numeric,
            Self::Enum { .. } => TypeCategory::Enum,
            Self::Opaque => TypeCategory::Opaque,
            Self::Array { .. } => TypeCategory::Array,
            Self::Container { .. } => TypeCategory::Container,
            Self::Compound { .. } => TypeCategory::Compound,
        }
    }

    /// Names of the types this one is built from, in declaration order.
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            Self::Array { element, .. } | Self::Container { element, .. } => {
                vec![element.as_str()]
            }
            Self::Compound { fields } => fields.iter().map(|f| f.type_name.as_str()).collect(),
            Self::Null | Self::Numeric { .. } | Self::Enum { .. } | Self::Opaque => Vec::new(),
        }
    }
}

/// Structural description of one registered type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    name: String,
    size: usize,
    #[serde(flatten)]
    data: TypeData,
    contains_opaques: bool,
}

impl TypeDescriptor {
    pub(crate) fn new(name: String, size: usize, data: TypeData, contains_opaques: bool) -> Self {
        Self {
            name,
            size,
            data,
            contains_opaques,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes. For arrays, the total size of all elements.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn data(&self) -> &TypeData {
        &self.data
    }

    pub fn category(&self) -> TypeCategory {
        self.data.category()
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self.data, TypeData::Opaque)
    }

    /// Whether this type is an opaque or transitively holds one.
    pub fn contains_opaques(&self) -> bool {
        self.contains_opaques
    }

    /// Element type name for arrays and containers.
    pub fn element(&self) -> Option<&str> {
        match &self.data {
            TypeData::Array { element, .. } | TypeData::Container { element, .. } => {
                Some(element.as_str())
            }
            _ => None,
        }
    }

    pub fn container_kind(&self) -> Option<&str> {
        match &self.data {
            TypeData::Container { kind, .. } => Some(kind.as_str()),
            _ => None,
        }
    }

    pub fn array_length(&self) -> Option<usize> {
        match self.data {
            TypeData::Array { length, .. } => Some(length),
            _ => None,
        }
    }

    /// Compound fields; empty for every other kind.
    pub fn fields(&self) -> &[Field] {
        match &self.data {
            TypeData::Compound { fields } => fields.as_slice(),
            _ => &[],
        }
    }

    /// Same name and structure. The opaque flag is derived, so it is not compared.
    pub fn same_definition(&self, other: &TypeDescriptor) -> bool {
        self.name == other.name && self.size == other.size && self.data == other.data
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The kinds of types a registry knows how to construct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Null,
    Numeric,
    Opaque,
    Enum,
    Compound,
    Array,
    Container,
    Alias,
}

impl TypeCategory {
    pub const ALL: [TypeCategory; 8] = [
        Self::Null,
        Self::Numeric,
        Self::Opaque,
        Self::Enum,
        Self::Compound,
        Self::Array,
        Self::Container,
        Self::Alias,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Numeric => "numeric",
            Self::Opaque => "opaque",
            Self::Enum => "enum",
            Self::Compound => "compound",
            Self::Array => "array",
            Self::Container => "container",
            Self::Alias => "alias",
        }
    }
}

impl FromStr for TypeCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that designates a type by name.
///
/// Lets lookups accept bare names as well as descriptors.
pub trait AsTypeName {
    fn as_type_name(&self) -> &str;
}

impl AsTypeName for str {
    fn as_type_name(&self) -> &str {
        self
    }
}

impl AsTypeName for String {
    fn as_type_name(&self) -> &str {
        self
    }
}

impl AsTypeName for TypeDescriptor {
    fn as_type_name(&self) -> &str {
        &self.name
    }
}

impl<T: AsTypeName + ?Sized> AsTypeName for &T {
    fn as_type_name(&self) -> &str {
        (**self).as_type_name()
    }
}
