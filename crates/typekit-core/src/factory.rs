//! Type construction primitives.
//!
//! `TypeSpec` carries the arguments of one construction call; the
//! registry's `create` maps each variant onto its factory method.

use indexmap::IndexMap;

use crate::error::{RegistryError, Result};
use crate::names::{array_name, container_name};
use crate::registry::Registry;
use crate::types::{Field, NumericCategory, TypeCategory, TypeData, TypeDescriptor};

/// Size given to enums, matching a C++ `int`.
const ENUM_SIZE: usize = 4;

/// Arguments for constructing a type of a given category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSpec {
    Null {
        name: String,
    },
    Numeric {
        name: String,
        size: usize,
        category: NumericCategory,
    },
    Opaque {
        name: String,
        size: usize,
    },
    Enum {
        name: String,
        values: Vec<(String, i64)>,
    },
    /// Fields as `(name, type)`; laid out sequentially without padding.
    Compound {
        name: String,
        fields: Vec<(String, String)>,
    },
    Array {
        element: String,
        length: usize,
    },
    Container {
        kind: String,
        element: String,
    },
    Alias {
        name: String,
        target: String,
    },
}

impl TypeSpec {
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Null { .. } => TypeCategory::Null,
            Self::Numeric { .. } => TypeCategory::Numeric,
            Self::Opaque { .. } => TypeCategory::Opaque,
            Self::Enum { .. } => TypeCategory::Enum,
            Self::Compound { .. } => TypeCategory::Compound,
            Self::Array { .. } => TypeCategory::Array,
            Self::Container { .. } => TypeCategory::Container,
            Self::Alias { .. } => TypeCategory::Alias,
        }
    }

    /// Build a spec from textual arguments.
    ///
    /// | category    | arguments                       |
    /// |-------------|---------------------------------|
    /// | `null`      | `NAME`                          |
    /// | `numeric`   | `NAME SIZE sint\|uint\|float`   |
    /// | `opaque`    | `NAME [SIZE]`                   |
    /// | `enum`      | `NAME SYMBOL=VALUE...`          |
    /// | `compound`  | `NAME FIELD:TYPE...`            |
    /// | `array`     | `ELEMENT LENGTH`                |
    /// | `container` | `KIND ELEMENT`                  |
    /// | `alias`     | `NAME TARGET`                   |
    pub fn from_args(category: TypeCategory, args: &[&str]) -> Result<Self> {
        let element = category.as_str();
        let arity = |min: usize, max: Option<usize>| -> Result<()> {
            let ok = args.len() >= min && max.is_none_or(|max| args.len() <= max);
            if ok {
                Ok(())
            } else {
                Err(RegistryError::malformed(
                    element,
                    format!("unexpected argument count {}", args.len()),
                ))
            }
        };
        let number = |s: &str| -> Result<usize> {
            s.parse()
                .map_err(|_| RegistryError::malformed(element, format!("`{s}` is not a size")))
        };

        let spec = match category {
            TypeCategory::Null => {
                arity(1, Some(1))?;
                Self::Null {
                    name: args[0].to_owned(),
                }
            }
            TypeCategory::Numeric => {
                arity(3, Some(3))?;
                let category = NumericCategory::from_xml(args[2]).ok_or_else(|| {
                    RegistryError::malformed(element, format!("unknown category `{}`", args[2]))
                })?;
                Self::Numeric {
                    name: args[0].to_owned(),
                    size: number(args[1])?,
                    category,
                }
            }
            TypeCategory::Opaque => {
                arity(1, Some(2))?;
                Self::Opaque {
                    name: args[0].to_owned(),
                    size: args.get(1).map_or(Ok(0), |s| number(*s))?,
                }
            }
            TypeCategory::Enum => {
                arity(1, None)?;
                let values = args[1..]
                    .iter()
                    .map(|pair| -> Result<(String, i64)> {
                        let (symbol, value) = pair.split_once('=').ok_or_else(|| {
                            let reason = format!("expected SYMBOL=VALUE, got `{pair}`");
                            RegistryError::malformed(element, reason)
                        })?;
                        let value = value.parse().map_err(|_| {
                            let reason = format!("`{value}` is not an integer");
                            RegistryError::malformed(element, reason)
                        })?;
                        Ok((symbol.to_owned(), value))
                    })
                    .collect::<Result<_>>()?;
                Self::Enum {
                    name: args[0].to_owned(),
                    values,
                }
            }
            TypeCategory::Compound => {
                arity(1, None)?;
                let fields = args[1..]
                    .iter()
                    .map(|pair| {
                        pair.split_once(':')
                            .map(|(field, ty)| (field.to_owned(), ty.to_owned()))
                            .ok_or_else(|| {
                                let reason = format!("expected FIELD:TYPE, got `{pair}`");
                                RegistryError::malformed(element, reason)
                            })
                    })
                    .collect::<Result<_>>()?;
                Self::Compound {
                    name: args[0].to_owned(),
                    fields,
                }
            }
            TypeCategory::Array => {
                arity(2, Some(2))?;
                Self::Array {
                    element: args[0].to_owned(),
                    length: number(args[1])?,
                }
            }
            TypeCategory::Container => {
                arity(2, Some(2))?;
                Self::Container {
                    kind: args[0].to_owned(),
                    element: args[1].to_owned(),
                }
            }
            TypeCategory::Alias => {
                arity(2, Some(2))?;
                Self::Alias {
                    name: args[0].to_owned(),
                    target: args[1].to_owned(),
                }
            }
        };
        Ok(spec)
    }
}

impl Registry {
    /// Construct a type from a spec.
    pub fn create(&mut self, spec: TypeSpec) -> Result<&TypeDescriptor> {
        match spec {
            TypeSpec::Null { name } => self.create_null(&name),
            TypeSpec::Numeric {
                name,
                size,
                category,
            } => self.create_numeric(&name, size, category),
            TypeSpec::Opaque { name, size } => self.create_opaque(&name, size),
            TypeSpec::Enum { name, values } => self.create_enum(&name, values),
            TypeSpec::Compound { name, fields } => self.create_compound(&name, fields),
            TypeSpec::Array { element, length } => self.create_array(&element, length),
            TypeSpec::Container { kind, element } => self.create_container(&kind, &element),
            TypeSpec::Alias { name, target } => self.create_alias(&name, &target),
        }
    }

    pub fn create_null(&mut self, name: &str) -> Result<&TypeDescriptor> {
        let id = self.insert(name.to_owned(), 0, TypeData::Null)?;
        Ok(self.resolve(id))
    }

    pub fn create_numeric(
        &mut self,
        name: &str,
        size: usize,
        category: NumericCategory,
    ) -> Result<&TypeDescriptor> {
        let id = self.insert(name.to_owned(), size, TypeData::Numeric { category })?;
        Ok(self.resolve(id))
    }

    pub fn create_opaque(&mut self, name: &str, size: usize) -> Result<&TypeDescriptor> {
        let id = self.insert(name.to_owned(), size, TypeData::Opaque)?;
        Ok(self.resolve(id))
    }

    pub fn create_enum(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (String, i64)>,
    ) -> Result<&TypeDescriptor> {
        let values: IndexMap<String, i64> = values.into_iter().collect();
        let id = self.insert(name.to_owned(), ENUM_SIZE, TypeData::Enum { values })?;
        Ok(self.resolve(id))
    }

    /// Create a compound, placing fields back to back in declaration order.
    pub fn create_compound(
        &mut self,
        name: &str,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Result<&TypeDescriptor> {
        let mut offset = 0;
        let mut laid_out = Vec::new();
        for (field, type_name) in fields {
            let field_type = self.get(type_name.as_str())?;
            let size = field_type.size();
            laid_out.push(Field {
                name: field,
                type_name: field_type.name().to_owned(),
                offset,
            });
            offset += size;
        }
        let id = self.insert(name.to_owned(), offset, TypeData::Compound { fields: laid_out })?;
        Ok(self.resolve(id))
    }

    /// Create `element[length]`.
    pub fn create_array(&mut self, element: &str, length: usize) -> Result<&TypeDescriptor> {
        let element = self.get(element)?;
        let name = array_name(element.name(), length);
        let size = element.size() * length;
        let data = TypeData::Array {
            element: element.name().to_owned(),
            length,
        };
        let id = self.insert(name, size, data)?;
        Ok(self.resolve(id))
    }

    /// Create `kind<element>`.
    pub fn create_container(&mut self, kind: &str, element: &str) -> Result<&TypeDescriptor> {
        let element = self.get(element)?.name().to_owned();
        let name = container_name(kind, &element);
        let data = TypeData::Container {
            kind: kind.to_owned(),
            element,
        };
        let id = self.insert(name, 0, data)?;
        Ok(self.resolve(id))
    }

    pub fn create_alias(&mut self, name: &str, target: &str) -> Result<&TypeDescriptor> {
        self.alias(name, target)
    }
}
