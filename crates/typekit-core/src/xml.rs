//! Registry import from its XML serialization.
//!
//! ```xml
//! <typelib>
//!   <numeric name="/int32_t" category="sint" size="4"/>
//!   <compound name="/base/Time" size="8">
//!     <field name="microseconds" type="/int64_t" offset="0"/>
//!   </compound>
//!   <array name="/double[3]" of="/double" size="3"/>
//!   <container name="/std/vector&lt;/double>" kind="/std/vector" of="/double" size="24"/>
//!   <opaque name="/base/Angle" size="8" marshal_as="/base/Angle_m" includes="base/Angle.hpp" needs_copy="1"/>
//!   <alias name="/base/Seconds" source="/double"/>
//! </typelib>
//! ```
//!
//! Declarations may come in any order: they are inserted dependency-first.
//! Template names carry a literal `<`, which XML attribute values spell `&lt;`.

use std::collections::HashSet;

use indexmap::IndexMap;
use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::types::{Field, NumericCategory, TypeData};

impl Registry {
    /// Build a registry from its XML serialization.
    pub fn from_xml(text: &str) -> Result<Registry> {
        let mut registry = Registry::new();
        registry.merge_xml(text)?;
        Ok(registry)
    }

    /// Import every declaration of an XML serialization.
    pub fn merge_xml(&mut self, text: &str) -> Result<()> {
        let doc = Document::parse(text)?;

        let mut pending: IndexMap<&str, Node<'_, '_>> = IndexMap::new();
        for node in doc.root_element().children().filter(Node::is_element) {
            let element = node.tag_name().name();
            if !is_declaration(element) {
                debug!(element, "skipping unknown registry element");
                continue;
            }
            pending.insert(required(&node, "name")?, node);
        }

        let mut importer = Importer {
            registry: self,
            pending: &pending,
            visiting: HashSet::new(),
            done: HashSet::new(),
        };
        for &name in pending.keys() {
            importer.import(name)?;
        }
        debug!(declarations = pending.len(), "merged registry XML");
        Ok(())
    }
}

struct Importer<'r, 'p, 'a, 'input> {
    registry: &'r mut Registry,
    pending: &'p IndexMap<&'a str, Node<'a, 'input>>,
    visiting: HashSet<&'a str>,
    done: HashSet<&'a str>,
}

impl<'a> Importer<'_, '_, 'a, '_> {
    fn import(&mut self, name: &'a str) -> Result<()> {
        let Some(node) = self.pending.get(name).copied() else {
            // Not declared in this document: must already be registered.
            return self.registry.get(name).map(|_| ());
        };
        if self.done.contains(name) {
            return Ok(());
        }
        if !self.visiting.insert(name) {
            return Err(RegistryError::malformed(
                node.tag_name().name(),
                format!("`{name}` depends on itself"),
            ));
        }

        for dependency in dependencies(&node)? {
            self.import(dependency)?;
        }

        if node.tag_name().name() == "alias" {
            self.registry.alias(name, required(&node, "source")?)?;
        } else {
            let (mut size, data) = declaration(&node)?;
            if let TypeData::Array { element, length } = &data {
                size = self.registry.get(element.as_str())?.size() * length;
            }
            self.registry.insert(name.to_owned(), size, data)?;
        }
        self.visiting.remove(name);
        self.done.insert(name);
        Ok(())
    }
}

fn is_declaration(element: &str) -> bool {
    matches!(
        element,
        "null" | "numeric" | "enum" | "opaque" | "compound" | "array" | "container" | "alias"
    )
}

fn dependencies<'a>(node: &Node<'a, '_>) -> Result<Vec<&'a str>> {
    match node.tag_name().name() {
        "array" | "container" => Ok(vec![required(node, "of")?]),
        "alias" => Ok(vec![required(node, "source")?]),
        "compound" => fields(node)
            .map(|field| required(&field, "type"))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn declaration(node: &Node<'_, '_>) -> Result<(usize, TypeData)> {
    let element = node.tag_name().name();
    let size = optional_number(node, "size")?.unwrap_or(0);

    let decl = match element {
        "null" => (size, TypeData::Null),
        "opaque" => (size, TypeData::Opaque),
        "numeric" => {
            let category = required(node, "category")?;
            let category = NumericCategory::from_xml(category).ok_or_else(|| {
                RegistryError::malformed(element, format!("unknown category `{category}`"))
            })?;
            (size, TypeData::Numeric { category })
        }
        "enum" => {
            let values = node
                .children()
                .filter(|n| n.has_tag_name("value"))
                .map(|value| -> Result<(String, i64)> {
                    let symbol = required(&value, "symbol")?.to_owned();
                    let raw = required(&value, "value")?;
                    let parsed = raw.parse::<i64>().map_err(|_| {
                        RegistryError::malformed(element, format!("`{raw}` is not an integer"))
                    })?;
                    Ok((symbol, parsed))
                })
                .collect::<Result<IndexMap<_, _>>>()?;
            (size, TypeData::Enum { values })
        }
        "compound" => {
            let fields = fields(node)
                .map(|field| -> Result<Field> {
                    Ok(Field {
                        name: required(&field, "name")?.to_owned(),
                        type_name: required(&field, "type")?.to_owned(),
                        offset: optional_number(&field, "offset")?.unwrap_or(0),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            (size, TypeData::Compound { fields })
        }
        "array" => {
            // `size` is the element count for arrays; the byte size is
            // computed once the element type is known.
            let data = TypeData::Array {
                element: required(node, "of")?.to_owned(),
                length: size,
            };
            (0, data)
        }
        "container" => (
            size,
            TypeData::Container {
                kind: required(node, "kind")?.to_owned(),
                element: required(node, "of")?.to_owned(),
            },
        ),
        other => return Err(RegistryError::malformed(other, "not a type declaration")),
    };
    Ok(decl)
}

fn fields<'a, 'input>(node: &Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.has_tag_name("field"))
}

fn required<'a>(node: &Node<'a, '_>, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute).ok_or_else(|| {
        RegistryError::malformed(
            node.tag_name().name(),
            format!("missing `{attribute}` attribute"),
        )
    })
}

fn optional_number(node: &Node<'_, '_>, attribute: &str) -> Result<Option<usize>> {
    node.attribute(attribute)
        .map(|raw| {
            raw.trim().parse().map_err(|_| {
                RegistryError::malformed(
                    node.tag_name().name(),
                    format!("`{attribute}` value `{raw}` is not a number"),
                )
            })
        })
        .transpose()
}
