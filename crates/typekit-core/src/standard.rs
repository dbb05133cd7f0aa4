//! Standard C++ types every typekit registry starts from.

use crate::error::Result;
use crate::registry::Registry;
use crate::types::{NumericCategory, TypeData};

use NumericCategory::{Float, Signed, Unsigned};

const NUMERICS: &[(&str, usize, NumericCategory)] = &[
    ("/bool", 1, Unsigned),
    ("/char", 1, Signed),
    ("/int8_t", 1, Signed),
    ("/uint8_t", 1, Unsigned),
    ("/int16_t", 2, Signed),
    ("/uint16_t", 2, Unsigned),
    ("/int32_t", 4, Signed),
    ("/uint32_t", 4, Unsigned),
    ("/int64_t", 8, Signed),
    ("/uint64_t", 8, Unsigned),
    ("/float", 4, Float),
    ("/double", 8, Float),
];

const ALIASES: &[(&str, &str)] = &[
    ("/signed char", "/int8_t"),
    ("/unsigned char", "/uint8_t"),
    ("/short", "/int16_t"),
    ("/unsigned short", "/uint16_t"),
    ("/int", "/int32_t"),
    ("/unsigned int", "/uint32_t"),
    ("/long long", "/int64_t"),
    ("/unsigned long long", "/uint64_t"),
];

pub(crate) const STRING_TYPE: &str = "/std/string";

impl Registry {
    /// A registry holding only the standard types.
    pub fn with_standard_types() -> Result<Registry> {
        let mut registry = Registry::new();
        registry.add_standard_types()?;
        Ok(registry)
    }

    /// Register fixed-width numerics, their C spellings and `/std/string`.
    ///
    /// Idempotent. Fails only if one of these names is already defined
    /// differently.
    pub fn add_standard_types(&mut self) -> Result<()> {
        for &(name, size, category) in NUMERICS {
            self.insert(name.to_owned(), size, TypeData::Numeric { category })?;
        }
        for &(alias, target) in ALIASES {
            self.alias(alias, target)?;
        }
        self.insert(
            STRING_TYPE.to_owned(),
            0,
            TypeData::Container {
                kind: STRING_TYPE.to_owned(),
                element: "/char".to_owned(),
            },
        )?;
        Ok(())
    }
}
