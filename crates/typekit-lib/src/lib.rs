//! Typekit metadata engine.
//!
//! A [`Typekit`] bundles a type registry, the list of types it defines and
//! the opaque declarations needed to marshal them. From that it computes the
//! intermediate representation of every opaque-containing type, and maps
//! intermediates back to the opaques they stand for.
//!
//! # Example
//!
//! ```
//! use typekit_lib::Typekit;
//!
//! let xml = r#"
//!     <typelib>
//!       <opaque name="/base/Angle" size="8" marshal_as="/base/Angle_m" includes="base/Angle.hpp"/>
//!       <compound name="/base/Angle_m" size="8">
//!         <field name="rad" type="/double" offset="0"/>
//!       </compound>
//!     </typelib>
//! "#;
//!
//! let typekit = Typekit::from_raw_data("base", xml, "/base/Angle\n/base/Angle_m 0\n").unwrap();
//! assert_eq!(typekit.intermediate_type_name_for("/base/Angle").unwrap(), "/base/Angle_m");
//! assert_eq!(typekit.opaque_type_for("/base/Angle_m").unwrap().name(), "/base/Angle");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod builder;
mod construct;
mod error;
mod intermediate;
mod opaque;
mod typekit;
mod typelist;

#[cfg(test)]
mod intermediate_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod typelist_tests;

pub use builder::{TypekitBuilder, TypekitConfig};
pub use construct::Constructor;
pub use error::{Error, Result};
pub use intermediate::synthesized_intermediate_name;
pub use opaque::{OpaqueDefinition, OpaqueExtraction, extract_opaques};
pub use typekit::Typekit;
pub use typelist::Typelist;

pub use typekit_core::{
    AsTypeName, Registry, RegistryError, TypeCategory, TypeDescriptor, TypeId, TypeSpec,
};
