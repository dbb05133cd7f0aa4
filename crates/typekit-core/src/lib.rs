#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typekit type registries.
//!
//! Three layers:
//! - **Names** (`names`): `/`-separated type paths, array and container naming
//! - **Descriptors** (`types`): structural description of a single type
//! - **Registry** (`Registry`): canonical, dependency-ordered store of descriptors,
//!   with XML import and type construction primitives

mod error;
mod factory;
pub mod names;
mod registry;
mod standard;
mod types;
mod xml;

#[cfg(test)]
mod registry_tests;

pub use error::{RegistryError, Result, UnknownCategory};
pub use factory::TypeSpec;
pub use registry::Registry;
pub use types::{
    AsTypeName, Field, NumericCategory, TypeCategory, TypeData, TypeDescriptor, TypeId,
};
