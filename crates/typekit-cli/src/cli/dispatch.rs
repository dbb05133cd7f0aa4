//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::inspect::InspectArgs;
use crate::commands::intermediate::IntermediateArgs;
use crate::commands::loader::LoadArgs;
use crate::commands::opaque::OpaqueArgs;

/// Arguments shared by every command that loads a typekit.
pub struct TypekitParams {
    pub registry_path: PathBuf,
    pub typelist_path: PathBuf,
    pub name: Option<String>,
    pub no_std: bool,
}

impl TypekitParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            registry_path: m
                .get_one::<PathBuf>("registry_path")
                .cloned()
                .unwrap_or_default(),
            typelist_path: m
                .get_one::<PathBuf>("typelist_path")
                .cloned()
                .unwrap_or_default(),
            name: m.get_one::<String>("name").cloned(),
            no_std: m.get_flag("no_std"),
        }
    }
}

impl From<TypekitParams> for LoadArgs {
    fn from(p: TypekitParams) -> Self {
        Self {
            registry_path: p.registry_path,
            typelist_path: p.typelist_path,
            name: p.name,
            standard_types: !p.no_std,
        }
    }
}

pub struct InspectParams {
    pub typekit: TypekitParams,
    pub json: bool,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            typekit: TypekitParams::from_matches(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        Self {
            load: p.typekit.into(),
            json: p.json,
        }
    }
}

pub struct IntermediateParams {
    pub typekit: TypekitParams,
    pub types: Vec<String>,
}

impl IntermediateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            typekit: TypekitParams::from_matches(m),
            types: collect_types(m),
        }
    }
}

impl From<IntermediateParams> for IntermediateArgs {
    fn from(p: IntermediateParams) -> Self {
        Self {
            load: p.typekit.into(),
            types: p.types,
        }
    }
}

pub struct OpaqueParams {
    pub typekit: TypekitParams,
    pub types: Vec<String>,
}

impl OpaqueParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            typekit: TypekitParams::from_matches(m),
            types: collect_types(m),
        }
    }
}

impl From<OpaqueParams> for OpaqueArgs {
    fn from(p: OpaqueParams) -> Self {
        Self {
            load: p.typekit.into(),
            types: p.types,
        }
    }
}

fn collect_types(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("types")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
