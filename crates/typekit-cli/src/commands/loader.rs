use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use typekit_lib::{Typekit, TypekitBuilder};

pub struct LoadArgs {
    pub registry_path: PathBuf,
    pub typelist_path: PathBuf,
    pub name: Option<String>,
    pub standard_types: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Typekit(#[from] typekit_lib::Error),
}

pub fn load_typekit(args: &LoadArgs) -> Result<Typekit, LoadError> {
    let registry_xml = read(&args.registry_path)?;
    let typelist_txt = read(&args.typelist_path)?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| typekit_name(&args.typelist_path));

    debug!(typekit = %name, registry = %args.registry_path.display(), "loading typekit");
    let typekit = TypekitBuilder::new(name)
        .with_standard_types(args.standard_types)
        .build(&registry_xml, &typelist_txt)?;
    Ok(typekit)
}

/// Typekit name implied by its typelist file: `base.typelist` is `base`.
pub fn typekit_name(typelist_path: &Path) -> String {
    typelist_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "typekit".to_owned())
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Load the typekit or exit with an error message.
pub fn load_or_exit(args: &LoadArgs) -> Typekit {
    load_typekit(args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
