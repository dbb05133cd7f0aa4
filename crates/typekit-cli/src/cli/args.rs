//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Registry XML file (positional).
pub fn registry_path_arg() -> Arg {
    Arg::new("registry_path")
        .value_name("REGISTRY")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Registry XML file")
}

/// Typelist file (positional).
pub fn typelist_path_arg() -> Arg {
    Arg::new("typelist_path")
        .value_name("TYPELIST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Typelist file")
}

/// Type names to resolve (positional, one or more).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .value_name("TYPE")
        .num_args(1..)
        .required(true)
        .help("Type names")
}

/// Typekit name (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .help("Typekit name (defaults to the typelist file stem)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print a JSON report")
}

/// Skip standard types (--no-std).
pub fn no_std_arg() -> Arg {
    Arg::new("no_std")
        .long("no-std")
        .action(ArgAction::SetTrue)
        .help("Do not register the standard C++ types before loading")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug, -vv for trace; RUST_LOG overrides)")
}
