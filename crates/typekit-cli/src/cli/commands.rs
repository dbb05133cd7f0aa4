//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Add the arguments every command needs to load a typekit.
fn with_typekit_args(cmd: Command) -> Command {
    cmd.arg(registry_path_arg())
        .arg(typelist_path_arg())
        .arg(name_arg())
        .arg(no_std_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typekit")
        .about("Inspect typekits and resolve their intermediate types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(inspect_command())
        .subcommand(intermediate_command())
        .subcommand(opaque_command())
}

/// Summarize a typekit: its types, their intermediates and its opaques.
pub fn inspect_command() -> Command {
    let cmd = Command::new("inspect")
        .about("Show the types and opaques of a typekit")
        .after_help(
            r#"EXAMPLES:
  typekit inspect base.tlb base.typelist
  typekit inspect base.tlb base.typelist --json
  typekit inspect base.tlb base.typelist --name base --no-std"#,
        );
    with_typekit_args(cmd).arg(json_arg())
}

/// Print the intermediate type name of each given type.
pub fn intermediate_command() -> Command {
    let cmd = Command::new("intermediate")
        .about("Show the intermediate type of each type")
        .after_help(
            r#"EXAMPLES:
  typekit intermediate base.tlb base.typelist /base/Angle
  typekit intermediate base.tlb base.typelist '/std/vector</base/Time>'"#,
        );
    with_typekit_args(cmd).arg(types_arg())
}

/// Print the opaque type each given intermediate stands for.
pub fn opaque_command() -> Command {
    let cmd = Command::new("opaque")
        .about("Show the opaque type behind each intermediate type")
        .after_help(
            r#"EXAMPLES:
  typekit opaque base.tlb base.typelist /base/Angle_m
  typekit opaque base.tlb base.typelist '/base/Pose_m[4]'"#,
        );
    with_typekit_args(cmd).arg(types_arg())
}
