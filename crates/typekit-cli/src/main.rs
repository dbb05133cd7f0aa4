mod cli;
mod commands;
mod logging;

use cli::{InspectParams, IntermediateParams, OpaqueParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((command, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };
    // `-v` is global, so subcommand matches see it wherever it was given.
    logging::init(m.get_count("verbose"));

    match command {
        "inspect" => {
            let params = InspectParams::from_matches(m);
            commands::inspect::run(params.into());
        }
        "intermediate" => {
            let params = IntermediateParams::from_matches(m);
            commands::intermediate::run(params.into());
        }
        "opaque" => {
            let params = OpaqueParams::from_matches(m);
            commands::opaque::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
