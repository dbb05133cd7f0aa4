use typekit_lib::Typekit;

use super::loader::{LoadArgs, load_or_exit};

pub struct IntermediateArgs {
    pub load: LoadArgs,
    pub types: Vec<String>,
}

pub fn run(args: IntermediateArgs) {
    let typekit = load_or_exit(&args.load);

    match intermediate_lines(&typekit, &args.types) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// `<type> -> <intermediate>` for each requested type.
pub fn intermediate_lines(typekit: &Typekit, types: &[String]) -> typekit_lib::Result<Vec<String>> {
    types
        .iter()
        .map(|name| -> typekit_lib::Result<String> {
            let intermediate = typekit.intermediate_type_name_for(name)?;
            Ok(format!("{name} -> {intermediate}"))
        })
        .collect()
}
