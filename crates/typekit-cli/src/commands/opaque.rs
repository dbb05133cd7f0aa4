use typekit_lib::Typekit;

use super::loader::{LoadArgs, load_or_exit};

pub struct OpaqueArgs {
    pub load: LoadArgs,
    pub types: Vec<String>,
}

pub fn run(args: OpaqueArgs) {
    let typekit = load_or_exit(&args.load);

    match opaque_lines(&typekit, &args.types) {
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

/// `<type> -> <opaque>` for each requested type. Types that are not
/// intermediates map to themselves.
pub fn opaque_lines(typekit: &Typekit, types: &[String]) -> typekit_lib::Result<Vec<String>> {
    types
        .iter()
        .map(|name| -> typekit_lib::Result<String> {
            let opaque = typekit.opaque_type_for(name)?;
            Ok(format!("{name} -> {}", opaque.name()))
        })
        .collect()
}
