use std::fmt::Write as _;

use serde::Serialize;
use typekit_lib::{OpaqueDefinition, TypeCategory, Typekit};

use super::loader::{LoadArgs, load_or_exit};

pub struct InspectArgs {
    pub load: LoadArgs,
    pub json: bool,
}

#[derive(Serialize)]
pub struct InspectReport<'a> {
    pub name: &'a str,
    pub has_opaques: bool,
    pub types: Vec<TypeEntry<'a>>,
    pub opaques: &'a [OpaqueDefinition],
}

#[derive(Serialize)]
pub struct TypeEntry<'a> {
    pub name: &'a str,
    pub category: TypeCategory,
    pub interface: bool,
    pub intermediate: String,
}

pub fn run(args: InspectArgs) {
    let typekit = load_or_exit(&args.load);

    let report = match build_report(&typekit) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_text(&report));
    }
}

pub fn build_report(typekit: &Typekit) -> typekit_lib::Result<InspectReport<'_>> {
    let types = typekit
        .typelist()
        .iter()
        .map(|(name, interface)| type_entry(typekit, name, interface))
        .collect::<typekit_lib::Result<Vec<_>>>()?;

    Ok(InspectReport {
        name: typekit.name(),
        has_opaques: typekit.has_opaques(),
        types,
        opaques: typekit.opaques(),
    })
}

fn type_entry<'a>(
    typekit: &'a Typekit,
    name: &'a str,
    interface: bool,
) -> typekit_lib::Result<TypeEntry<'a>> {
    Ok(TypeEntry {
        name,
        category: typekit.resolve_type(name)?.category(),
        interface,
        intermediate: typekit.intermediate_type_name_for(name)?,
    })
}

pub fn render_text(report: &InspectReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "typekit {} ({} types, {} opaques)",
        report.name,
        report.types.len(),
        report.opaques.len()
    );

    if !report.types.is_empty() {
        out.push_str("\ntypes:\n");
    }
    for entry in &report.types {
        let _ = write!(out, "  {} {}", entry.name, entry.category);
        if entry.interface {
            out.push_str(" [interface]");
        }
        if entry.intermediate != entry.name {
            let _ = write!(out, " -> {}", entry.intermediate);
        }
        out.push('\n');
    }

    if !report.opaques.is_empty() {
        out.push_str("\nopaques:\n");
    }
    for opaque in report.opaques {
        let _ = write!(out, "  {} as {}", opaque.type_name, opaque.intermediate);
        if !opaque.includes.is_empty() {
            let _ = write!(out, " (includes {})", opaque.includes.join(", "));
        }
        if opaque.needs_copy {
            out.push_str(" [needs copy]");
        }
        out.push('\n');
    }
    out
}
