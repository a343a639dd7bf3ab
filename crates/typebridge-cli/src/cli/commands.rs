//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typebridge")
        .about("TypeScript declarations and runtime bindings for host types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
}

/// Generate `<STEM>.d.ts` and `<STEM>.js`.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate declarations and bindings from a type model and a manifest")
        .after_help(
            r#"EXAMPLES:
  typebridge generate -m app.json --manifest manifest.json
  typebridge generate -m app.json -m lib.json --manifest manifest.json -o dist -n app
  typebridge generate -m app.json --manifest manifest.json -c rhino
  typebridge generate -m app.json --manifest manifest.json --foreign-object-prototype"#,
        )
        .arg(model_arg())
        .arg(manifest_arg())
        .arg(compatibility_arg())
        .arg(foreign_object_prototype_arg())
        .arg(outdir_arg())
        .arg(name_arg())
        .arg(no_baseline_arg())
        .arg(verbose_arg())
}
