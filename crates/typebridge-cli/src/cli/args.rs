//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Type model files (--model, repeatable).
pub fn model_arg() -> Arg {
    Arg::new("model")
        .short('m')
        .long("model")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .required(true)
        .help("Type model JSON file (repeatable)")
}

/// Collector manifest (--manifest).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .long("manifest")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Collector manifest listing declared types and globals")
}

/// Target engine (--compatibility).
pub fn compatibility_arg() -> Arg {
    Arg::new("compatibility")
        .short('c')
        .long("compatibility")
        .value_name("MODE")
        .default_value("graaljs")
        .value_parser(["nashorn", "rhino", "graaljs"])
        .help("Target script engine")
}

/// GraalJS foreign-object prototype (--foreign-object-prototype).
pub fn foreign_object_prototype_arg() -> Arg {
    Arg::new("foreign_object_prototype")
        .long("foreign-object-prototype")
        .action(ArgAction::SetTrue)
        .help("Host lists behave as script arrays (GraalJS only)")
}

/// Output directory (--outdir).
pub fn outdir_arg() -> Arg {
    Arg::new("outdir")
        .short('o')
        .long("outdir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory receiving the generated files")
}

/// Output file stem (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("STEM")
        .default_value("out")
        .help("File stem of the generated .d.ts and .js")
}

/// Skip the bundled standard-library model (--no-baseline).
pub fn no_baseline_arg() -> Arg {
    Arg::new("no_baseline")
        .long("no-baseline")
        .action(ArgAction::SetTrue)
        .help("Do not merge the bundled standard-library model")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug)")
}
