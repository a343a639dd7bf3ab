//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub models: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub compatibility: String,
    pub foreign_object_prototype: bool,
    pub outdir: PathBuf,
    pub name: String,
    pub no_baseline: bool,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            models: m
                .get_many::<PathBuf>("model")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            manifest: m.get_one::<PathBuf>("manifest").cloned().unwrap_or_default(),
            compatibility: m
                .get_one::<String>("compatibility")
                .cloned()
                .unwrap_or_else(|| "graaljs".to_owned()),
            foreign_object_prototype: m.get_flag("foreign_object_prototype"),
            outdir: m
                .get_one::<PathBuf>("outdir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            name: m
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| "out".to_owned()),
            no_baseline: m.get_flag("no_baseline"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            models: p.models,
            manifest: p.manifest,
            compatibility: p.compatibility,
            foreign_object_prototype: p.foreign_object_prototype,
            outdir: p.outdir,
            name: p.name,
            baseline: !p.no_baseline,
        }
    }
}
