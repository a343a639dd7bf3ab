use std::fs;
use std::path::{Path, PathBuf};

use typebridge_compiler::{Compatibility, Config, Emitter, Manifest, Origin, Registry};
use typebridge_core::{ClassIndex, ModelError};

pub struct GenerateArgs {
    pub models: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub compatibility: String,
    pub foreign_object_prototype: bool,
    pub outdir: PathBuf,
    pub name: String,
    /// Merge the bundled standard-library model under the user models.
    pub baseline: bool,
}

/// Paths of the written artifacts.
#[derive(Debug)]
pub struct Generated {
    pub declarations: PathBuf,
    pub bindings: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid type model {}: {source}", path.display())]
    Model { path: PathBuf, source: ModelError },

    #[error("{}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: typebridge_compiler::Error,
    },

    #[error(transparent)]
    Generate(#[from] typebridge_compiler::Error),
}

pub fn run(args: GenerateArgs) {
    match generate(&args) {
        Ok(generated) => {
            tracing::info!(
                declarations = %generated.declarations.display(),
                bindings = %generated.bindings.display(),
                "wrote artifacts"
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the inputs, emit, and write `<name>.d.ts` and `<name>.js` into the output directory.
pub fn generate(args: &GenerateArgs) -> Result<Generated, GenerateError> {
    let index = load_models(&args.models, args.baseline)?;

    let manifest_text = read(&args.manifest)?;
    let manifest = Manifest::from_json(&manifest_text).map_err(|source| GenerateError::Manifest {
        path: args.manifest.clone(),
        source,
    })?;

    let mut registry = Registry::with_builtins();
    registry.extend(manifest.descriptors(&index)?, Origin::Discovered);

    let declarations_name = format!("{}.d.ts", args.name);
    let compatibility: Compatibility = args.compatibility.parse()?;
    let config = Config::new()
        .compatibility(compatibility)
        .foreign_object_prototype(args.foreign_object_prototype)
        .reference_path(declarations_name.as_str());

    let output = Emitter::new(&registry, &index, config)
        .globals(manifest.globals(&index))
        .type_snippets(manifest.type_snippets())
        .script_snippets(manifest.script_snippets())
        .emit()?;

    fs::create_dir_all(&args.outdir).map_err(|source| GenerateError::Write {
        path: args.outdir.clone(),
        source,
    })?;
    let declarations = args.outdir.join(declarations_name);
    let bindings = args.outdir.join(format!("{}.js", args.name));
    write(&declarations, &output.declarations)?;
    write(&bindings, &output.bindings)?;

    Ok(Generated {
        declarations,
        bindings,
    })
}

/// User models first so their entries win over the baseline.
fn load_models(paths: &[PathBuf], baseline: bool) -> Result<ClassIndex, GenerateError> {
    let mut index = ClassIndex::new();
    for path in paths {
        let text = read(path)?;
        let model = ClassIndex::from_json(&text).map_err(|source| GenerateError::Model {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), types = model.len(), "loaded type model");
        index.merge(model);
    }

    if baseline {
        let model = ClassIndex::baseline().map_err(|source| GenerateError::Model {
            path: PathBuf::from("<baseline>"),
            source,
        })?;
        index.merge(model);
    }
    Ok(index)
}

fn read(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
