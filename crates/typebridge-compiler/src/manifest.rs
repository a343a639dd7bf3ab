//! Collector manifest: which types, globals and raw snippets a run processes.
//!
//! The manifest is written by a build-time collector that reads source-level
//! declarations. It is trusted input: snippets are passed through verbatim.

use typebridge_core::{MemberSource, TypeName};

use crate::{Error, GlobalBinding, Result, SnippetPair, TypeDescriptor};

/// Top-level manifest file.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub namespaces: Vec<NamespaceEntry>,
}

/// One annotated source namespace.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceEntry {
    pub name: String,
    #[serde(default)]
    pub declare: Vec<DeclareEntry>,
    #[serde(default)]
    pub constants: Vec<ConstantEntry>,
    #[serde(default)]
    pub pre_types: String,
    #[serde(default)]
    pub post_types: String,
    #[serde(default)]
    pub pre_script: String,
    #[serde(default)]
    pub post_script: String,
}

/// A type to declare, with its emission flags.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DeclareEntry {
    /// Binary or source-level type name.
    pub value: String,
    #[serde(default)]
    pub export: bool,
    #[serde(default)]
    pub alias: String,
    pub namespace: Option<String>,
    #[serde(default)]
    pub functional: bool,
    #[serde(default)]
    pub pre: String,
    #[serde(default)]
    pub post: String,
}

/// A global value of a host type.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ConstantEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

const OBJECT_PACKAGE: &str = "java.lang";
const OBJECT_NAME: &str = "Object";

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Descriptors for every declared type, keyed by the identity the member
    /// source reports (so `pkg.Outer.Inner` finds `pkg.Outer$Inner`).
    pub fn descriptors(&self, source: &dyn MemberSource) -> Result<Vec<TypeDescriptor>> {
        let mut descriptors = Vec::new();
        for entry in self.namespaces.iter().flat_map(|ns| &ns.declare) {
            let class = source
                .lookup(&entry.value)
                .ok_or_else(|| Error::UnknownType(entry.value.clone()))?;

            let mut descriptor = TypeDescriptor::new(class.name.clone())
                .with_export(entry.export)
                .with_alias(entry.alias.as_str())
                .with_functional(entry.functional)
                .with_pre(entry.pre.as_str())
                .with_post(entry.post.as_str());
            if let Some(namespace) = &entry.namespace {
                descriptor = descriptor.with_namespace(namespace.as_str());
            }
            descriptors.push(descriptor);
        }
        Ok(descriptors)
    }

    /// Globals in declaration order.
    ///
    /// Type arguments are erased. A type the member source does not know
    /// falls back to the universal object type.
    pub fn globals(&self, source: &dyn MemberSource) -> Vec<GlobalBinding> {
        self.namespaces
            .iter()
            .flat_map(|ns| &ns.constants)
            .map(|constant| {
                let erased = erasure(&constant.ty);
                let ty = match source.lookup(erased) {
                    Some(class) => class.name.clone(),
                    None => {
                        tracing::warn!(
                            name = %constant.name,
                            ty = %constant.ty,
                            "global type not found, declaring as java.lang.Object"
                        );
                        TypeName::new(OBJECT_PACKAGE, OBJECT_NAME)
                    }
                };
                GlobalBinding::new(constant.name.as_str(), ty)
            })
            .collect()
    }

    /// Raw text around the declaration blocks, one pair per namespace.
    pub fn type_snippets(&self) -> Vec<SnippetPair> {
        self.namespaces
            .iter()
            .map(|ns| SnippetPair::new(ns.pre_types.as_str(), ns.post_types.as_str()))
            .collect()
    }

    /// Raw text around the binding statements, one pair per namespace.
    pub fn script_snippets(&self) -> Vec<SnippetPair> {
        self.namespaces
            .iter()
            .map(|ns| SnippetPair::new(ns.pre_script.as_str(), ns.post_script.as_str()))
            .collect()
    }
}

/// `pkg.Type<A, B>` to `pkg.Type`.
fn erasure(ty: &str) -> &str {
    ty.find('<').map_or(ty, |idx| &ty[..idx]).trim()
}
