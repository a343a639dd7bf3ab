//! Rendering of referenced types into TypeScript syntax.

use indexmap::IndexSet;
use typebridge_core::{MemberSource, Primitive, TypeName, TypeRef};

use crate::{Error, Registry, Result};

/// Whether registered types render with their namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Qualify {
    /// `<namespace>.<Name>`, valid anywhere.
    Full,
    /// `<Name>`, valid inside the declaring namespace.
    Bare,
}

/// Resolves [`TypeRef`]s against the registry and the member source.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    source: &'a dyn MemberSource,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, source: &'a dyn MemberSource) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn source(&self) -> &'a dyn MemberSource {
        self.source
    }

    /// Render `ty`. Type variables met on the way are added to `vars`.
    pub fn resolve(
        &self,
        ty: &TypeRef,
        qualify: Qualify,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        match ty {
            TypeRef::Primitive(p) => Ok(primitive(*p).to_owned()),
            TypeRef::Array(inner) => Ok(format!("[{}]", self.resolve(inner, qualify, vars)?)),
            TypeRef::Wildcard => Ok("any".to_owned()),
            TypeRef::Variable(name) => {
                vars.insert(name.clone());
                Ok(name.clone())
            }
            TypeRef::Class(name) => self.resolve_name(name, qualify),
            TypeRef::Parameterized { raw, args } => {
                let base = self.resolve_name(raw, qualify)?;
                if self.registry.get(raw).is_none() {
                    return Ok(base);
                }
                let args = args
                    .iter()
                    .map(|arg| self.resolve(arg, qualify, vars))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{base}<{}>", args.join(", ")))
            }
        }
    }

    fn resolve_name(&self, name: &TypeName, qualify: Qualify) -> Result<String> {
        if let Some(descriptor) = self.registry.get(name) {
            return Ok(match qualify {
                Qualify::Full => descriptor.type_name(),
                Qualify::Bare => descriptor.simple_type_name(),
            });
        }

        if self.source.class(name).is_some() {
            return Ok(format!("any /*{}*/", name.binary_name()));
        }

        Err(Error::UnresolvedType(name.binary_name()))
    }
}

fn primitive(p: Primitive) -> &'static str {
    match p {
        Primitive::Boolean => "boolean",
        Primitive::Char => "string",
        Primitive::Void => "void",
        Primitive::Byte
        | Primitive::Short
        | Primitive::Int
        | Primitive::Long
        | Primitive::Float
        | Primitive::Double => "number",
    }
}
