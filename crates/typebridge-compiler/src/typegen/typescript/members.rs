//! Member eligibility and one-line member rendering.
//!
//! Rendering never orders anything: callers sort the lines they collect.

use indexmap::IndexSet;
use typebridge_core::utils::{is_identifier, is_mangled};
use typebridge_core::{ConstructorInfo, FieldInfo, MethodInfo, Modifiers, Param, TypeRef};

use super::{Qualify, Resolver};
use crate::Result;

/// Universal-object members with no meaningful script shape.
pub(super) const BLOCKED_MEMBERS: &[&str] =
    &["getClass", "hashCode", "wait", "notify", "notifyAll"];

/// Whether a member may appear in any rendered member set.
pub(super) fn is_eligible(name: &str, modifiers: Modifiers) -> bool {
    !modifiers.is_generated()
        && modifiers.is_public()
        && is_identifier(name)
        && !is_mangled(name)
        && !BLOCKED_MEMBERS.contains(&name)
}

pub(super) fn is_field_eligible(field: &FieldInfo) -> bool {
    is_eligible(&field.name, field.modifiers)
}

pub(super) fn is_method_eligible(method: &MethodInfo) -> bool {
    is_eligible(&method.name, method.modifiers)
}

pub(super) fn is_constructor_eligible(constructor: &ConstructorInfo) -> bool {
    constructor.modifiers.is_public() && !constructor.modifiers.is_generated()
}

/// Sort lines and drop repeats.
pub(super) fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines.dedup();
    lines
}

impl Resolver<'_> {
    /// `name:T`, `name?:T` or, for static final fields, `readonly name:T`.
    pub(super) fn field_decl(
        &self,
        field: &FieldInfo,
        optional: bool,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        let ty = self.resolve(&field.ty, Qualify::Full, vars)?;
        let modifiers = field.modifiers;
        if modifiers.is_static() && modifiers.is_final() {
            return Ok(format!("readonly {}:{ty}", field.name));
        }
        let marker = if optional { "?" } else { "" };
        Ok(format!("{}{marker}:{ty}", field.name))
    }

    /// `name<P>( a:T ):R`, with `?` after the name when optional.
    pub(super) fn method_decl(
        &self,
        method: &MethodInfo,
        optional: bool,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        let marker = if optional { "?" } else { "" };
        let signature = self.call_signature(method, vars)?;
        Ok(format!("{}{marker}{signature}", method.name))
    }

    /// `<P>( a:T ):R` without a name.
    pub(super) fn call_signature(
        &self,
        method: &MethodInfo,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        self.signature(&method.type_params, &method.params, &method.returns, vars)
    }

    /// `new<P>( a:T ):Self`.
    ///
    /// The declaring type's own parameters are in scope for the construction
    /// signature, ahead of the constructor's.
    pub(super) fn constructor_decl(
        &self,
        constructor: &ConstructorInfo,
        owner_params: &[String],
        owner: &TypeRef,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        let type_params: Vec<String> = owner_params
            .iter()
            .chain(&constructor.type_params)
            .cloned()
            .collect();
        let signature = self.signature(&type_params, &constructor.params, owner, vars)?;
        Ok(format!("new{signature}"))
    }

    fn signature(
        &self,
        type_params: &[String],
        params: &[Param],
        returns: &TypeRef,
        vars: &mut IndexSet<String>,
    ) -> Result<String> {
        let params = params
            .iter()
            .map(|p| Ok(format!("{}:{}", p.name, self.resolve(&p.ty, Qualify::Full, vars)?)))
            .collect::<Result<Vec<_>>>()?;
        let returns = self.resolve(returns, Qualify::Full, vars)?;
        Ok(format!(
            "{}( {} ):{returns}",
            generic_params(type_params),
            params.join(", ")
        ))
    }
}

/// Declaration-site generic parameter list: `<K,V>`, or nothing.
pub(super) fn generic_params<S: AsRef<str>>(params: &[S]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = params.iter().map(AsRef::as_ref).collect();
    format!("<{}>", joined.join(","))
}
