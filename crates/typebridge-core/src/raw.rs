//! Deserialization layer: 1:1 mapping to model files.
//!
//! Signatures stay as strings here; [`RawClass::link`] parses them against
//! the type variables in scope and produces a [`ClassInfo`].

use crate::signature::parse_type_ref;
use crate::{
    ClassInfo, ClassKind, ConstructorInfo, FieldInfo, MethodInfo, Modifier, Modifiers, ModelError,
    Param, TypeName, TypeRef,
};

/// Top-level model file.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawModel {
    #[serde(default)]
    pub types: Vec<RawClass>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClass {
    /// Binary name (`java.util.Map$Entry`).
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub constructors: Vec<RawConstructor>,
    #[serde(default)]
    pub enum_constants: Vec<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMethod {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<RawParam>,
    #[serde(default = "void_signature")]
    pub returns: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConstructor {
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<RawParam>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// Parameter; missing names become `arg<index>`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawParam {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

fn void_signature() -> String {
    "void".to_owned()
}

/// Parse model JSON into raw records.
pub fn parse_model(json: &str) -> Result<RawModel, serde_json::Error> {
    serde_json::from_str(json)
}

impl RawClass {
    /// Parse every signature and produce the linked record.
    pub fn link(&self) -> Result<ClassInfo, ModelError> {
        let name =
            TypeName::parse(&self.name).ok_or_else(|| ModelError::InvalidName(self.name.clone()))?;
        let class_scope = &self.type_parameters;

        let mut modifiers: Modifiers = self.modifiers.iter().copied().collect();
        if self.kind == ClassKind::Interface {
            modifiers = modifiers.with(Modifier::Abstract);
        }

        let superclass = self
            .superclass
            .as_deref()
            .map(|s| parse_type_ref(s, class_scope))
            .transpose()?;

        let interfaces = self
            .interfaces
            .iter()
            .map(|s| parse_type_ref(s, class_scope))
            .collect::<Result<Vec<_>, _>>()?;

        let fields = self
            .fields
            .iter()
            .map(|f| {
                Ok(FieldInfo {
                    name: f.name.clone(),
                    ty: parse_type_ref(&f.ty, class_scope)?,
                    modifiers: f.modifiers.iter().copied().collect(),
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        let methods = self
            .methods
            .iter()
            .map(|m| {
                let scope = scope_with(class_scope, &m.type_parameters);
                Ok(MethodInfo {
                    name: m.name.clone(),
                    type_params: m.type_parameters.clone(),
                    params: link_params(&m.parameters, &scope)?,
                    returns: parse_type_ref(&m.returns, &scope)?,
                    modifiers: m.modifiers.iter().copied().collect(),
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        let constructors = self
            .constructors
            .iter()
            .map(|c| {
                let scope = scope_with(class_scope, &c.type_parameters);
                Ok(ConstructorInfo {
                    type_params: c.type_parameters.clone(),
                    params: link_params(&c.parameters, &scope)?,
                    modifiers: c.modifiers.iter().copied().collect(),
                })
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        Ok(ClassInfo {
            name,
            kind: self.kind,
            modifiers,
            type_params: self.type_parameters.clone(),
            superclass,
            interfaces,
            annotations: self.annotations.clone(),
            fields,
            methods,
            constructors,
            enum_constants: self.enum_constants.clone(),
        })
    }
}

fn scope_with(class_scope: &[String], own: &[String]) -> Vec<String> {
    class_scope.iter().chain(own).cloned().collect()
}

fn link_params(params: &[RawParam], scope: &[String]) -> Result<Vec<Param>, ModelError> {
    params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let ty: TypeRef = parse_type_ref(&p.ty, scope)?;
            Ok(Param {
                name: p.name.clone().unwrap_or_else(|| format!("arg{i}")),
                ty,
            })
        })
        .collect()
}
