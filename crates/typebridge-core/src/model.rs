//! Linked class and member records.
//!
//! These are the analysis-layer records: every signature is already parsed
//! into a [`TypeRef`] with type variables resolved against their scope.

use crate::{TypeName, TypeRef};

/// Annotation marking a single-abstract-method interface.
pub const FUNCTIONAL_INTERFACE: &str = "java.lang.FunctionalInterface";

/// Kind of a host type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A single member or type modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Package,
    Static,
    Abstract,
    Final,
    Default,
    Synthetic,
    Bridge,
}

impl Modifier {
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Compact modifier set.
///
/// A set without any visibility modifier is public.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers(u16);

impl Modifiers {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.0 |= modifier.bit();
        self
    }

    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_public(self) -> bool {
        if self.contains(Modifier::Public) {
            return true;
        }
        !(self.contains(Modifier::Protected)
            || self.contains(Modifier::Private)
            || self.contains(Modifier::Package))
    }

    pub fn is_static(self) -> bool {
        self.contains(Modifier::Static)
    }

    pub fn is_abstract(self) -> bool {
        self.contains(Modifier::Abstract)
    }

    pub fn is_final(self) -> bool {
        self.contains(Modifier::Final)
    }

    /// Compiler-synthesized or bridging artifact.
    pub fn is_generated(self) -> bool {
        self.contains(Modifier::Synthetic) || self.contains(Modifier::Bridge)
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Method or constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub type_params: Vec<String>,
    pub params: Vec<Param>,
    pub returns: TypeRef,
    pub modifiers: Modifiers,
}

impl MethodInfo {
    /// Redeclaration of a universal-object method (`equals`, `hashCode`, `toString`).
    ///
    /// These never count as the abstract member of a functional shape.
    pub fn is_object_method(&self) -> bool {
        matches!(
            (self.name.as_str(), self.params.len()),
            ("equals", 1) | ("hashCode", 0) | ("toString", 0)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorInfo {
    pub type_params: Vec<String>,
    pub params: Vec<Param>,
    pub modifiers: Modifiers,
}

/// One host type with its candidate members.
///
/// `fields` and `methods` hold every member a reflective scan would report
/// (declared and inherited public members); eligibility is decided later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: TypeName,
    pub kind: ClassKind,
    pub modifiers: Modifiers,
    pub type_params: Vec<String>,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub annotations: Vec<String>,
    pub fields: Vec<FieldInfo>,
    pub methods: Vec<MethodInfo>,
    pub constructors: Vec<ConstructorInfo>,
    pub enum_constants: Vec<String>,
}

impl ClassInfo {
    /// A class with no members.
    pub fn new(name: TypeName, kind: ClassKind) -> Self {
        Self {
            name,
            kind,
            modifiers: Modifiers::empty().with(Modifier::Public),
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            enum_constants: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    /// Interfaces are always abstract.
    pub fn is_abstract(&self) -> bool {
        self.is_interface() || self.modifiers.is_abstract()
    }

    pub fn is_functional_annotated(&self) -> bool {
        self.annotations.iter().any(|a| a == FUNCTIONAL_INTERFACE)
    }

    /// Abstract methods declared on this type, excluding universal-object redeclarations.
    pub fn abstract_methods(&self) -> impl Iterator<Item = &MethodInfo> {
        self.methods
            .iter()
            .filter(|m| m.modifiers.is_abstract() && !m.is_object_method())
    }

    /// The type itself, parameterized over its own type variables.
    pub fn self_type(&self) -> TypeRef {
        if self.type_params.is_empty() {
            return TypeRef::Class(self.name.clone());
        }
        TypeRef::Parameterized {
            raw: self.name.clone(),
            args: self
                .type_params
                .iter()
                .map(|p| TypeRef::Variable(p.clone()))
                .collect(),
        }
    }
}
