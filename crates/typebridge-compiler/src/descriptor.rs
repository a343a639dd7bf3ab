//! Emission-time records: one host type plus its emission flags.

use std::hash::{Hash, Hasher};

use typebridge_core::{ClassInfo, TypeName};

/// One host type selected for emission.
///
/// Identity is the underlying [`TypeName`] alone: two descriptors for the same
/// type are equal whatever their flags.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    name: TypeName,
    export: bool,
    alias: Option<String>,
    namespace: Option<String>,
    functional: bool,
    pre: String,
    post: String,
}

impl TypeDescriptor {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            export: false,
            alias: None,
            namespace: None,
            functional: false,
            pre: String::new(),
            post: String::new(),
        }
    }

    /// Set whether a runtime value binding is emitted.
    pub fn with_export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set the emitted name. An empty alias counts as none.
    pub fn with_alias(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.alias = (!value.is_empty()).then_some(value);
        self
    }

    /// Override the enclosing namespace (defaults to the package).
    pub fn with_namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    /// Hint that an interface with exactly one abstract member is functional.
    pub fn with_functional(mut self, value: bool) -> Self {
        self.functional = value;
        self
    }

    /// Raw text inserted before the type's interface.
    pub fn with_pre(mut self, value: impl Into<String>) -> Self {
        self.pre = value.into();
        self
    }

    /// Raw text inserted after the type's static interface.
    pub fn with_post(mut self, value: impl Into<String>) -> Self {
        self.post = value.into();
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn is_export(&self) -> bool {
        self.export
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn pre(&self) -> &str {
        &self.pre
    }

    pub fn post(&self) -> &str {
        &self.post
    }

    /// Enclosing namespace: the override, else the package.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(self.name.package())
    }

    /// Aliased types and types without a namespace are declared globally.
    pub fn supports_namespace(&self) -> bool {
        self.alias.is_none() && !self.namespace().is_empty()
    }

    /// Name used inside the declaring namespace.
    pub fn simple_type_name(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.name.declaration_name(),
        }
    }

    /// Name used from anywhere: namespace-qualified unless aliased.
    pub fn type_name(&self) -> String {
        if !self.supports_namespace() {
            return self.simple_type_name();
        }
        format!("{}.{}", self.namespace(), self.name.declaration_name())
    }

    /// Whether the type collapses to a functional shape.
    ///
    /// Annotated interfaces always do; otherwise the hint must be set and the
    /// interface must declare exactly one abstract member.
    pub fn is_functional(&self, class: &ClassInfo) -> bool {
        if !class.is_interface() {
            return false;
        }
        if class.is_functional_annotated() {
            return true;
        }
        self.functional && class.abstract_methods().count() == 1
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A value declared as an ambient constant of a host type.
///
/// The type is written as its binary name, never resolved against the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalBinding {
    pub name: String,
    pub ty: TypeName,
}

impl GlobalBinding {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Raw text spliced around a generated section, passed through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnippetPair {
    pub pre: String,
    pub post: String,
}

impl SnippetPair {
    pub fn new(pre: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            pre: pre.into(),
            post: post.into(),
        }
    }
}
