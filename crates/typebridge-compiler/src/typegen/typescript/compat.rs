//! Compatibility strategy: everything that differs between script engines.

use std::fmt;
use std::str::FromStr;

use typebridge_core::{ClassInfo, TypeName};

use crate::Error;

const HEADER: &str = include_str!("../../../data/header.d.ts");
const HEADER_RHINO: &str = include_str!("../../../data/header-rhino.d.ts");

/// Binary name of the list type emulated as a native array.
const LIST: &str = "java.util.List";

/// List members that collide with array-native semantics.
const LIST_AS_ARRAY_EXCLUDED: &[&str] = &["forEach", "indexOf", "lastIndexOf", "sort"];

/// Supported script engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compatibility {
    Nashorn,
    Rhino,
    #[default]
    GraalJs,
}

impl FromStr for Compatibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nashorn" => Ok(Self::Nashorn),
            "rhino" => Ok(Self::Rhino),
            "graaljs" => Ok(Self::GraalJs),
            _ => Err(Error::UnknownCompatibility(s.to_owned())),
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nashorn => "nashorn",
            Self::Rhino => "rhino",
            Self::GraalJs => "graaljs",
        })
    }
}

/// How a binding obtains a native type at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquisition {
    /// The type itself, for constructible types.
    Type,
    /// A constructor that implements the type, for abstract types.
    Constructor,
}

/// Engine-specific rules, selected once per run and shared read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompatibilityStrategy {
    mode: Compatibility,
    foreign_object_prototype: bool,
}

impl CompatibilityStrategy {
    pub fn new(mode: Compatibility) -> Self {
        Self {
            mode,
            foreign_object_prototype: false,
        }
    }

    /// Set whether foreign lists inherit the native array prototype (GraalJS only).
    pub fn foreign_object_prototype(mut self, value: bool) -> Self {
        self.foreign_object_prototype = value;
        self
    }

    pub fn mode(&self) -> Compatibility {
        self.mode
    }

    pub fn has_foreign_object_prototype(&self) -> bool {
        self.foreign_object_prototype
    }

    fn list_as_array(&self, name: &TypeName) -> bool {
        self.mode == Compatibility::GraalJs
            && self.foreign_object_prototype
            && name.binary_name() == LIST
    }

    /// Whether `member` of `owner` is suppressed for this engine.
    pub fn is_excluded(&self, owner: &TypeName, member: &str) -> bool {
        self.list_as_array(owner) && LIST_AS_ARRAY_EXCLUDED.contains(&member)
    }

    /// Native supertype the type's interface extends, if any.
    pub fn native_supertype(&self, class: &ClassInfo) -> Option<String> {
        if !self.list_as_array(&class.name) {
            return None;
        }
        let element = class.type_params.first().map_or("any", String::as_str);
        Some(format!("Array<{element}>"))
    }

    /// Expression that acquires a native type inside the script engine.
    pub fn acquire(&self, name: &TypeName, acquisition: Acquisition) -> String {
        let binary = name.binary_name();
        match (self.mode, acquisition) {
            (Compatibility::Rhino, Acquisition::Type) => format!("Packages.{binary}"),
            (Compatibility::Rhino, Acquisition::Constructor) => {
                format!("function(impl) {{ return new JavaAdapter(Packages.{binary}, impl); }}")
            }
            (_, Acquisition::Type) => format!("Java.type(\"{binary}\")"),
            (_, Acquisition::Constructor) => format!("Java.extend(Java.type(\"{binary}\"))"),
        }
    }

    /// Interop declarations placed at the top of the declarations artifact.
    pub fn declarations_header(&self) -> &'static str {
        match self.mode {
            Compatibility::Rhino => HEADER_RHINO,
            Compatibility::Nashorn | Compatibility::GraalJs => HEADER,
        }
    }
}
