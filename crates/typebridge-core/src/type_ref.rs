//! Referenced types as they appear in member signatures.

use std::fmt;

use crate::TypeName;

/// Primitive kinds, including `void`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Void,
}

impl Primitive {
    pub fn from_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "char" => Self::Char,
            "void" => Self::Void,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Void => "void",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }
}

/// A type reference inside a signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(Primitive),
    Array(Box<TypeRef>),
    Class(TypeName),
    Parameterized { raw: TypeName, args: Vec<TypeRef> },
    Variable(String),
    /// `?`, `? extends T` or `? super T`. Bounds are not kept.
    Wildcard,
}

impl TypeRef {
    pub fn class(name: TypeName) -> Self {
        Self::Class(name)
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// The named type this reference is rooted at, if any.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self {
            Self::Class(name) | Self::Parameterized { raw: name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::Void))
    }

    /// Source-like rendering with simple names only, used in comments.
    pub fn display_simple(&self) -> SimpleDisplay<'_> {
        SimpleDisplay(self)
    }
}

/// Renders a [`TypeRef`] using simple names.
pub struct SimpleDisplay<'a>(&'a TypeRef);

impl fmt::Display for SimpleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TypeRef::Primitive(p) => f.write_str(p.keyword()),
            TypeRef::Array(inner) => write!(f, "{}[]", inner.display_simple()),
            TypeRef::Class(name) => f.write_str(name.simple_name()),
            TypeRef::Parameterized { raw, args } => {
                write!(f, "{}<", raw.simple_name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg.display_simple())?;
                }
                f.write_str(">")
            }
            TypeRef::Variable(name) => f.write_str(name),
            TypeRef::Wildcard => f.write_str("?"),
        }
    }
}
