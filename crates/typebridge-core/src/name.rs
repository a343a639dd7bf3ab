//! Canonical type identity.
//!
//! A [`TypeName`] is a package path plus a chain of nested simple names.
//! It has two textual renderings that must never be derived from each other
//! by string surgery:
//! - **binary**: `pkg.Outer$Inner`, the runtime-lookup form
//! - **canonical**: `pkg.Outer.Inner`, the source-level form

use std::fmt;

/// Separator between an enclosing type and a member type in binary names.
pub const MEMBER_SEPARATOR: char = '$';

/// Separator between package segments.
pub const PACKAGE_SEPARATOR: char = '.';

/// Identity of one host type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName {
    package: String,
    /// Outermost first; never empty.
    nesting: Vec<String>,
}

impl TypeName {
    /// Create a top-level type name.
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            nesting: vec![simple.into()],
        }
    }

    /// Create a member type nested inside `self`.
    pub fn member(&self, simple: impl Into<String>) -> Self {
        let mut nesting = self.nesting.clone();
        nesting.push(simple.into());
        Self {
            package: self.package.clone(),
            nesting,
        }
    }

    /// Parse a binary name (`java.util.Map$Entry`).
    ///
    /// Returns `None` for empty input or empty segments.
    pub fn parse(binary: &str) -> Option<Self> {
        let (package, rest) = match binary.rfind(PACKAGE_SEPARATOR) {
            Some(idx) => {
                let package = &binary[..idx];
                if package.split(PACKAGE_SEPARATOR).any(str::is_empty) {
                    return None;
                }
                (package, &binary[idx + 1..])
            }
            None => ("", binary),
        };

        let nesting: Vec<String> = rest.split(MEMBER_SEPARATOR).map(str::to_owned).collect();
        if nesting.iter().any(String::is_empty) {
            return None;
        }

        Some(Self {
            package: package.to_owned(),
            nesting,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.nesting.last().map(String::as_str).unwrap_or_default()
    }

    /// Immediately enclosing type's simple name, for member types.
    pub fn enclosing_simple_name(&self) -> Option<&str> {
        let len = self.nesting.len();
        if len < 2 {
            return None;
        }
        Some(&self.nesting[len - 2])
    }

    pub fn is_nested(&self) -> bool {
        self.nesting.len() > 1
    }

    /// Name used for declarations inside a namespace.
    ///
    /// Member types join the enclosing simple name and their own with
    /// [`MEMBER_SEPARATOR`] so they never collide with namespace paths.
    pub fn declaration_name(&self) -> String {
        match self.enclosing_simple_name() {
            Some(outer) => format!("{outer}{MEMBER_SEPARATOR}{}", self.simple_name()),
            None => self.simple_name().to_owned(),
        }
    }

    /// Runtime-lookup rendering: `pkg.Outer$Inner`.
    pub fn binary_name(&self) -> String {
        self.render(MEMBER_SEPARATOR)
    }

    /// Source-level rendering: `pkg.Outer.Inner`.
    pub fn canonical_name(&self) -> String {
        self.render(PACKAGE_SEPARATOR)
    }

    fn render(&self, member_separator: char) -> String {
        let mut out = String::with_capacity(self.package.len() + 16);
        if !self.package.is_empty() {
            out.push_str(&self.package);
            out.push(PACKAGE_SEPARATOR);
        }
        for (i, segment) in self.nesting.iter().enumerate() {
            if i > 0 {
                out.push(member_separator);
            }
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary_name())
    }
}

/// Rewrite the last package separator of `name` into a member separator.
///
/// This is the fallback applied when a source-level name such as
/// `java.util.Map.Entry` misses an exact lookup.
pub fn member_form(name: &str) -> Option<String> {
    let idx = name.rfind(PACKAGE_SEPARATOR)?;
    let mut out = String::with_capacity(name.len());
    out.push_str(&name[..idx]);
    out.push(MEMBER_SEPARATOR);
    out.push_str(&name[idx + 1..]);
    Some(out)
}
