//! Member sources: where class and member information comes from.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::name::member_form;
use crate::raw::parse_model;
use crate::{ClassInfo, ModelError, TypeName};

const BASELINE_JSON: &str = include_str!("../data/baseline.json");

/// Provider of class and member information for type identities.
///
/// Implementations may scan a live runtime or, like [`ClassIndex`], serve a
/// precomputed index. Lookups never mutate the source.
pub trait MemberSource {
    /// Class information for an exact identity.
    fn class(&self, name: &TypeName) -> Option<&ClassInfo>;

    /// Class information by textual name.
    ///
    /// Tries the name as a binary name first, then its member form
    /// (`java.util.Map.Entry` → `java.util.Map$Entry`).
    fn lookup(&self, name: &str) -> Option<&ClassInfo> {
        if let Some(parsed) = TypeName::parse(name) {
            if let Some(class) = self.class(&parsed) {
                return Some(class);
            }
        }
        let member = member_form(name)?;
        self.class(&TypeName::parse(&member)?)
    }
}

impl<T: MemberSource + ?Sized> MemberSource for &T {
    fn class(&self, name: &TypeName) -> Option<&ClassInfo> {
        (*self).class(name)
    }
}

/// Precomputed index of classes keyed by identity, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    classes: IndexMap<TypeName, ClassInfo>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and link a model file.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw = parse_model(json)?;
        let mut index = Self::new();
        for class in &raw.types {
            index.insert(class.link()?);
        }
        Ok(index)
    }

    /// The bundled model of the standard runtime types the engine always registers.
    pub fn baseline() -> Result<Self, ModelError> {
        Self::from_json(BASELINE_JSON)
    }

    /// Insert a class. Returns `false` (and keeps the existing entry) on duplicates.
    pub fn insert(&mut self, class: ClassInfo) -> bool {
        match self.classes.entry(class.name.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(class);
                true
            }
        }
    }

    /// Add every class of `other` not already present.
    pub fn merge(&mut self, other: ClassIndex) {
        for (_, class) in other.classes {
            self.insert(class);
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }
}

impl MemberSource for ClassIndex {
    fn class(&self, name: &TypeName) -> Option<&ClassInfo> {
        self.classes.get(name)
    }
}

impl FromIterator<ClassInfo> for ClassIndex {
    fn from_iter<I: IntoIterator<Item = ClassInfo>>(iter: I) -> Self {
        let mut index = Self::new();
        for class in iter {
            index.insert(class);
        }
        index
    }
}
