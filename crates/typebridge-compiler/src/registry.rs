//! Registry: full-name lookup of every descriptor known to one run.

use indexmap::IndexMap;
use indexmap::map::Entry;
use typebridge_core::{TypeName, member_form};

use crate::TypeDescriptor;
use crate::builtin::{predefined_types, required_types};

/// Which descriptor set an entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Built-in aliases for primitive-like types; never rendered.
    Predefined,
    /// Standard types every run declares.
    Required,
    /// Declared by the collector.
    Discovered,
}

#[derive(Clone, Debug)]
struct RegistryEntry {
    descriptor: TypeDescriptor,
    origin: Origin,
}

/// Descriptors keyed by binary name, in insertion order.
///
/// Insertion keeps the first descriptor for a type: insert the predefined
/// set first so built-in flags are authoritative.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the predefined then the required sets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.extend(predefined_types(), Origin::Predefined);
        registry.extend(required_types(), Origin::Required);
        registry
    }

    /// Insert a descriptor. Returns `false` if the type is already registered;
    /// the existing entry and its flags are kept.
    pub fn insert(&mut self, descriptor: TypeDescriptor, origin: Origin) -> bool {
        match self.entries.entry(descriptor.name().binary_name()) {
            Entry::Occupied(e) => {
                tracing::debug!(
                    name = %descriptor.name(),
                    kept = ?e.get().origin,
                    dropped = ?origin,
                    "duplicate descriptor ignored"
                );
                false
            }
            Entry::Vacant(e) => {
                e.insert(RegistryEntry { descriptor, origin });
                true
            }
        }
    }

    pub fn extend(
        &mut self,
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
        origin: Origin,
    ) {
        for descriptor in descriptors {
            self.insert(descriptor, origin);
        }
    }

    /// Exact lookup by identity.
    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.entries.get(&name.binary_name()).map(|e| &e.descriptor)
    }

    /// Lookup by textual name, falling back to its member form.
    pub fn resolve(&self, name: &str) -> Option<&TypeDescriptor> {
        if let Some(entry) = self.entries.get(name) {
            return Some(&entry.descriptor);
        }
        let member = member_form(name)?;
        self.entries.get(&member).map(|e| &e.descriptor)
    }

    pub fn origin(&self, name: &TypeName) -> Option<Origin> {
        self.entries.get(&name.binary_name()).map(|e| e.origin)
    }

    pub fn is_predefined(&self, name: &TypeName) -> bool {
        self.origin(name) == Some(Origin::Predefined)
    }

    /// Every descriptor that gets a declaration block.
    pub fn renderable(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.entries
            .values()
            .filter(|e| e.origin != Origin::Predefined)
            .map(|e| &e.descriptor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.entries.values().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
