//! Configuration types for TypeScript emission.

use super::{Compatibility, CompatibilityStrategy};

const DEFAULT_REFERENCE_PATH: &str = "out.d.ts";

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Script engine the artifacts target
    pub(crate) strategy: CompatibilityStrategy,
    /// Path of the declarations artifact, referenced from the bindings
    pub(crate) reference_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: CompatibilityStrategy::default(),
            reference_path: DEFAULT_REFERENCE_PATH.to_owned(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target script engine.
    pub fn compatibility(mut self, value: Compatibility) -> Self {
        self.strategy = CompatibilityStrategy::new(value)
            .foreign_object_prototype(self.strategy.has_foreign_object_prototype());
        self
    }

    /// Set whether foreign lists inherit the native array prototype.
    pub fn foreign_object_prototype(mut self, value: bool) -> Self {
        self.strategy = self.strategy.foreign_object_prototype(value);
        self
    }

    /// Set the declarations path written into the bindings reference comment.
    pub fn reference_path(mut self, value: impl Into<String>) -> Self {
        self.reference_path = value.into();
        self
    }

    pub fn strategy(&self) -> &CompatibilityStrategy {
        &self.strategy
    }
}
