//! typebridge compiler: host type model to TypeScript declarations.
//!
//! This crate provides the type-translation engine:
//! - `descriptor` - emission-time records for one host type
//! - `registry` - full-name lookup of every descriptor known to a run
//! - `builtin` - the predefined and required descriptor sets
//! - `manifest` - collector manifest loading
//! - `typegen` - TypeScript declarations and runtime bindings

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod builtin;
mod descriptor;
pub mod manifest;
mod registry;
pub mod typegen;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod manifest_tests;

pub use builtin::{predefined_types, required_types};
pub use descriptor::{GlobalBinding, SnippetPair, TypeDescriptor};
pub use manifest::Manifest;
pub use registry::{Origin, Registry};
pub use typegen::typescript::{Compatibility, CompatibilityStrategy, Config, Emitter, Output};

use typebridge_core::ModelError;

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced type is neither declared nor present in the type model.
    #[error("unresolved type `{0}`: not declared and not present in the type model")]
    UnresolvedType(String),

    /// A declared type has no class information.
    #[error("type `{0}` is not present in the type model")]
    UnknownType(String),

    #[error("unknown compatibility mode `{0}` (expected nashorn, rhino or graaljs)")]
    UnknownCompatibility(String),

    #[error("malformed manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
