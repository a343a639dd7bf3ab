//! TypeScript emitter from a host type model.
//!
//! Produces two artifacts: ambient declarations (`.d.ts`) and runtime
//! bindings (`.js`) that acquire the native types inside a script engine.

mod binding;
mod compat;
mod config;
mod declaration;
mod emitter;
mod members;
mod resolve;

#[cfg(test)]
mod emitter_tests;

pub use compat::{Acquisition, Compatibility, CompatibilityStrategy};
pub use config::Config;
pub use emitter::{Emitter, Output};
pub use resolve::{Qualify, Resolver};

use typebridge_core::MemberSource;

use crate::{Registry, Result};

/// Emit both artifacts for every renderable descriptor in `registry`.
pub fn emit(registry: &Registry, source: &dyn MemberSource) -> Result<Output> {
    Emitter::new(registry, source, Config::default()).emit()
}

/// Emit both artifacts with custom config.
pub fn emit_with_config(
    registry: &Registry,
    source: &dyn MemberSource,
    config: Config,
) -> Result<Output> {
    Emitter::new(registry, source, config).emit()
}
