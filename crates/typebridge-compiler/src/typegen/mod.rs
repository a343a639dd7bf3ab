//! Declaration generation for script targets.

pub mod typescript;
