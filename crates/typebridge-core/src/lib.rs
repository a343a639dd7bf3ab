#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the typebridge host type model.
//!
//! Two layers:
//! - **Deserialization layer** (`raw`): 1:1 mapping to model files
//! - **Analysis layer**: linked [`ClassInfo`] records served by a [`MemberSource`]
//!
//! Type identity is a [`TypeName`]; referenced types in signatures are
//! [`TypeRef`] trees produced by the signature parser.

mod index;
mod model;
mod name;
pub mod raw;
pub mod signature;
mod type_ref;
pub mod utils;

#[cfg(test)]
mod index_tests;

pub use index::{ClassIndex, MemberSource};
pub use model::{
    ClassInfo, ClassKind, ConstructorInfo, FUNCTIONAL_INTERFACE, FieldInfo, MethodInfo, Modifier,
    Modifiers, Param,
};
pub use name::{MEMBER_SEPARATOR, PACKAGE_SEPARATOR, TypeName, member_form};
pub use signature::{SignatureError, parse_type_ref};
pub use type_ref::{Primitive, SimpleDisplay, TypeRef};

/// Errors raised while loading a type model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("malformed model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("invalid type name `{0}`")]
    InvalidName(String),
}
