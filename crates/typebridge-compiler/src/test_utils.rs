//! Test utilities.

use indoc::indoc;
use typebridge_core::{ClassIndex, TypeName};

use crate::{Origin, Registry, TypeDescriptor};

/// Initialize a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A small application model used across tests.
pub const GEOM_MODEL: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "geom.Point",
          "superclass": "java.lang.Object",
          "interfaces": ["java.lang.Comparable<geom.Point>"],
          "fields": [
            { "name": "y", "type": "double" },
            { "name": "x", "type": "double" },
            { "name": "ORIGIN", "type": "geom.Point", "modifiers": ["static", "final"] },
            { "name": "serialVersionUID", "type": "long", "modifiers": ["private", "static", "final"] }
          ],
          "methods": [
            { "name": "translate", "parameters": [{ "name": "dx", "type": "double" }, { "name": "dy", "type": "double" }], "returns": "geom.Point" },
            { "name": "distance", "parameters": [{ "name": "other", "type": "geom.Point" }], "returns": "double" },
            { "name": "compareTo", "parameters": [{ "name": "o", "type": "geom.Point" }], "returns": "int" },
            { "name": "of", "parameters": [{ "name": "x", "type": "double" }, { "name": "y", "type": "double" }], "returns": "geom.Point", "modifiers": ["static"] },
            { "name": "hashCode", "returns": "int" },
            { "name": "getClass", "returns": "java.lang.Class<?>", "modifiers": ["final"] },
            { "name": "lambda$of$0", "returns": "void", "modifiers": ["private", "static", "synthetic"] }
          ],
          "constructors": [
            { "parameters": [] },
            { "parameters": [{ "name": "x", "type": "double" }, { "name": "y", "type": "double" }] }
          ]
        },
        {
          "name": "geom.Shape",
          "kind": "interface",
          "methods": [
            { "name": "area", "returns": "double", "modifiers": ["abstract"] },
            { "name": "kind", "returns": "geom.Shape$Kind", "modifiers": ["abstract"] },
            { "name": "vertices", "returns": "java.util.List<geom.Point>", "modifiers": ["abstract"] }
          ]
        },
        {
          "name": "geom.Shape$Kind",
          "kind": "enum",
          "superclass": "java.lang.Enum<geom.Shape$Kind>",
          "enumConstants": ["SQUARE", "CIRCLE"],
          "fields": [
            { "name": "CIRCLE", "type": "geom.Shape$Kind", "modifiers": ["static", "final"] }
          ],
          "methods": [
            { "name": "label", "returns": "java.lang.String" },
            { "name": "values", "returns": "geom.Shape$Kind[]", "modifiers": ["static"] }
          ]
        },
        {
          "name": "geom.Transform",
          "kind": "interface",
          "typeParameters": ["T"],
          "annotations": ["java.lang.FunctionalInterface"],
          "methods": [
            { "name": "apply", "parameters": [{ "name": "value", "type": "T" }], "returns": "T", "modifiers": ["abstract"] },
            { "name": "equals", "parameters": [{ "type": "java.lang.Object" }], "returns": "boolean", "modifiers": ["abstract"] },
            { "name": "twice", "returns": "geom.Transform<T>", "modifiers": ["default"] },
            { "name": "describe", "returns": "java.lang.String", "modifiers": ["default"] },
            { "name": "identity", "typeParameters": ["U"], "returns": "geom.Transform<U>", "modifiers": ["static"] }
          ]
        },
        {
          "name": "geom.Canvas",
          "modifiers": ["public", "abstract"],
          "methods": [
            { "name": "draw", "parameters": [{ "name": "shape", "type": "geom.Shape" }], "modifiers": ["abstract"] },
            { "name": "palette", "returns": "java.util.Map<java.lang.String, geom.Color>" }
          ],
          "constructors": [
            { "modifiers": ["protected"] },
            { "parameters": [{ "name": "width", "type": "int" }] }
          ]
        },
        {
          "name": "geom.Color",
          "modifiers": ["public", "final"]
        }
      ]
    }
"#};

/// The geometry model layered over the baseline.
pub fn geom_index() -> ClassIndex {
    let mut index = ClassIndex::from_json(GEOM_MODEL).expect("valid test model");
    index.merge(ClassIndex::baseline().expect("valid baseline"));
    index
}

/// A descriptor for a binary name.
pub fn declared(binary: &str) -> TypeDescriptor {
    TypeDescriptor::new(TypeName::parse(binary).expect("valid binary name"))
}

/// The builtin sets plus `discovered`.
pub fn registry_with(discovered: impl IntoIterator<Item = TypeDescriptor>) -> Registry {
    let mut registry = Registry::with_builtins();
    registry.extend(discovered, Origin::Discovered);
    registry
}
