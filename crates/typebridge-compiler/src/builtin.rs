//! Built-in descriptor sets.

use typebridge_core::TypeName;

use crate::TypeDescriptor;

const JAVA_LANG: &str = "java.lang";
const JAVA_UTIL: &str = "java.util";
const JAVA_UTIL_FUNCTION: &str = "java.util.function";
const JAVA_UTIL_STREAM: &str = "java.util.stream";

fn declare(package: &str, simple: &str) -> TypeDescriptor {
    TypeDescriptor::new(TypeName::new(package, simple))
}

/// Boxed and universal types that map onto target-language keywords.
///
/// They are only ever referenced, never rendered.
pub fn predefined_types() -> Vec<TypeDescriptor> {
    [
        ("Object", "any"),
        ("String", "string"),
        ("CharSequence", "string"),
        ("Character", "string"),
        ("Boolean", "boolean"),
        ("Byte", "number"),
        ("Short", "number"),
        ("Integer", "number"),
        ("Long", "number"),
        ("Float", "number"),
        ("Double", "number"),
        ("Number", "number"),
        ("Void", "void"),
    ]
    .into_iter()
    .map(|(simple, alias)| declare(JAVA_LANG, simple).with_alias(alias))
    .collect()
}

/// Standard types every run declares.
pub fn required_types() -> Vec<TypeDescriptor> {
    let mut types = vec![
        declare(JAVA_LANG, "String").with_export(true),
        declare(JAVA_LANG, "Iterable")
            .with_export(true)
            .with_functional(true),
        declare(JAVA_UTIL, "Iterator"),
        declare(JAVA_UTIL, "Collection"),
        declare(JAVA_UTIL, "List"),
        declare(JAVA_UTIL, "Set"),
        declare(JAVA_UTIL, "Map"),
        declare(JAVA_UTIL, "Optional").with_export(true),
        declare(JAVA_UTIL_STREAM, "Stream").with_export(true),
        // utility classes
        declare(JAVA_UTIL_STREAM, "Collectors").with_export(true),
        declare(JAVA_UTIL, "Collections").with_export(true),
        // native functional interfaces
        declare(JAVA_UTIL_FUNCTION, "Function").with_alias("Func"),
    ];

    types.extend(
        [
            "BiFunction",
            "Consumer",
            "BiConsumer",
            "UnaryOperator",
            "BinaryOperator",
            "Supplier",
            "Predicate",
            "BiPredicate",
        ]
        .into_iter()
        .map(|simple| declare(JAVA_UTIL_FUNCTION, simple).with_alias(simple)),
    );

    types.push(declare(JAVA_LANG, "Runnable"));
    types.push(declare(JAVA_LANG, "Comparable"));
    types
}
