//! Identifier helpers shared by the model loader and the member filter.

/// Whether `c` may start a host-language identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Whether `c` may continue a host-language identifier.
pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whether `name` is a well-formed host-language identifier.
///
/// # Examples
/// ```
/// use typebridge_core::utils::is_identifier;
/// assert!(is_identifier("getName"));
/// assert!(!is_identifier("<init>"));
/// assert!(!is_identifier("1st"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Whether `name` carries a compiler-generated member separator (`lambda$run$0`).
pub fn is_mangled(name: &str) -> bool {
    name.contains('$')
}
