//! Runtime binding statements for exported descriptors.

use typebridge_core::ClassInfo;

use super::{Acquisition, CompatibilityStrategy};
use crate::TypeDescriptor;

/// `export const <Name> = <acquisition>;`
///
/// Abstract types bind a constructor that implements them; everything else
/// binds the native type itself.
pub(super) fn render(
    strategy: &CompatibilityStrategy,
    descriptor: &TypeDescriptor,
    class: &ClassInfo,
) -> String {
    let acquisition = if class.is_abstract() {
        Acquisition::Constructor
    } else {
        Acquisition::Type
    };
    format!(
        "export const {} = {};\n\n",
        descriptor.simple_type_name(),
        strategy.acquire(descriptor.name(), acquisition)
    )
}
