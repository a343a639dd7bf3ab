//! Declaration block for one descriptor.
//!
//! Emission walks a fixed sequence: namespace open, class header, members,
//! class close, static interface, namespace close, export constant. Only the
//! content of each step varies.

use indexmap::IndexSet;
use typebridge_core::{ClassInfo, TypeName, TypeRef};

use super::members::{
    generic_params, is_constructor_eligible, is_field_eligible, is_method_eligible, sorted,
};
use super::{CompatibilityStrategy, Qualify, Resolver};
use crate::{Result, TypeDescriptor};

const INDENT: &str = "  ";

/// Render the declaration block of `descriptor`.
pub(super) fn render(
    resolver: Resolver<'_>,
    strategy: &CompatibilityStrategy,
    descriptor: &TypeDescriptor,
    class: &ClassInfo,
) -> Result<String> {
    Declaration {
        resolver,
        strategy,
        descriptor,
        class,
        functional: descriptor.is_functional(class),
        output: String::new(),
    }
    .render()
}

struct Declaration<'a> {
    resolver: Resolver<'a>,
    strategy: &'a CompatibilityStrategy,
    descriptor: &'a TypeDescriptor,
    class: &'a ClassInfo,
    functional: bool,
    output: String,
}

impl Declaration<'_> {
    fn render(mut self) -> Result<String> {
        let namespace = self
            .descriptor
            .supports_namespace()
            .then(|| self.descriptor.namespace().to_owned());

        let descriptor = self.descriptor;
        if let Some(ns) = &namespace {
            self.output.push_str(&format!("declare namespace {ns} {{\n\n"));
        }
        self.push_raw(descriptor.pre());

        self.class_header()?;
        self.instance_members()?;
        self.output.push_str(&format!(
            "\n}} // end {}\n",
            descriptor.simple_type_name()
        ));

        self.static_interface()?;
        self.push_raw(descriptor.post());

        if let Some(ns) = &namespace {
            self.output.push_str(&format!("\n}} // end namespace {ns}\n"));
        }

        self.export_constant();
        Ok(self.output)
    }

    fn class_header(&mut self) -> Result<()> {
        let mut vars = IndexSet::new();
        let name = self
            .resolver
            .resolve(&self.class.self_type(), Qualify::Bare, &mut vars)?;
        let native = self
            .strategy
            .native_supertype(self.class)
            .map(|n| format!(" extends {n}"))
            .unwrap_or_default();
        let supertypes = self.supertypes_comment();
        self.output
            .push_str(&format!("interface {name}{native}{supertypes} {{\n\n"));
        Ok(())
    }

    /// Declared supertypes as a comment, using simple names.
    fn supertypes_comment(&self) -> String {
        let mut parts = Vec::new();

        let superclass = self
            .class
            .superclass
            .as_ref()
            .filter(|s| !s.type_name().is_some_and(is_universal_object));
        if let Some(superclass) = superclass {
            parts.push(format!("extends {}", superclass.display_simple()));
        }

        if !self.class.interfaces.is_empty() {
            let keyword = if self.class.is_interface() {
                "extends"
            } else {
                "implements"
            };
            let names: Vec<String> = self
                .class
                .interfaces
                .iter()
                .map(|i| i.display_simple().to_string())
                .collect();
            parts.push(format!("{keyword} {}", names.join(", ")));
        }

        if parts.is_empty() {
            return String::new();
        }
        format!("/* {} */", parts.join(" "))
    }

    fn instance_members(&mut self) -> Result<()> {
        let class = self.class;
        let mut vars = IndexSet::new();

        let optional_fields = class.is_interface();
        let mut fields = Vec::new();
        for field in &class.fields {
            if field.modifiers.is_static() || !is_field_eligible(field) {
                continue;
            }
            fields.push(self.resolver.field_decl(field, optional_fields, &mut vars)?);
        }
        self.push_lines(sorted(fields));

        if self.functional {
            return self.functional_members(&mut vars);
        }

        let qualified = self.qualified_self()?;
        let constants = class
            .enum_constants
            .iter()
            .map(|c| format!("{c}:{qualified}"))
            .collect();
        self.push_lines(sorted(constants));

        let skip_static = self.descriptor.is_export();
        let mut methods = Vec::new();
        for method in &class.methods {
            if skip_static && method.modifiers.is_static() {
                continue;
            }
            if !is_method_eligible(method) || self.is_excluded(&method.name) {
                continue;
            }
            methods.push(self.resolver.method_decl(method, false, &mut vars)?);
        }
        self.push_lines(sorted(methods));
        Ok(())
    }

    /// The single abstract member as a call signature, everything else optional.
    fn functional_members(&mut self, vars: &mut IndexSet<String>) -> Result<()> {
        let class = self.class;
        let single = class
            .abstract_methods()
            .find(|m| is_method_eligible(m) && !self.is_excluded(&m.name));
        if let Some(method) = single {
            let line = self.resolver.call_signature(method, vars)?;
            self.push_line(&line);
        }

        let mut optional = Vec::new();
        for method in &class.methods {
            if method.modifiers.is_abstract() {
                continue;
            }
            if !is_method_eligible(method) || self.is_excluded(&method.name) {
                continue;
            }
            optional.push(self.resolver.method_decl(method, true, vars)?);
        }
        self.push_lines(sorted(optional));
        Ok(())
    }

    fn static_interface(&mut self) -> Result<()> {
        let class = self.class;
        let name = format!("{}Static", self.descriptor.simple_type_name());
        self.output.push_str(&format!("interface {name} {{\n\n"));
        self.push_line("readonly class:any");

        let mut vars = IndexSet::new();
        let mut statics = Vec::new();
        for field in &class.fields {
            if !field.modifiers.is_static() || !is_field_eligible(field) {
                continue;
            }
            statics.push(self.resolver.field_decl(field, false, &mut vars)?);
        }
        let qualified = self.qualified_self()?;
        for constant in &class.enum_constants {
            let declared = class
                .fields
                .iter()
                .any(|f| f.modifiers.is_static() && &f.name == constant);
            if !declared {
                statics.push(format!("readonly {constant}:{qualified}"));
            }
        }
        self.push_lines(sorted(statics));

        if self.functional {
            self.functional_constructor()?;
        } else {
            self.constructors(&mut vars)?;

            let mut methods = Vec::new();
            for method in &class.methods {
                if method.modifiers.is_static() && is_method_eligible(method) {
                    methods.push(self.resolver.method_decl(method, false, &mut vars)?);
                }
            }
            self.push_lines(sorted(methods));
        }

        self.output.push_str(&format!("\n}} // end {name}\n"));
        Ok(())
    }

    /// `new<T,R>( arg0:Self ):Self`, generic over every captured type variable.
    fn functional_constructor(&mut self) -> Result<()> {
        let mut captured = IndexSet::new();
        let ty = self
            .resolver
            .resolve(&self.class.self_type(), Qualify::Bare, &mut captured)?;
        let captured: Vec<String> = captured.into_iter().collect();
        let line = format!("new{}( arg0:{ty} ):{ty}", generic_params(&captured));
        self.push_line(&line);
        Ok(())
    }

    /// Public constructors in declaration order. Abstract types have none.
    fn constructors(&mut self, vars: &mut IndexSet<String>) -> Result<()> {
        let class = self.class;
        if class.is_abstract() {
            return Ok(());
        }
        let owner = class.self_type();
        for constructor in &class.constructors {
            if !is_constructor_eligible(constructor) {
                continue;
            }
            let line = self.resolver.constructor_decl(
                constructor,
                &class.type_params,
                &owner,
                vars,
            )?;
            self.push_line(&line);
        }
        Ok(())
    }

    fn export_constant(&mut self) {
        if !self.descriptor.is_export() {
            return;
        }
        let type_name = self.descriptor.type_name();
        let ty = if self.class.is_abstract() {
            type_name
        } else {
            format!("{type_name}Static")
        };
        self.output.push_str(&format!(
            "declare const {}: {ty};\n\n",
            self.descriptor.simple_type_name()
        ));
    }

    fn qualified_self(&self) -> Result<String> {
        let ty = TypeRef::Class(self.class.name.clone());
        self.resolver
            .resolve(&ty, Qualify::Full, &mut IndexSet::new())
    }

    fn is_excluded(&self, member: &str) -> bool {
        self.strategy.is_excluded(&self.class.name, member)
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(INDENT);
        self.output.push_str(line);
        self.output.push_str(";\n");
    }

    fn push_lines(&mut self, lines: Vec<String>) {
        for line in &lines {
            self.push_line(line);
        }
    }

    /// Verbatim text, terminated by a newline when non-empty.
    fn push_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.output.push_str(text);
        if !text.ends_with('\n') {
            self.output.push('\n');
        }
    }
}

fn is_universal_object(name: &TypeName) -> bool {
    name.package() == "java.lang" && name.simple_name() == "Object" && !name.is_nested()
}
