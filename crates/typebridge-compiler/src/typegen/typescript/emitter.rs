//! Core emitter struct and artifact assembly.

use typebridge_core::{ClassInfo, MemberSource};

use super::{Config, Resolver, binding, declaration};
use crate::{Error, GlobalBinding, Registry, Result, SnippetPair, TypeDescriptor};

/// The two generated artifacts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    /// Ambient declarations (`.d.ts`).
    pub declarations: String,
    /// Runtime bindings (`.js`).
    pub bindings: String,
}

/// TypeScript emitter over a registry and a member source.
pub struct Emitter<'a> {
    registry: &'a Registry,
    source: &'a dyn MemberSource,
    config: Config,
    globals: Vec<GlobalBinding>,
    type_snippets: Vec<SnippetPair>,
    script_snippets: Vec<SnippetPair>,
}

impl<'a> Emitter<'a> {
    pub fn new(registry: &'a Registry, source: &'a dyn MemberSource, config: Config) -> Self {
        Self {
            registry,
            source,
            config,
            globals: Vec::new(),
            type_snippets: Vec::new(),
            script_snippets: Vec::new(),
        }
    }

    /// Values declared as ambient constants in the `// Globals` section.
    pub fn globals(mut self, globals: impl IntoIterator<Item = GlobalBinding>) -> Self {
        self.globals.extend(globals);
        self
    }

    /// Raw text spliced around the declaration blocks.
    pub fn type_snippets(mut self, snippets: impl IntoIterator<Item = SnippetPair>) -> Self {
        self.type_snippets.extend(snippets);
        self
    }

    /// Raw text spliced around the binding statements.
    pub fn script_snippets(mut self, snippets: impl IntoIterator<Item = SnippetPair>) -> Self {
        self.script_snippets.extend(snippets);
        self
    }

    /// Emit both artifacts.
    ///
    /// Any unresolvable type aborts the whole run.
    pub fn emit(self) -> Result<Output> {
        let resolver = Resolver::new(self.registry, self.source);
        let strategy = self.config.strategy();

        let mut blocks = Vec::new();
        let mut bindings = Vec::new();
        for descriptor in self.registry.renderable() {
            let class = self.class_of(descriptor)?;
            tracing::debug!(
                name = %descriptor.name(),
                export = descriptor.is_export(),
                "rendering type"
            );

            blocks.push(declaration::render(resolver, strategy, descriptor, class)?);
            if descriptor.is_export() {
                bindings.push(binding::render(strategy, descriptor, class));
            }
        }

        // render order never shows in the output
        blocks.sort();
        bindings.sort();

        let declarations = self.declarations(&blocks);
        let bindings_out = self.bindings(&bindings);

        tracing::info!(
            types = blocks.len(),
            exports = bindings.len(),
            globals = self.globals.len(),
            compatibility = %strategy.mode(),
            "generated declarations"
        );

        Ok(Output {
            declarations,
            bindings: bindings_out,
        })
    }

    fn class_of(&self, descriptor: &TypeDescriptor) -> Result<&'a ClassInfo> {
        let name = descriptor.name();
        self.source
            .class(name)
            .or_else(|| self.source.lookup(&name.binary_name()))
            .ok_or_else(|| Error::UnknownType(name.binary_name()))
    }

    fn declarations(&self, blocks: &[String]) -> String {
        let mut out = String::new();
        out.push_str(self.config.strategy().declarations_header());

        for snippet in &self.type_snippets {
            out.push_str(&snippet.pre);
        }
        for block in blocks {
            out.push_str(block);
        }

        out.push_str("\n\n// Globals\n");
        for global in &self.globals {
            out.push_str(&format!(
                "declare const {}: {};\n",
                global.name,
                global.ty.binary_name()
            ));
        }

        for snippet in &self.type_snippets {
            out.push_str(&snippet.post);
        }
        out
    }

    fn bindings(&self, bindings: &[String]) -> String {
        let mut out = format!(
            "/// <reference path=\"{}\"/>\n\n",
            self.config.reference_path
        );
        for snippet in &self.script_snippets {
            out.push_str(&snippet.pre);
        }
        for binding in bindings {
            out.push_str(binding);
        }
        for snippet in &self.script_snippets {
            out.push_str(&snippet.post);
        }
        out
    }
}
