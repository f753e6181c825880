//! TypeScript import builder.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// One imported name, optionally marked inline as `type`.
#[derive(Debug, Clone, PartialEq)]
struct Specifier {
    name: String,
    type_only: bool,
}

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<Specifier>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(Specifier {
            name: name.into(),
            type_only: false,
        });
        self
    }

    /// Import a named export as a type (`{ type Foo }`).
    pub fn named_type(mut self, name: impl Into<String>) -> Self {
        self.named.push(Specifier {
            name: name.into(),
            type_only: true,
        });
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let named = self
            .named
            .iter()
            .map(|s| {
                if s.type_only && !self.type_only {
                    format!("type {}", s.name)
                } else {
                    s.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        match (&self.default, named.is_empty()) {
            (Some(def), true) => format!("import {type_kw}{def} from \"{}\";", self.from),
            (Some(def), false) => {
                format!("import {type_kw}{def}, {{ {named} }} from \"{}\";", self.from)
            }
            (None, false) => format!("import {type_kw}{{ {named} }} from \"{}\";", self.from),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./runtime")
            .named("validateOptions")
            .named("OptionError")
            .build();
        assert_eq!(i, "import { validateOptions, OptionError } from \"./runtime\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("../types").named("Node").type_only().build();
        assert_eq!(i, "import type { Node } from \"../types\";\n");
    }

    #[test]
    fn test_inline_type_specifier() {
        let i = Import::new("./runtime")
            .named("validateOptions")
            .named_type("RecipeDescriptor")
            .build();
        assert_eq!(
            i,
            "import { validateOptions, type RecipeDescriptor } from \"./runtime\";\n"
        );
    }

    #[test]
    fn test_default_import() {
        let i = Import::new("./module").default("Foo").build();
        assert_eq!(i, "import Foo from \"./module\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
