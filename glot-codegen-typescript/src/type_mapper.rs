//! TypeScript type mapper implementation.

use glot_codegen::language::TypeMapper;
use glot_ir::{OptionType, Primitive, emitted_path};

use crate::ast::quote;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// The name a host type is declared under.
    pub fn emitted_name(qualified: &str) -> String {
        emitted_path(qualified).join(".")
    }

    /// `T[]`, parenthesizing union element types.
    pub fn array_of(element: &str) -> String {
        if element.contains(" | ") {
            format!("({element})[]")
        } else {
            format!("{element}[]")
        }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "boolean",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Void => "void",
        }
    }

    fn map_unknown(&self) -> &'static str {
        "unknown"
    }

    fn map_option_type(&self, ty: &OptionType) -> String {
        match ty {
            OptionType::String => "string".to_string(),
            OptionType::Number => "number".to_string(),
            OptionType::Boolean => "boolean".to_string(),
            OptionType::Enum(values) if values.is_empty() => "never".to_string(),
            OptionType::Enum(values) => values
                .iter()
                .map(|v| quote(v))
                .collect::<Vec<_>>()
                .join(" | "),
            OptionType::List(inner) => Self::array_of(&self.map_option_type(inner)),
            OptionType::Host(name) => Self::emitted_name(name),
        }
    }
}
