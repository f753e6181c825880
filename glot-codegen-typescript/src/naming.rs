//! TypeScript-specific naming conventions.

use glot_codegen::language::NamingConvention;
use glot_core::{to_camel_case, to_kebab_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("{name}_")
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    to_type: to_pascal_case,
    // Files use kebab-case
    to_file: to_kebab_case,
    // Values use camelCase
    to_value: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict-mode reserved words
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "arguments",
        "eval",
    ],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("find-and-replace"), "FindAndReplace");
        assert_eq!(TS_NAMING.type_name("ChangeType"), "ChangeType");
    }

    #[test]
    fn test_ts_naming_file() {
        assert_eq!(TS_NAMING.file_name("FindAndReplace"), "find-and-replace");
    }

    #[test]
    fn test_ts_naming_value() {
        assert_eq!(TS_NAMING.value_name("FindAndReplace"), "findAndReplace");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("interface"));
        assert!(!TS_NAMING.is_reserved("pattern"));
    }

    #[test]
    fn test_ts_escape_reserved() {
        assert_eq!(TS_NAMING.safe_name("new"), "new_");
        assert_eq!(TS_NAMING.safe_name("delete"), "delete_");
        assert_eq!(TS_NAMING.safe_name("pattern"), "pattern");
    }
}
