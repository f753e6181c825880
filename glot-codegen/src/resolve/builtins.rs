//! Host built-in types with a fixed meaning in every declaration dialect.

use glot_ir::Primitive;

/// What a built-in host type maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Primitive(Primitive),
    /// `Object`: carries no structure.
    Unknown,
    /// Ordered collection of the first argument.
    Array,
    Set,
    Map,
    /// Possibly-absent value of the first argument.
    Optional,
}

const PACKAGES: &[&str] = &["java.lang.", "java.util.", "java.math."];

/// Look up a host name, qualified (`java.lang.String`) or short (`String`).
pub fn lookup(name: &str) -> Option<Builtin> {
    let short = PACKAGES
        .iter()
        .find_map(|pkg| name.strip_prefix(pkg))
        .unwrap_or(name);
    // `java.util.UUID` and friends are builtins, `org.x.String` is not
    if short.contains('.') || (short.len() == name.len() && name.contains('.')) {
        return None;
    }

    let builtin = match short {
        "boolean" | "Boolean" => Builtin::Primitive(Primitive::Boolean),
        "byte" | "short" | "int" | "long" | "float" | "double" | "Byte" | "Short"
        | "Integer" | "Long" | "Float" | "Double" | "Number" | "BigInteger" | "BigDecimal" => {
            Builtin::Primitive(Primitive::Number)
        }
        "char" | "Character" | "String" | "CharSequence" | "UUID" => {
            Builtin::Primitive(Primitive::String)
        }
        "void" | "Void" => Builtin::Primitive(Primitive::Void),
        "Object" => Builtin::Unknown,
        "List" | "Collection" | "Iterable" => Builtin::Array,
        "Set" => Builtin::Set,
        "Map" => Builtin::Map,
        "Optional" => Builtin::Optional,
        _ => return None,
    };
    Some(builtin)
}
