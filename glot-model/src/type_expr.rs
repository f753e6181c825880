//! Host type expressions as they appear in model snapshots.
//!
//! The grammar follows host signature syntax:
//!
//! ```text
//! type     := wildcard | base ( "[]" | "..." )*
//! wildcard := "?" ( ("extends" | "super") type )?
//! base     := name ( "<" type ( "," type )* ">" )?
//! name     := ident ( "." ident )*        // ident may contain `$`
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

/// A parsed, unresolved type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Named { name: String, args: Vec<TypeExpr> },
    Array(Box<TypeExpr>),
    Wildcard(WildcardExpr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardExpr {
    Any,
    Extends(Box<TypeExpr>),
    Super(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Parse a type expression.
    pub fn parse(input: &str) -> Result<Self, TypeExprError> {
        let mut parser = Parser { input, pos: 0 };
        let expr = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos < input.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(expr)
    }
}

impl FromStr for TypeExpr {
    type Err = TypeExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeExpr::parse(s)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeExpr::Array(element) => write!(f, "{element}[]"),
            TypeExpr::Wildcard(WildcardExpr::Any) => f.write_str("?"),
            TypeExpr::Wildcard(WildcardExpr::Extends(bound)) => write!(f, "? extends {bound}"),
            TypeExpr::Wildcard(WildcardExpr::Super(bound)) => write!(f, "? super {bound}"),
        }
    }
}

impl<'de> Deserialize<'de> for TypeExpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TypeExpr::parse(&raw).map_err(|e| de::Error::custom(format!("in `{raw}`: {e}")))
    }
}

/// Error produced when a type expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExprError {
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for TypeExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for TypeExprError {}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: impl Into<String>) -> TypeExprError {
        TypeExprError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Eat a keyword only when it is not the prefix of a longer identifier.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if after.chars().next().is_some_and(is_ident_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        if self.eat("?") {
            let wildcard = if self.eat_keyword("extends") {
                WildcardExpr::Extends(Box::new(self.parse_type()?))
            } else if self.eat_keyword("super") {
                WildcardExpr::Super(Box::new(self.parse_type()?))
            } else {
                WildcardExpr::Any
            };
            return Ok(TypeExpr::Wildcard(wildcard));
        }

        let mut expr = self.parse_base()?;
        loop {
            if self.eat("[") {
                if !self.eat("]") {
                    return Err(self.error("expected `]`"));
                }
            } else if !self.eat("...") {
                break;
            }
            expr = TypeExpr::Array(Box::new(expr));
        }
        Ok(expr)
    }

    fn parse_base(&mut self) -> Result<TypeExpr, TypeExprError> {
        let name = self.parse_name()?;
        let mut args = Vec::new();
        if self.eat("<") {
            loop {
                args.push(self.parse_type()?);
                if self.eat(",") {
                    continue;
                }
                if self.eat(">") {
                    break;
                }
                return Err(self.error("expected `,` or `>`"));
            }
        }
        Ok(TypeExpr::Named { name, args })
    }

    fn parse_name(&mut self) -> Result<String, TypeExprError> {
        let mut segments = vec![self.parse_ident()?];
        while self.rest().starts_with('.') && !self.rest().starts_with("...") {
            self.pos += 1;
            segments.push(self.parse_ident()?);
        }
        Ok(segments.join("."))
    }

    fn parse_ident(&mut self) -> Result<&'a str, TypeExprError> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !is_ident_char(*c))
            .map_or(rest.len(), |(i, _)| i);
        let starts_ok = rest.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_');
        if len == 0 || !starts_ok {
            return Err(self.error("expected a type name"));
        }
        let input = self.input;
        let start = self.pos;
        self.pos += len;
        Ok(&input[start..self.pos])
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TypeExpr {
        TypeExpr::parse(s).unwrap()
    }

    #[test]
    fn test_parse_simple_and_qualified_names() {
        assert_eq!(parse("int"), TypeExpr::named("int"));
        assert_eq!(
            parse("org.openrewrite.java.tree.J$Binary"),
            TypeExpr::named("org.openrewrite.java.tree.J$Binary")
        );
    }

    #[test]
    fn test_parse_generic_arguments() {
        let expr = parse("java.util.Map<String, java.util.List<org.x.Node>>");
        assert_eq!(
            expr,
            TypeExpr::Named {
                name: "java.util.Map".into(),
                args: vec![
                    TypeExpr::named("String"),
                    TypeExpr::Named {
                        name: "java.util.List".into(),
                        args: vec![TypeExpr::named("org.x.Node")],
                    },
                ],
            }
        );
    }

    #[test]
    fn test_parse_arrays_and_varargs() {
        assert_eq!(
            parse("String[][]"),
            TypeExpr::Array(Box::new(TypeExpr::Array(Box::new(TypeExpr::named(
                "String"
            )))))
        );
        assert_eq!(
            parse("org.x.Node..."),
            TypeExpr::Array(Box::new(TypeExpr::named("org.x.Node")))
        );
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(parse("List<?>").to_string(), "List<?>");
        assert_eq!(
            parse("List< ? extends org.x.Tree >").to_string(),
            "List<? extends org.x.Tree>"
        );
        assert_eq!(
            parse("Comparator<? super T>").to_string(),
            "Comparator<? super T>"
        );
    }

    #[test]
    fn test_keyword_prefix_is_not_a_keyword() {
        // `? extendsFoo` is a bare wildcard followed by junk, not a bound
        assert!(TypeExpr::parse("? extendsFoo").is_err());
    }

    #[test]
    fn test_parse_errors_report_offset() {
        let err = TypeExpr::parse("List<String").unwrap_err();
        assert_eq!(err.message, "expected `,` or `>`");
        assert_eq!(err.offset, 11);

        let err = TypeExpr::parse("Map<, String>").unwrap_err();
        assert_eq!(err.message, "expected a type name");

        assert!(TypeExpr::parse("").is_err());
        assert!(TypeExpr::parse("a b").is_err());
    }
}
