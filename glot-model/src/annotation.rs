//! Annotations attached to types, members and parameters.

use glot_core::toml_value_to_string;
use indexmap::IndexMap;
use serde::Deserialize;

/// An annotation: written either as a bare name (`"Nullable"`) or as a
/// table with arguments (`{ name = "Option", args = { example = "foo" } }`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAnnotation")]
pub struct Annotation {
    pub name: String,
    pub args: IndexMap<String, toml::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnnotation {
    Bare(String),
    Full {
        name: String,
        #[serde(default)]
        args: IndexMap<String, toml::Value>,
    },
}

impl From<RawAnnotation> for Annotation {
    fn from(raw: RawAnnotation) -> Self {
        match raw {
            RawAnnotation::Bare(name) => Self {
                name,
                args: IndexMap::new(),
            },
            RawAnnotation::Full { name, args } => Self { name, args },
        }
    }
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: IndexMap::new(),
        }
    }

    /// Matches on the simple name, so `org.openrewrite.Option` is `Option`.
    pub fn is(&self, name: &str) -> bool {
        self.name.rsplit('.').next() == Some(name)
    }

    /// String value of an argument, if present.
    pub fn arg_str(&self, key: &str) -> Option<String> {
        self.args.get(key).map(toml_value_to_string)
    }

    /// Boolean value of an argument, if present and boolean.
    pub fn arg_bool(&self, key: &str) -> Option<bool> {
        self.args.get(key).and_then(toml::Value::as_bool)
    }
}

/// Lookup helpers over a list of annotations.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.is(name))
    }

    fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }
}

/// Annotation names the system understands.
pub mod names {
    pub const RECIPE: &str = "Recipe";
    pub const OPTION: &str = "Option";
    pub const NULLABLE: &str = "Nullable";
    pub const VISITOR: &str = "Visitor";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        annotations: Vec<Annotation>,
    }

    impl Annotated for Holder {
        fn annotations(&self) -> &[Annotation] {
            &self.annotations
        }
    }

    #[test]
    fn test_bare_and_full_forms() {
        let holder: Holder = toml::from_str(
            r#"
            annotations = [
                "Nullable",
                { name = "org.openrewrite.Option", args = { example = "foo.*", required = false } },
            ]
            "#,
        )
        .unwrap();

        assert!(holder.has_annotation("Nullable"));
        let option = holder.annotation("Option").unwrap();
        assert_eq!(option.arg_str("example").as_deref(), Some("foo.*"));
        assert_eq!(option.arg_bool("required"), Some(false));
        assert_eq!(option.arg_str("description"), None);
    }

    #[test]
    fn test_simple_name_match_is_exact() {
        let annotation = Annotation::new("org.x.OptionGroup");
        assert!(!annotation.is("Option"));
        assert!(annotation.is("OptionGroup"));
    }
}
