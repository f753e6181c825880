//! Rendered artifacts of a generation pass.

use serde::Serialize;

/// One rendered type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Qualified name of the host type.
    pub qualified: String,
    /// Name the declaration is addressed by in the target dialect.
    pub name: String,
    /// Mutual-recursion group the declaration belongs to.
    pub group: usize,
    /// Emitted names this declaration references.
    pub references: Vec<String>,
    pub text: String,
}

/// The declaration file produced by one pass, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeclarationUnit {
    declarations: Vec<Declaration>,
}

impl DeclarationUnit {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.name.as_str())
    }

    /// Position of the declaration with the given emitted name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.declarations.iter().position(|d| d.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Generated glue source for one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterUnit {
    /// Qualified name of the recipe.
    pub recipe: String,
    /// File name relative to the adapter directory.
    pub file_name: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_by_emitted_name() {
        let decl = |name: &str| Declaration {
            qualified: format!("org.x.{name}"),
            name: name.to_string(),
            group: 0,
            references: vec![],
            text: String::new(),
        };
        let unit = DeclarationUnit::new(vec![decl("Node"), decl("Container")]);

        assert_eq!(unit.position("Container"), Some(1));
        assert_eq!(unit.names().collect::<Vec<_>>(), vec!["Node", "Container"]);
    }
}
