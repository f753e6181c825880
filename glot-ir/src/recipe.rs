//! Recipe option schemas.

use serde::Serialize;

/// Scripting-visible type of a recipe option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "lowercase")]
pub enum OptionType {
    String,
    Number,
    Boolean,
    /// One of a fixed set of constants.
    Enum(Vec<String>),
    List(Box<OptionType>),
    /// A host type from the declaration closure, by qualified name.
    Host(String),
}

impl OptionType {
    /// Qualified names of host types this option refers to.
    pub fn host_types(&self) -> Vec<&str> {
        match self {
            OptionType::Host(name) => vec![name],
            OptionType::List(inner) => inner.host_types(),
            _ => Vec::new(),
        }
    }
}

/// One declared option of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub name: String,
    pub ty: OptionType,
    pub display_name: String,
    pub description: String,
    pub example: Option<String>,
    pub required: bool,
}

/// The AST node type a recipe's visitor dispatches over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorSpec {
    pub target: String,
    /// Subtypes of the target in the declaration closure, in discovery order.
    pub subtypes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSchema {
    /// Qualified name of the recipe type.
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub options: Vec<OptionSpec>,
    pub visitor: Option<VisitorSpec>,
}

impl RecipeSchema {
    pub fn required_options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter().filter(|o| o.required)
    }

    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }
}
