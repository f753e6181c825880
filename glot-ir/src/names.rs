//! Qualified-name helpers.
//!
//! Host qualified names look like `org.openrewrite.java.tree.J$Binary`:
//! dot-separated namespace segments, then the type name, with `$`
//! separating nested types from their enclosing type.

use serde::{Deserialize, Serialize};

/// The type name without its namespace (`J$Binary`).
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// The segments a declaration dialect uses to address the type (`["J", "Binary"]`).
pub fn emitted_path(qualified: &str) -> Vec<&str> {
    simple_name(qualified).split('$').collect()
}

/// The qualified name of the enclosing type, if the type is nested.
pub fn enclosing_name(qualified: &str) -> Option<&str> {
    qualified.rfind('$').map(|idx| &qualified[..idx])
}

/// The configured set of namespace prefixes eligible for declaration emission.
///
/// Prefixes match whole segments: `org.openrewrite` contains
/// `org.openrewrite.Tree` but not `org.openrewriter.Tree`. An empty list
/// contains every name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(Vec<String>);

impl AllowList {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(prefixes.into_iter().map(Into::into).collect())
    }

    pub fn prefixes(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the qualified name falls under one of the prefixes.
    pub fn contains(&self, qualified: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        self.0.iter().any(|prefix| {
            qualified == prefix
                || qualified
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('$'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("org.openrewrite.Tree"), "Tree");
        assert_eq!(simple_name("org.openrewrite.java.tree.J$Binary"), "J$Binary");
        assert_eq!(simple_name("Tree"), "Tree");
    }

    #[test]
    fn test_emitted_path() {
        assert_eq!(emitted_path("org.x.J$Binary"), vec!["J", "Binary"]);
        assert_eq!(emitted_path("org.x.J$Binary$Type"), vec!["J", "Binary", "Type"]);
        assert_eq!(emitted_path("org.x.Node"), vec!["Node"]);
    }

    #[test]
    fn test_enclosing_name() {
        assert_eq!(enclosing_name("org.x.J$Binary"), Some("org.x.J"));
        assert_eq!(enclosing_name("org.x.J$Binary$Type"), Some("org.x.J$Binary"));
        assert_eq!(enclosing_name("org.x.J"), None);
    }

    #[test]
    fn test_allow_list_matches_whole_segments() {
        let allow = AllowList::new(["org.openrewrite"]);

        assert!(allow.contains("org.openrewrite.Tree"));
        assert!(allow.contains("org.openrewrite.java.tree.J$Binary"));
        assert!(!allow.contains("org.openrewriter.Tree"));
        assert!(!allow.contains("java.util.UUID"));
    }

    #[test]
    fn test_empty_allow_list_contains_everything() {
        assert!(AllowList::default().contains("java.util.UUID"));
    }
}
