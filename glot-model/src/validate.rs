//! Name validation shared by the configuration and snapshot parsers.

/// Validate a host qualified name (`org.example.Outer$Inner`).
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_qualified_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    for segment in name.split(['.', '$']) {
        if segment.is_empty() {
            return Some("name contains an empty segment");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
    }
    None
}

/// Validate a single identifier segment.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("names must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("names may contain only letters, numbers and underscores");
    }
    None
}
