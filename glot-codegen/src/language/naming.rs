//! Naming conventions for target languages.

/// Target-specific naming rules.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a host simple name to a type name (e.g., "ChangeType" -> "ChangeType")
    pub to_type: fn(&str) -> String,
    /// Transform a host simple name to a file stem (e.g., "ChangeType" -> "change-type")
    pub to_file: fn(&str) -> String,
    /// Transform a host simple name to a value name (e.g., "ChangeType" -> "changeType")
    pub to_value: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "delete_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn file_name(&self, name: &str) -> String {
        (self.to_file)(name)
    }

    pub fn value_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_value)(name))
    }
}
