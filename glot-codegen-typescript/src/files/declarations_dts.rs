//! The `.d.ts` declaration file.

use std::path::{Path, PathBuf};

use glot_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;

pub struct DeclarationsDts {
    /// Path relative to the output directory.
    file: String,
    body: String,
}

impl DeclarationsDts {
    pub fn new(file: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            body: body.into(),
        }
    }
}

impl GeneratedFile for DeclarationsDts {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        // An empty closure still has to be a module for `import type`
        if self.body.is_empty() {
            "export {};\n".to_string()
        } else {
            self.body.clone()
        }
    }
}
