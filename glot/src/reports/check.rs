//! Check command report data structures.

use std::path::PathBuf;

use glot_codegen::pipeline::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from a pass that wrote nothing.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Error | Severity::Warning => out.diagnostic(&diag.to_string()),
                Severity::Info => out.preformatted(&diag.to_string()),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            let count = self.errors().count();
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                count,
                if count == 1 { "" } else { "s" }
            ));
        }
    }
}
