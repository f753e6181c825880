//! Generate command report data structures.

use std::path::PathBuf;

use glot_codegen::pipeline::Diagnostic;
use glot_codegen_typescript::PreviewFile;

use super::output::{Output, Report};

/// Report data from one generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of emitted declarations.
    pub declarations: usize,
    /// Number of recipe adapters that were generated.
    pub adapters: usize,
    /// Isolated errors and warnings of the pass.
    pub diagnostics: Vec<Diagnostic>,
    pub result: GenerationResult,
}

impl GenerateReport {
    /// Whether any candidate was skipped.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    /// Number of files already up to date.
    pub unchanged: usize,
    /// Path to phase snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(preview) => {
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated",
                    preview.files.len()
                ));
            }
            GenerationResult::Written(written) => {
                out.key_value("Generated", &written.output_dir.display().to_string());
                out.key_value("Declarations", &self.declarations.to_string());
                out.key_value("Adapters", &self.adapters.to_string());
                for path in &written.created {
                    out.added_item(path);
                }
                for path in &written.updated {
                    out.changed_item(path);
                }
                if written.unchanged > 0 {
                    out.preformatted(&format!("  {} unchanged", written.unchanged));
                }
                if let Some(dir) = &written.debug_dir {
                    out.key_value("Snapshots", &dir.display().to_string());
                }
            }
        }

        if self.diagnostics.is_empty() {
            return;
        }
        out.newline();
        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count();
        if errors > 0 {
            out.diagnostic(&format!(
                "{} candidate{} skipped",
                errors,
                if errors == 1 { " was" } else { "s were" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_report_lists_triples() {
        let report = GenerateReport {
            declarations: 2,
            adapters: 1,
            diagnostics: vec![
                Diagnostic::error("extract", "visitor target 'org.x.Elsewhere' is not declared")
                    .rule("visitor-target")
                    .at("org.x.Lost"),
            ],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("generated"),
                created: vec!["adapters/rename.ts".to_string()],
                updated: vec!["types.d.ts".to_string()],
                unchanged: 1,
                debug_dir: None,
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.has_errors());
        assert_eq!(
            out.lines,
            vec![
                "Generated: generated",
                "Declarations: 2",
                "Adapters: 1",
                "  + adapters/rename.ts",
                "  ~ types.d.ts",
                "  1 unchanged",
                "",
                "error[visitor-target]: visitor target 'org.x.Elsewhere' is not declared (at org.x.Lost)",
                "1 candidate was skipped",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            declarations: 0,
            adapters: 0,
            diagnostics: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "types.d.ts".to_string(),
                    content: "export {};\n".to_string(),
                }],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── types.d.ts ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}
