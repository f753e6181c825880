use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glot_model::Project;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to glot.toml (defaults to ./glot.toml)
    #[arg(short, long, default_value = "glot.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the `output` setting of glot.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Dump a JSON snapshot of the pass after each phase into <output>/.glot
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| project.output_dir());

        let report = ops::generate(
            &project,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
