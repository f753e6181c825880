use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glot_model::Project;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to glot.toml (defaults to ./glot.toml)
    #[arg(short, long, default_value = "glot.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();

        ops::list(&project)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
