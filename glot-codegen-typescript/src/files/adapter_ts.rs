//! One recipe adapter module.

use std::path::{Path, PathBuf};

use glot_core::{FileRules, GeneratedFile};
use glot_ir::AdapterUnit;

use super::GENERATED_HEADER;

pub struct AdapterTs<'a> {
    dir: &'a str,
    unit: &'a AdapterUnit,
}

impl<'a> AdapterTs<'a> {
    pub fn new(dir: &'a str, unit: &'a AdapterUnit) -> Self {
        Self { dir, unit }
    }
}

impl GeneratedFile for AdapterTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.dir).join(&self.unit.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.unit.source.clone()
    }
}
