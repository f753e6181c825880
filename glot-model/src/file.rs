use std::path::{Path, PathBuf};

use crate::{Config, Error, Model, Result, config::parse_config};

/// A loaded project: `glot.toml` plus every snapshot it names.
#[derive(Debug, Clone)]
pub struct Project {
    path: PathBuf,
    config: Config,
    model: Model,
}

impl Project {
    /// Open `glot.toml` and load the snapshot files it lists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let config = parse_config(&content, &path.display().to_string())?;

        let root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let sources = config
            .generate
            .models
            .iter()
            .map(|model| {
                let model_path = root.join(model);
                read(&model_path).map(|content| (model_path.display().to_string(), content))
            })
            .collect::<Result<Vec<_>>>()?;
        let model = Model::parse_sources(
            sources
                .iter()
                .map(|(name, content)| (name.as_str(), content.as_str())),
        )?;

        Ok(Self {
            path,
            config,
            model,
        })
    }

    /// Path of `glot.toml`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing `glot.toml`.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Output directory resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.config.generate.output)
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}
