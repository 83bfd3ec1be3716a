use crate::config::Config;
use crate::models::State;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// JSON data file holding the whole `State`
///
/// Loaded once at startup and written back in full at exit. There is no
/// locking: concurrent invocations are last-write-wins.
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Open the configured data file, creating it if needed
    pub fn connect(config: &Config) -> Result<Self> {
        Self::open(&config.data_location)
    }

    /// Open a data file at `path`, creating parent directories and an empty
    /// document if it does not exist yet
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let file = Self { path: path.to_path_buf() };
        if !path.exists() {
            log::debug!("initialising empty data file {}", path.display());
            file.save(&State::new())?;
        }
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document
    pub fn load(&self) -> Result<State> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;
        let state: State = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse data file: {}", self.path.display()))?;
        log::debug!("loaded {} task(s) from {}", state.tasks.len(), self.path.display());
        Ok(state)
    }

    /// Overwrite the whole document
    pub fn save(&self, state: &State) -> Result<()> {
        let json = serde_json::to_string(state).context("Failed to serialize state")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;
        log::debug!("saved {} task(s) to {}", state.tasks.len(), self.path.display());
        Ok(())
    }
}
