// Configuration: ~/.bord/rc
//
// Line oriented `key=value` file. Unknown keys are ignored so an rc written
// for a newer version still loads.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory under $HOME holding the rc file and the default data file
pub const ROOT_DIR_NAME: &str = ".bord";
pub const RC_FILE_NAME: &str = "rc";
pub const DATA_FILE_NAME: &str = "data.json";

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" | "yes" => Some(ColorMode::Always),
            "never" | "off" | "no" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Whether colors should be written, given the stdout tty state
    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_location: PathBuf,
    pub color: ColorMode,
}

impl Config {
    /// Defaults for a given root directory (normally ~/.bord)
    pub fn default_for(root: &Path) -> Self {
        Self {
            data_location: root.join(DATA_FILE_NAME),
            color: ColorMode::Auto,
        }
    }

    /// Get the root directory (~/.bord)
    pub fn root_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to locate home directory")?;
        Ok(home.join(ROOT_DIR_NAME))
    }

    /// Load configuration from ~/.bord/rc, falling back to defaults
    pub fn load() -> Result<Self> {
        let root = Self::root_dir()?;
        let rc_path = root.join(RC_FILE_NAME);

        let mut config = if rc_path.exists() {
            let text = std::fs::read_to_string(&rc_path)
                .with_context(|| format!("Failed to read config file: {}", rc_path.display()))?;
            Self::from_rc_str(&text, &root)
        } else {
            Self::default_for(&root)
        };

        if config.color == ColorMode::Auto
            && std::env::var("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false)
        {
            config.color = ColorMode::Never;
        }

        log::debug!("config: {:?}", config);
        Ok(config)
    }

    /// Parse rc text. Relative paths resolve against `base_dir`.
    pub fn from_rc_str(text: &str, base_dir: &Path) -> Self {
        let mut config = Self::default_for(base_dir);

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "data.location" if !value.is_empty() => {
                    let path = PathBuf::from(value);
                    config.data_location = if path.is_relative() {
                        base_dir.join(path)
                    } else {
                        path
                    };
                }
                "color" => match ColorMode::parse(value) {
                    Some(mode) => config.color = mode,
                    None => log::warn!("ignoring invalid color setting '{}'", value),
                },
                _ => {}
            }
        }

        config
    }
}
