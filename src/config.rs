//! Configuration for quizgen

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::Labels;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG: &str = "quizgen.toml";

/// quizgen configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where template/head/header/footer/stylesheet overrides live
    pub assets_dir: Option<PathBuf>,

    /// Stylesheet file name linked from the page and written next to it
    pub stylesheet: String,

    /// Shuffle questions and options by default
    pub randomize: bool,

    /// Seed for shuffling
    pub seed: Option<u64>,

    /// UI strings
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assets_dir: None,
            stylesheet: "quiz.css".to_string(),
            randomize: false,
            seed: None,
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise `quizgen.toml` in `work_dir`
    /// wins over the user config file, and defaults are used when neither exists.
    pub fn resolve(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let local = work_dir.join(LOCAL_CONFIG);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user) = Self::default_path().filter(|p| p.exists()) {
            return Self::load_from(&user);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// User config file path.
    /// Prefers ~/.config/quizgen/config.toml (XDG style) when it exists,
    /// then the OS-specific config dir
    pub fn default_path() -> Option<PathBuf> {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("quizgen").join("config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        dirs::config_dir().map(|d| d.join("quizgen").join("config.toml"))
    }

    /// Directory searched for asset overrides
    pub fn assets_dir(&self, work_dir: &Path) -> PathBuf {
        match &self.assets_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => work_dir.join(dir),
            None => work_dir.to_path_buf(),
        }
    }
}
