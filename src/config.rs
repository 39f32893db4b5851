use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::mode::PracticeMode;
use crate::session::target::{self, DEFAULT_PARAGRAPH, DEFAULT_SINGLE_KEYS};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_mode: PracticeMode,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_single_keys")]
    pub single_keys: String,
    #[serde(default = "default_paragraph")]
    pub paragraph: String,
    #[serde(default = "default_combination_length")]
    pub combination_length: usize,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Command-line settings that take precedence over the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigOverrides {
    #[arg(short, long, value_enum, help = "Practice mode to start in")]
    pub mode: Option<PracticeMode>,

    #[arg(short, long, help = "Theme name")]
    pub theme: Option<String>,

    #[arg(short, long, help = "Keys for single-key practice, e.g. \"asdfjkl;\"")]
    pub keys: Option<String>,

    #[arg(long, help = "Read the practice paragraph from a file")]
    pub paragraph_file: Option<PathBuf>,

    #[arg(long, help = "Length of the generated combination")]
    pub combination_length: Option<usize>,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_single_keys() -> String {
    DEFAULT_SINGLE_KEYS.to_string()
}
fn default_paragraph() -> String {
    DEFAULT_PARAGRAPH.to_string()
}
fn default_combination_length() -> usize {
    5
}
fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: PracticeMode::default(),
            theme: default_theme(),
            single_keys: default_single_keys(),
            paragraph: default_paragraph(),
            combination_length: default_combination_length(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load from the user config dir, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homerow")
            .join("config.toml")
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(mode) = overrides.mode {
            self.default_mode = mode;
        }
        if let Some(theme) = &overrides.theme {
            self.theme = theme.clone();
        }
        if let Some(keys) = &overrides.keys {
            self.single_keys = keys.clone();
        }
        if let Some(len) = overrides.combination_length {
            self.combination_length = len;
        }
        if let Some(path) = &overrides.paragraph_file {
            self.paragraph = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Every practice target must have at least one character to type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if target::parse_single_keys(&self.single_keys).is_empty() {
            return Err(ConfigError::EmptySingleKeys);
        }
        if target::normalize_paragraph(&self.paragraph).is_empty() {
            return Err(ConfigError::EmptyParagraph);
        }
        if self.combination_length == 0 {
            return Err(ConfigError::ZeroCombinationLength);
        }
        Ok(())
    }
}
