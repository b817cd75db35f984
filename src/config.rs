//! User configuration: built-in defaults + optional TOML file.
//!
//! - `--config FILE` wins; otherwise `~/.quadsolve/config.toml` if present.
//! - An explicit path that cannot be loaded is an error; a missing default
//!   file silently means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub batch: BatchConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Test file read when `batch` is given no input.
    pub input: PathBuf,
    /// Report destination.
    pub output: PathBuf,
    /// Set to `false` to only print results.
    pub write_report: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
            write_report: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Loads the explicit path if given, else the user default if it exists.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }
}

/// ~/.quadsolve/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".quadsolve").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = Config::from_toml_str("[display]\ncolor = false\n").unwrap();
        assert!(!cfg.display.color);
        assert_eq!(cfg.batch, BatchConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_toml_str("[batch]\ntolerance = 0.1\n").is_err());
    }
}
