//! Configuration loading
//!
//! Reads `~/.config/typeahead/config.toml`. A missing file means defaults; a
//! malformed one means defaults plus a warning for the caller to show.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, HistoryConfig, MatcherKind, SourceConfig, SuggestConfig};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and an optional warning about why defaults were used
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}: {}", path.display(), e)),
            }
        }
    }
}

/// Ok(None) when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, TypeaheadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    parse_config(&content).map(Some)
}

pub fn parse_config(content: &str) -> Result<Config, TypeaheadError> {
    toml::from_str(content).map_err(|e| TypeaheadError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
