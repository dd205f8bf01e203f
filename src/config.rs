//! Configuration loading
//!
//! Reads `~/.config/modal-keys/config.toml`. A missing file means defaults.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, IndicatorConfig, IndicatorStyle, KeysConfig};

use crate::error::ModalKeysError;

const CONFIG_DIR: &str = "modal-keys";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults on any problem
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load a config file, treating a missing file as an empty one
pub fn load_config_from_path(path: &Path) -> Result<Config, ModalKeysError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, ModalKeysError> {
    Ok(toml::from_str::<Config>(content)?)
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
