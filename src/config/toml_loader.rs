//! TOML configuration file parsing.
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Load and deserialize a TOML file.
///
/// A missing file yields `T::default()`, so an absent config file behaves
/// like an empty one.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if it is not valid for `T`.
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Return `$XDG_CONFIG_HOME/zl-cleanup/config.toml`, falling back to
/// `~/.config/zl-cleanup/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| {
            std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .ok()
                .map(|home| PathBuf::from(home).join(".config"))
        },
        |dir| Some(PathBuf::from(dir)),
    )?;
    Some(config_dir.join("zl-cleanup").join("config.toml"))
}
