use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::utils::files::get_app_config_path;

pub mod key_map;

use key_map::KeyMap;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawConfig {
    #[serde(default)]
    pub keys: HashMap<String, String>,
}

impl TryFrom<&str> for RawConfig {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        let config = toml::from_str(value)?;
        Ok(config)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub key_map: KeyMap,
}

impl TryFrom<RawConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let key_map = KeyMap::try_from(raw.keys).context("Parsing key map")?;
        Ok(Self { key_map })
    }
}

impl Config {
    /// Loads the config from `path`, or from the default location in the OS
    /// config directory if no path is given. A missing file at the default
    /// location is replaced with the (fully commented-out) default config.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly-given file does not exist, if the
    /// file cannot be read, or if its contents are not a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        tracing::debug!("Reading config from {}", path.display());
        let file = fs::read_to_string(&path)
            .with_context(|| format!("Reading config file {}", path.display()))?;

        Self::read_from_string(&file)
    }

    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML, or if it names an
    /// unknown action or key.
    pub fn read_from_string(file: &str) -> Result<Self> {
        let raw = RawConfig::try_from(file).context("Parsing config file")?;
        Self::try_from(raw)
    }
}

fn default_config_path() -> Result<PathBuf> {
    let path = get_app_config_path()?.join(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::info!("Writing default config to {}", path.display());
        fs::write(&path, include_str!("../assets/default-config.toml"))?;
    }

    Ok(path)
}
