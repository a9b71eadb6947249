use anyhow::{anyhow, Result};
use std::{fs, path::PathBuf};

const APP_DIR_NAME: &str = "command-buttons";

// NOTE: stole this from `gitui`
/// # Errors
///
/// Returns an error if the OS config directory cannot be found or created.
pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join(".config"))
    } else {
        dirs::config_dir()
    }
    .ok_or_else(|| anyhow!("failed to find os config dir."))?;

    path.push(APP_DIR_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// # Errors
///
/// Returns an error if the OS local data directory cannot be found or created.
pub fn get_app_data_path() -> Result<PathBuf> {
    let mut path = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join(".local").join("share"))
    } else {
        dirs::data_local_dir()
    }
    .ok_or_else(|| anyhow!("failed to find os local data dir."))?;

    path.push(APP_DIR_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}
