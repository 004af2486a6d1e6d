//! Loading of `bright-futures.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "bright-futures.toml";

/// Load the configuration.
///
/// An explicit path must exist. Without one, `bright-futures.toml` in the
/// current directory is used if present, otherwise defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    match explicit {
        Some(path) => load_required(path),
        None => load_from_dir(Path::new(".")),
    }
}

/// Load `bright-futures.toml` from `dir`, falling back to defaults.
pub fn load_from_dir(dir: &Path) -> Result<AppConfig, AppError> {
    let path: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_required(&path)
}

fn load_required(path: &Path) -> Result<AppConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}
