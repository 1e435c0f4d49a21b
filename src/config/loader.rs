// Configuration loader
// Loads ~/.solace/config.toml (or an explicit file), falling back to defaults

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Load configuration from an explicit file, the user config, or defaults
///
/// Relative data paths are resolved against the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            load_from_file(path)?
        }
        None => match user_config_path() {
            Some(path) if path.exists() => load_from_file(&path)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    config.data.resolve_against(&cwd);

    Ok(config)
}

/// Parse a TOML config file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!(config_parse_error(path, &e.to_string())))?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// `~/.solace/config.toml`, if a home directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".solace").join("config.toml"))
}
