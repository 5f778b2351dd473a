//! Configuration file loading and path resolution

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "CUESENSE_CONFIG";

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cuesense.toml";

/// Config file resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `CUESENSE_CONFIG` environment variable
/// 3. `cuesense.toml` in the working directory, if present
///
/// Returns `None` when no source names a file; callers fall back to
/// compiled defaults.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        debug!(path = %path.display(), "config path from command line");
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        debug!(path = %path, "config path from {}", CONFIG_PATH_ENV);
        return Some(PathBuf::from(path));
    }

    // Priority 3: Working-directory default
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default.exists() {
        debug!(path = %default.display(), "config path from working directory");
        return Some(default);
    }

    None
}

/// Read and deserialize a TOML config file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid TOML in {}: {}", path.display(), e)))
}
