//! Writing run configs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::config_file_path;
use crate::domain::ConfigNamespace;
use crate::error::ConfigError;

/// Write `config` to `<model_path>/cfg_args`, creating the directory.
pub fn save_config(model_path: &Path, config: &ConfigNamespace) -> Result<PathBuf, ConfigError> {
    if let Some((name, _)) = config.iter().find(|(_, v)| v.is_some_and(|v| !v.is_finite())) {
        return Err(ConfigError::NonFiniteValue { name: name.to_string() });
    }

    fs::create_dir_all(model_path)
        .map_err(|source| ConfigError::Io { path: model_path.to_path_buf(), source })?;

    let path = config_file_path(model_path);
    let mut text = config.to_json_pretty()?;
    text.push('\n');
    fs::write(&path, text).map_err(|source| ConfigError::Io { path: path.clone(), source })?;

    tracing::info!("Saved config to {}", path.display());
    Ok(path)
}
