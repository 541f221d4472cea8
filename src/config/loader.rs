//! Persisted config loading

use crate::config::legacy::parse_namespace_literal;
use crate::domain::ConfigNamespace;
use crate::error::ConfigError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File name of the persisted run configuration inside a model directory.
pub const CONFIG_FILE_NAME: &str = "cfg_args";

pub fn config_file_path(model_path: &Path) -> PathBuf {
    model_path.join(CONFIG_FILE_NAME)
}

/// Load `<model_path>/cfg_args`.
///
/// A missing model path, or a `cfg_args` that is absent, not a regular file
/// or cannot be opened, yields an empty namespace. Content that cannot be
/// read or parsed is an error.
pub fn load_persisted(model_path: Option<&Path>) -> Result<ConfigNamespace, ConfigError> {
    let Some(model_path) = model_path else {
        tracing::info!("No model path given; not loading a saved config");
        return Ok(ConfigNamespace::default());
    };

    let path = config_file_path(model_path);
    tracing::info!("Looking for config file in {}", path.display());

    if path.exists() && !path.is_file() {
        tracing::info!("Config path {} is not a regular file; ignoring it", path.display());
        return Ok(ConfigNamespace::default());
    }

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            tracing::info!("Config file not found at {}: {}", path.display(), e);
            return Ok(ConfigNamespace::default());
        }
    };

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ConfigError::MalformedConfigFile { path: path.clone(), reason: e.to_string() })?;
    tracing::info!("Config file found: {}", path.display());

    parse_persisted(&content, &path)
}

/// Parse config text: JSON, or the legacy `Namespace(...)` form.
pub fn parse_persisted(content: &str, path: &Path) -> Result<ConfigNamespace, ConfigError> {
    let malformed =
        |reason: String| ConfigError::MalformedConfigFile { path: path.to_path_buf(), reason };

    if content.trim_start().starts_with("Namespace(") {
        tracing::debug!("Reading {} as a legacy namespace literal", path.display());
        return parse_namespace_literal(content).map_err(malformed);
    }

    serde_json::from_str(content).map_err(|e| malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_model_path_is_empty() {
        let cfg = load_persisted(None).expect("config");
        assert!(cfg.is_empty());
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_persisted(Some(tmp.path())).expect("config");
        assert!(cfg.is_empty());
    }

    #[test]
    fn nonexistent_model_dir_is_empty() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_persisted(Some(tmp.path().join("never-trained").as_path())).expect("config");
        assert!(cfg.is_empty());
    }

    #[test]
    fn config_directory_is_ignored() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(config_file_path(tmp.path())).expect("mkdir");
        let cfg = load_persisted(Some(tmp.path())).expect("config");
        assert!(cfg.is_empty());
    }

    #[test]
    fn loads_json() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            config_file_path(tmp.path()),
            r#"{"sh_degree": 3, "source_path": "/data/garden", "densify_from_iter": [500], "debug": null}"#,
        )
        .expect("write");

        let cfg = load_persisted(Some(tmp.path())).expect("config");
        assert_eq!(cfg.get_int("sh_degree"), Some(3));
        assert_eq!(cfg.get_str("source_path"), Some("/data/garden"));
        assert_eq!(cfg.get_float_list("densify_from_iter"), Some(&[500.0][..]));
        assert!(cfg.is_null("debug"));
    }

    #[test]
    fn loads_legacy_namespace() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            config_file_path(tmp.path()),
            "Namespace(eval=True, images='images', resolution=-1, lambda_dssim=0.2)",
        )
        .expect("write");

        let cfg = load_persisted(Some(tmp.path())).expect("config");
        assert_eq!(cfg.get_bool("eval"), Some(true));
        assert_eq!(cfg.get_str("images"), Some("images"));
        assert_eq!(cfg.get_int("resolution"), Some(-1));
        assert_eq!(cfg.get_float("lambda_dssim"), Some(0.2));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(config_file_path(tmp.path()), "{\"sh_degree\": ").expect("write");
        let err = load_persisted(Some(tmp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfigFile { .. }));
    }

    #[test]
    fn non_object_json_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(config_file_path(tmp.path()), "[1, 2, 3]").expect("write");
        let err = load_persisted(Some(tmp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfigFile { .. }));
    }

    #[test]
    fn nested_values_are_an_error() {
        let err = parse_persisted(r#"{"opt": {"lr": 1}}"#, Path::new("cfg_args")).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfigFile { .. }));
    }
}
