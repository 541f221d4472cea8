//! Error types

use crate::domain::ParamKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter '{name}' is declared as {declared} but its default is {found}")]
    UnsupportedParameterType { name: String, declared: ParamKind, found: ParamKind },

    #[error("invalid parameter name '{name}'")]
    InvalidParameterName { name: String },

    #[error("flag {flag} for parameter '{name}' is already registered")]
    FlagCollision { name: String, flag: String },

    #[error("argument group '{label}' is already registered")]
    DuplicateGroup { label: String },

    #[error("malformed config file {}: {reason}", path.display())]
    MalformedConfigFile { path: PathBuf, reason: String },

    #[error("parameter '{name}' holds a non-finite float, which cannot be saved")]
    NonFiniteValue { name: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("cannot extract '{name}': {reason}")]
    Extract { name: String, reason: String },

    #[error("cannot decode configuration: {0}")]
    Decode(#[from] serde_json::Error),
}
