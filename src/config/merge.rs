//! Merging a persisted run config with command-line overrides

use std::ffi::OsString;
use std::path::Path;

use crate::args::{ArgParser, ParsedArgs};
use crate::config::loader::load_persisted;
use crate::domain::ConfigNamespace;
use crate::error::ConfigError;

/// Key whose command-line value locates the persisted config.
pub const MODEL_PATH_KEY: &str = "model_path";

/// Overlay `cmdline` on the config saved under its `model_path`.
///
/// Non-null command-line values win; everything else comes from the saved
/// file. Without a model path or a readable file, the result is `cmdline`.
pub fn merge_with_persisted(cmdline: &ConfigNamespace) -> Result<ConfigNamespace, ConfigError> {
    let model_path = cmdline.get_str(MODEL_PATH_KEY).map(Path::new);
    let mut merged = load_persisted(model_path)?;
    merged.overlay(cmdline);
    Ok(merged)
}

pub fn combine(parsed: &ParsedArgs) -> Result<ConfigNamespace, ConfigError> {
    merge_with_persisted(&parsed.namespace()?)
}

/// Parse `argv` with `parser` and merge the result with the saved config.
pub fn combine_from<I, T>(parser: &ArgParser, argv: I) -> Result<ConfigNamespace, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    combine(&parser.parse_from(argv)?)
}

/// [`combine_from`] over the process arguments.
pub fn get_combined_args(parser: &ArgParser) -> Result<ConfigNamespace, ConfigError> {
    combine(&parser.parse()?)
}
