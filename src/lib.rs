//! splat-args: parameter groups and run-config plumbing for Gaussian-splatting
//! reconstruction.
//!
//! Three parameter groups (model loading, rendering pipeline, optimization)
//! are declared as explicit tables, registered on a clap command, extracted
//! back into flat namespaces, and merged with the `cfg_args` file a previous
//! run left in its model directory.

pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod params;
pub mod utils;

pub use args::{bind_group, ArgParser, BoundGroup, ParsedArgs};
pub use config::{combine, combine_from, get_combined_args, load_persisted, save_config};
pub use domain::{ConfigNamespace, ParamDecl, ParamGroup, ParamKind, ParamValue};
pub use error::ConfigError;
