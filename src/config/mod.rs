//! Persisted run configs
//!
//! A run writes its resolved arguments to `<model_path>/cfg_args`; later
//! invocations read it back and overlay whatever the user passes on the
//! command line (command line > saved file).

pub mod legacy;
pub mod loader;
pub mod merge;
pub mod persist;

pub use loader::{config_file_path, load_persisted, parse_persisted, CONFIG_FILE_NAME};
pub use merge::{combine, combine_from, get_combined_args, merge_with_persisted, MODEL_PATH_KEY};
pub use persist::save_config;
