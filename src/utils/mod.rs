//! Utility functions

pub mod paths;

pub use paths::{absolutize, clean_path};
