//! Command-line wiring for parameter groups

pub mod binder;
pub mod extract;
pub mod parser;

pub use binder::{bind_group, check_bindable, BoundGroup};
pub use parser::{ArgParser, ParsedArgs};
