//! Core configuration types

pub mod namespace;
pub mod schema;
pub mod value;

pub use namespace::ConfigNamespace;
pub use schema::{split_marker, ExtractHook, ParamDecl, ParamGroup, SHORTHAND_MARKER};
pub use value::{ParamKind, ParamValue};
