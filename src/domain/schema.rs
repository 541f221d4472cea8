//! Declarative parameter schemas

use crate::domain::{ConfigNamespace, ParamKind, ParamValue};
use crate::error::ConfigError;
use std::collections::HashSet;

/// Leading character on a declared name that requests a one-letter alias.
pub const SHORTHAND_MARKER: char = '_';

/// Post-processing applied to a group's extracted values.
pub type ExtractHook = fn(&mut ConfigNamespace) -> Result<(), ConfigError>;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    /// Name with any shorthand marker stripped. Doubles as the long flag and
    /// the namespace key.
    pub name: String,
    pub kind: ParamKind,
    pub default: ParamValue,
    /// Also register `-<first letter>`.
    pub shorthand: bool,
    pub help: Option<&'static str>,
}

impl ParamDecl {
    /// Declare a parameter. A leading `_` in `attr` marks it as shorthand,
    /// so `_source_path` becomes `source_path` with alias `-s`.
    pub fn new(attr: &str, kind: ParamKind, default: impl Into<ParamValue>) -> Self {
        let (name, shorthand) = split_marker(attr);
        Self { name: name.to_string(), kind, default: default.into(), shorthand, help: None }
    }

    pub fn help(mut self, text: &'static str) -> Self {
        self.help = Some(text);
        self
    }

    /// The derived one-letter alias, if this parameter is shorthand.
    pub fn short_flag(&self) -> Option<char> {
        if self.shorthand {
            self.name.chars().next()
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::InvalidParameterName { name: self.name.clone() });
        }
        if self.default.kind() != self.kind {
            return Err(ConfigError::UnsupportedParameterType {
                name: self.name.clone(),
                declared: self.kind,
                found: self.default.kind(),
            });
        }
        Ok(())
    }
}

/// Strip the shorthand marker from a declared attribute name.
pub fn split_marker(attr: &str) -> (&str, bool) {
    match attr.strip_prefix(SHORTHAND_MARKER) {
        Some(rest) => (rest, true),
        None => (attr, false),
    }
}

/// A labelled, ordered set of parameters exposed together as one CLI group.
#[derive(Debug, Clone)]
pub struct ParamGroup {
    pub label: &'static str,
    pub params: Vec<ParamDecl>,
    pub on_extract: Option<ExtractHook>,
}

impl ParamGroup {
    pub fn new(label: &'static str, params: Vec<ParamDecl>) -> Self {
        Self { label, params, on_extract: None }
    }

    pub fn with_extract_hook(mut self, hook: ExtractHook) -> Self {
        self.on_extract = Some(hook);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamDecl> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Whether `key` names a declared parameter, with or without the marker.
    pub fn declares(&self, key: &str) -> bool {
        let (name, _) = split_marker(key);
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    /// Declared defaults as a namespace.
    pub fn defaults(&self) -> ConfigNamespace {
        self.params.iter().map(|p| (p.name.clone(), Some(p.default.clone()))).collect()
    }

    /// Check every declaration plus name and alias uniqueness within the group.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut shorts = HashSet::new();
        for param in &self.params {
            param.validate()?;
            if !names.insert(param.name.as_str()) {
                return Err(ConfigError::FlagCollision {
                    name: param.name.clone(),
                    flag: format!("--{}", param.name),
                });
            }
            if let Some(short) = param.short_flag() {
                if !shorts.insert(short) {
                    return Err(ConfigError::FlagCollision {
                        name: param.name.clone(),
                        flag: format!("-{short}"),
                    });
                }
            }
        }
        Ok(())
    }
}
