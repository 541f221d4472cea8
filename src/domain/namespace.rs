//! Flat name -> value configuration maps

use crate::domain::ParamValue;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat configuration namespace: parameter name to value, where `None`
/// means "not supplied".
///
/// Used for extracted group configs, persisted `cfg_args` files and merged
/// results alike. Keys are kept sorted so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigNamespace {
    values: BTreeMap<String, Option<ParamValue>>,
}

impl ConfigNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<ParamValue>) {
        self.values.insert(name.into(), value);
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), Some(value.into()));
    }

    /// The value for `name`, or `None` when the key is absent or null.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(None))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ParamValue::as_bool)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_float)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    pub fn get_float_list(&self, name: &str) -> Option<&[f64]> {
        self.get(name).and_then(ParamValue::as_float_list)
    }

    /// Copy every non-null value of `overrides` on top of `self`.
    ///
    /// Keys only in `overrides` are added (nulls included, so the result
    /// always holds the union of both key sets); keys only in `self` are kept.
    pub fn overlay(&mut self, overrides: &ConfigNamespace) {
        for (name, value) in &overrides.values {
            match value {
                Some(v) => {
                    self.values.insert(name.clone(), Some(v.clone()));
                }
                None => {
                    self.values.entry(name.clone()).or_insert(None);
                }
            }
        }
    }

    /// Decode into a typed settings struct. Extra keys are ignored.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, Option<ParamValue>)> for ConfigNamespace {
    fn from_iter<I: IntoIterator<Item = (String, Option<ParamValue>)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl IntoIterator for ConfigNamespace {
    type Item = (String, Option<ParamValue>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Option<ParamValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Extend<(String, Option<ParamValue>)> for ConfigNamespace {
    fn extend<I: IntoIterator<Item = (String, Option<ParamValue>)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
