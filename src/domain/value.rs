//! Parameter value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value type a parameter accepts on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Presence flag; supplying it sets `true`.
    Bool,
    Int,
    Float,
    Str,
    /// Comma-separated floats, e.g. `1.0,2.0,3.0`.
    FloatList,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::Float => "float",
            ParamKind::Str => "string",
            ParamKind::FloatList => "float list",
        }
    }

    /// Placeholder shown in `--help` for options that take a value.
    pub fn value_name(&self) -> &'static str {
        match self {
            ParamKind::Bool => "BOOL",
            ParamKind::Int => "INT",
            ParamKind::Float => "FLOAT",
            ParamKind::Str => "TEXT",
            ParamKind::FloatList => "FLOATS",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved parameter value.
///
/// Serialized untagged so persisted configs read as plain JSON scalars and
/// arrays. Variant order matters for deserialization: integers must be tried
/// before floats so `3` stays an `Int` while `3.0` becomes a `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    FloatList(Vec<f64>),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Str(_) => ParamKind::Str,
            ParamValue::FloatList(_) => ParamKind::FloatList,
        }
    }

    /// False for NaN or infinite floats, alone or inside a list.
    pub fn is_finite(&self) -> bool {
        match self {
            ParamValue::Float(x) => x.is_finite(),
            ParamValue::FloatList(values) => values.iter().all(|x| x.is_finite()),
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(x) => Some(*x),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_float_list(&self) -> Option<&[f64]> {
        match self {
            ParamValue::FloatList(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::FloatList(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(value: Vec<f64>) -> Self {
        ParamValue::FloatList(value)
    }
}

impl<const N: usize> From<[f64; N]> for ParamValue {
    fn from(value: [f64; N]) -> Self {
        ParamValue::FloatList(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_integers_stay_integers() {
        let v: ParamValue = serde_json::from_str("3").expect("parse");
        assert_eq!(v, ParamValue::Int(3));
        let v: ParamValue = serde_json::from_str("3.0").expect("parse");
        assert_eq!(v, ParamValue::Float(3.0));
    }

    #[test]
    fn json_integer_arrays_become_float_lists() {
        let v: ParamValue = serde_json::from_str("[500, 1.5]").expect("parse");
        assert_eq!(v, ParamValue::FloatList(vec![500.0, 1.5]));
    }

    #[test]
    fn nested_objects_are_rejected() {
        assert!(serde_json::from_str::<ParamValue>("{\"a\": 1}").is_err());
        assert!(serde_json::from_str::<ParamValue>("[\"a\"]").is_err());
    }

    #[test]
    fn display_joins_lists_with_commas() {
        assert_eq!(ParamValue::from([1.0, 2.5]).to_string(), "1,2.5");
        assert_eq!(ParamValue::from(0.00016).to_string(), "0.00016");
    }

    #[test]
    fn int_widens_to_float() {
        assert_eq!(ParamValue::Int(2).as_float(), Some(2.0));
        assert_eq!(ParamValue::Str("x".into()).as_float(), None);
    }
}
