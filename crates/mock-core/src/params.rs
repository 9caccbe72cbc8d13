//! Typed generation parameters and YAML to ParamValue conversion.
//!
//! A column's `generation` block is a free-form mapping whose recognized
//! keys depend on the column type. The loader resolves every YAML scalar to
//! a [`ParamValue`] up front so the generators only ever type-check, never
//! parse.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::fmt;

/// A single generation parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Explicit YAML null (`~` or `null`)
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String value that is not a date literal
    String(String),
    /// Calendar date (resolved from a `YYYY-MM-DD` scalar)
    Date(NaiveDate),
    /// Sequence of values
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Convert a YAML value to a ParamValue.
    ///
    /// Strings shaped exactly like `YYYY-MM-DD` that name a real calendar
    /// date become [`ParamValue::Date`]; every other string stays a string.
    /// Quoted and unquoted ISO dates are treated the same, since the YAML
    /// value carries no record of how the scalar was written.
    /// Nested mappings are rejected.
    pub fn from_yaml(yaml: &YamlValue) -> Result<Self, String> {
        match yaml {
            YamlValue::Null => Ok(ParamValue::Null),
            YamlValue::Bool(b) => Ok(ParamValue::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ParamValue::Int(i))
                } else if n.is_u64() {
                    Err(format!("integer {n} does not fit in a signed 64-bit value"))
                } else if let Some(f) = n.as_f64() {
                    Ok(ParamValue::Float(f))
                } else {
                    Err(format!("unrepresentable number: {n}"))
                }
            }
            YamlValue::String(s) => Ok(match parse_date_literal(s) {
                Some(date) => ParamValue::Date(date),
                None => ParamValue::String(s.clone()),
            }),
            YamlValue::Sequence(items) => items
                .iter()
                .map(ParamValue::from_yaml)
                .collect::<Result<Vec<_>, _>>()
                .map(ParamValue::List),
            YamlValue::Mapping(_) => {
                Err("nested mappings are not supported in generation parameters".to_string())
            }
            YamlValue::Tagged(tagged) => ParamValue::from_yaml(&tagged.value),
        }
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Int(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
            ParamValue::Date(_) => "date",
            ParamValue::List(_) => "list",
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ParamValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a slice of values.
    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render a scalar as a category label.
    ///
    /// Lists and nulls have no label.
    pub fn as_label(&self) -> Option<String> {
        match self {
            ParamValue::Null | ParamValue::List(_) => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => f.write_str("null"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ParamValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
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
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Date(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Parse a strict `YYYY-MM-DD` date literal.
pub fn parse_date_literal(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The `generation` mapping of a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    values: BTreeMap<String, ParamValue>,
}

impl GenerationParams {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Whether a parameter is present (including explicit nulls).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'de> Deserialize<'de> for GenerationParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `generation:` with no body parses as null
        let raw: Option<BTreeMap<String, YamlValue>> = Option::deserialize(deserializer)?;
        let mut params = GenerationParams::new();
        for (key, yaml) in raw.unwrap_or_default() {
            let value = ParamValue::from_yaml(&yaml)
                .map_err(|e| serde::de::Error::custom(format!("parameter '{key}': {e}")))?;
            params.values.insert(key, value);
        }
        Ok(params)
    }
}
