//! Converted argument values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::ValueType;

/// A raw token after conversion through its declared `ValueType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Number(i64),
    String(String),
    Boolean(bool),
    Object(Map<String, Value>),
    Date(DateTime<Utc>),
}

impl TypedValue {
    /// Returns the type this value was converted through.
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::Number(_) => ValueType::Number,
            TypedValue::String(_) => ValueType::String,
            TypedValue::Boolean(_) => ValueType::Boolean,
            TypedValue::Object(_) => ValueType::Object,
            TypedValue::Date(_) => ValueType::Date,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            TypedValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            TypedValue::Date(dt) => Some(dt),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::String(s) => write!(f, "{}", s),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Object(map) => write!(f, "{}", Value::Object(map.clone())),
            TypedValue::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Number(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Boolean(value)
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::String(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for TypedValue {
    fn from(value: DateTime<Utc>) -> Self {
        TypedValue::Date(value)
    }
}
