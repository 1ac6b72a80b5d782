//! What a command's execution handler receives.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::domain::argument::TypedValue;
use crate::domain::foundation::Invoker;

/// Converted arguments keyed by argument name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgumentValues(HashMap<String, TypedValue>);

impl ArgumentValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add a converted value.
    pub fn with(mut self, name: impl Into<String>, value: TypedValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Stores a converted value, replacing any previous one under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: TypedValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(TypedValue::as_number)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TypedValue::as_str)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(TypedValue::as_bool)
    }

    pub fn object(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(TypedValue::as_object)
    }

    pub fn date(&self, name: &str) -> Option<&DateTime<Utc>> {
        self.get(name).and_then(TypedValue::as_date)
    }
}

impl FromIterator<(String, TypedValue)> for ArgumentValues {
    fn from_iter<I: IntoIterator<Item = (String, TypedValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Context handed to a command's execution handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandInstructions {
    /// Who invoked the command.
    pub invoker: Invoker,

    /// Converted arguments, including applied defaults.
    pub arguments: ArgumentValues,
}

impl CommandInstructions {
    pub fn new(invoker: Invoker, arguments: ArgumentValues) -> Self {
        Self { invoker, arguments }
    }
}
