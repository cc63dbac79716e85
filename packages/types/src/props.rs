//! Property values carried by templates and views.
//!
//! Style maps come out of the reactive store in an observable wrapper; the
//! renderer normalizes them into a plain map before applying them to an
//! element (see `StyleMap::to_plain`). Props use `BTreeMap` so iteration
//! order is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Props = BTreeMap<String, PropValue>;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropValue {
    Text(String),
    Num(f64),
    Bool(bool),
    Style(StyleMap),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropValue::Num(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            PropValue::Style(style) => Some(style),
            _ => None,
        }
    }

    /// Plain-text rendering of the value, used for element attributes.
    pub fn to_plain_string(&self) -> String {
        match self {
            PropValue::Text(value) => value.clone(),
            PropValue::Num(value) => value.to_string(),
            PropValue::Bool(value) => value.to_string(),
            PropValue::Style(_) => String::new(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Num(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// Style properties in the store's observable form.
///
/// The store hands these out as live observable maps; rendering needs a
/// plain snapshot so later store mutations cannot reach into an already
/// rendered element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    entries: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(property.into(), value.into());
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    /// Snapshot into a plain map, detached from the observable source.
    pub fn to_plain(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
