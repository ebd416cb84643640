//! Preview values and the ordered props state driving the synthetic preview.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value as JsonValue;

/// A value held by the preview for one prop.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// No value (`undefined`).
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// An empty list.
    List,
    /// A no-op callback.
    Callback,
}

impl PropValue {
    /// JSON form of the value, `None` for values JSON cannot express.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            PropValue::Absent | PropValue::Callback => None,
            PropValue::Null => Some(JsonValue::Null),
            PropValue::Bool(b) => Some(JsonValue::Bool(*b)),
            PropValue::Number(n) => Some(number_to_json(*n)),
            PropValue::Text(s) => Some(JsonValue::String(s.clone())),
            PropValue::List => Some(JsonValue::Array(Vec::new())),
        }
    }

    /// Expression text used inside `{...}` in JSX snippets.
    pub fn to_expression(&self) -> String {
        match self {
            PropValue::Absent => "undefined".to_string(),
            PropValue::Callback => "() => {}".to_string(),
            other => other
                .to_json()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "undefined".to_string()),
        }
    }

    /// Whether the value counts as set when choosing mock fallbacks.
    pub fn is_present(&self) -> bool {
        match self {
            PropValue::Absent | PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::List | PropValue::Callback => true,
        }
    }

    /// Plain text used when a value is shown as content.
    pub fn display(&self) -> String {
        match self {
            PropValue::Text(s) => s.clone(),
            PropValue::Number(n) => format_number(*n),
            PropValue::Bool(b) => b.to_string(),
            other => other.to_expression(),
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        JsonValue::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

fn format_number(n: f64) -> String {
    match number_to_json(n) {
        JsonValue::Null => "NaN".to_string(),
        v => v.to_string(),
    }
}

/// Ordered prop name -> value map.
///
/// Keeps declaration order so snippets list props the way the source does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    entries: Vec<(String, PropValue)>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, keeping the original position when the name already exists.
    pub fn set(&mut self, name: impl Into<String>, value: PropValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// First of `names` holding a present value, rendered as text.
    pub fn first_present(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .find(|v| v.is_present())
            .map(PropValue::display)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON view; values without a JSON form are left out.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for PreviewState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<(&str, JsonValue)> = self
            .entries
            .iter()
            .filter_map(|(name, value)| value.to_json().map(|json| (name.as_str(), json)))
            .collect();

        let mut map = serializer.serialize_map(Some(values.len()))?;
        for (name, value) in &values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
