//! PropDefinition and Control models for the props editor.

use serde::Serialize;

/// One field of a props declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    /// Field identifier.
    pub name: String,
    /// Raw type expression, trimmed but otherwise as written.
    #[serde(rename = "type")]
    pub type_expr: String,
    /// False when the field was declared with `?`.
    pub required: bool,
    /// Not populated by the text heuristics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Not populated by the text heuristics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropDefinition {
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            required,
            default_value: None,
            description: None,
        }
    }
}

/// The interactive widget used to edit a prop value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Control {
    Text,
    Number,
    Boolean,
    /// Enumerated choice over the quoted members of a string-literal union.
    Select { options: Vec<String> },
    Textarea,
    Color,
}

impl Control {
    /// Control kind name as used in the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            Control::Text => "text",
            Control::Number => "number",
            Control::Boolean => "boolean",
            Control::Select { .. } => "select",
            Control::Textarea => "textarea",
            Control::Color => "color",
        }
    }
}
