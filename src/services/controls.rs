//! Maps prop type expressions to editor controls and preview defaults.
//!
//! Both mappings read the raw type text. Quoted union members and
//! renderable-node markers are detected by shared helpers so the select
//! options and the default value of a union never disagree.

use crate::models::{Control, PreviewState, PropDefinition, PropValue};

/// Type names rendered as free-form markup.
const NODE_MARKERS: &[&str] = &["ReactNode", "ReactElement", "JSX.Element"];

/// Query-string prefix of submitted prop values.
pub const PROP_PARAM_PREFIX: &str = "prop.";

/// Whether the type names a renderable node.
pub fn is_node_type(type_expr: &str) -> bool {
    NODE_MARKERS.iter().any(|m| type_expr.contains(m))
}

fn has_quote(type_expr: &str) -> bool {
    type_expr.contains(['"', '\''])
}

/// Unquoted members of a union that start with a quote, in order.
pub fn quoted_union_members(type_expr: &str) -> Vec<String> {
    type_expr
        .split('|')
        .map(str::trim)
        .filter(|member| member.starts_with(['"', '\'']))
        .map(|member| {
            let mut chars = member.chars();
            chars.next();
            chars.next_back();
            chars.as_str().to_string()
        })
        .collect()
}

/// Pick the control for a type; the first matching rule wins.
pub fn control_for(type_expr: &str) -> Control {
    if type_expr == "boolean" {
        return Control::Boolean;
    }
    if type_expr == "number" {
        return Control::Number;
    }
    if is_node_type(type_expr) {
        return Control::Textarea;
    }
    if type_expr.contains("color") || type_expr.contains("Color") {
        return Control::Color;
    }
    if type_expr.contains('|') && has_quote(type_expr) {
        let options = quoted_union_members(type_expr);
        if !options.is_empty() {
            return Control::Select { options };
        }
    }
    Control::Text
}

/// Starting preview value for a type.
pub fn default_value(type_expr: &str) -> PropValue {
    match type_expr {
        "string" => return PropValue::Text(String::new()),
        "number" => return PropValue::Number(0.0),
        "boolean" => return PropValue::Bool(false),
        _ => {}
    }
    if type_expr.contains("[]") {
        return PropValue::List;
    }
    if type_expr.contains("=>") {
        return PropValue::Callback;
    }
    if is_node_type(type_expr) || type_expr.contains("| undefined") {
        return PropValue::Absent;
    }
    if type_expr.contains("| null") {
        return PropValue::Null;
    }
    if type_expr.contains('|') {
        if let Some(first) = quoted_union_members(type_expr).into_iter().next() {
            return PropValue::Text(first);
        }
    }
    PropValue::Absent
}

/// Initial preview state: required props only, with their defaults.
pub fn initial_state(props: &[PropDefinition]) -> PreviewState {
    let mut state = PreviewState::new();
    for prop in props.iter().filter(|p| p.required) {
        state.set(prop.name.clone(), default_value(&prop.type_expr));
    }
    state
}

/// Convert submitted text into a value for the given control.
pub fn value_from_input(control: &Control, raw: &str) -> PropValue {
    match control {
        Control::Boolean => PropValue::Bool(matches!(raw, "true" | "on" | "1")),
        Control::Number => PropValue::Number(raw.trim().parse().unwrap_or(0.0)),
        _ => PropValue::Text(raw.to_string()),
    }
}

/// Initial state overridden by submitted `prop.<name>` parameters.
///
/// Entries follow declaration order; when a name is submitted more than
/// once, the last value wins.
pub fn state_with_overrides(props: &[PropDefinition], params: &[(String, String)]) -> PreviewState {
    let initial = initial_state(props);
    let mut state = PreviewState::new();

    for prop in props {
        let key = format!("{}{}", PROP_PARAM_PREFIX, prop.name);
        let submitted = params.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| v);

        match submitted {
            Some(raw) => state.set(
                prop.name.clone(),
                value_from_input(&control_for(&prop.type_expr), raw),
            ),
            None => {
                if let Some(value) = initial.get(&prop.name) {
                    state.set(prop.name.clone(), value.clone());
                }
            }
        }
    }
    state
}
