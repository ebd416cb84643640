//! Synthetic stand-ins for component previews.
//!
//! No component code runs. A template is picked by looking for a keyword in
//! the lower-cased component name; the first match in [`MOCK_TEMPLATES`] wins
//! and anything else gets the generic card.

use super::html::escape;
use crate::models::{ComponentInfo, PreviewState};

type MockRenderer = fn(&ComponentInfo, &PreviewState) -> String;

/// Keyword -> template, checked in order.
const MOCK_TEMPLATES: &[(&str, MockRenderer)] = &[
    ("button", button),
    ("card", card),
    ("input", input),
    ("badge", badge),
    ("alert", alert),
];

/// Keyword of the template used for `name`, or `"generic"`.
pub fn template_for(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    MOCK_TEMPLATES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(keyword, _)| *keyword)
        .unwrap_or("generic")
}

/// Render the mock preview for a component with the given state.
pub fn render_mock(component: &ComponentInfo, state: &PreviewState) -> String {
    let lowered = component.name.to_lowercase();
    MOCK_TEMPLATES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, render)| render(component, state))
        .unwrap_or_else(|| generic(component, state))
}

fn text(state: &PreviewState, names: &[&str], fallback: &str) -> String {
    escape(&state.first_present(names).unwrap_or_else(|| fallback.to_string()))
}

fn disabled_attr(state: &PreviewState) -> &'static str {
    match state.get("disabled") {
        Some(v) if v.is_present() => " disabled",
        _ => "",
    }
}

fn button(_: &ComponentInfo, state: &PreviewState) -> String {
    format!(
        "<button style=\"padding:0.75em 1.5em;background:#7c3aed;color:#fff;border:0;border-radius:8px;font-weight:500\"{}>{}</button>",
        disabled_attr(state),
        text(state, &["children", "label"], "Button")
    )
}

fn card(_: &ComponentInfo, state: &PreviewState) -> String {
    format!(
        "<div style=\"border:1px solid #e5e7eb;border-radius:8px;padding:1.5em;max-width:28em\">\
         <h3 style=\"margin:0 0 0.5em\">{}</h3><p style=\"color:#4b5563;margin:0\">{}</p></div>",
        text(state, &["title"], "Card Title"),
        text(state, &["description", "children"], "Card content goes here")
    )
}

fn input(_: &ComponentInfo, state: &PreviewState) -> String {
    let label = state
        .first_present(&["label"])
        .map(|l| format!("<label style=\"color:#374151\">{}</label>", escape(&l)))
        .unwrap_or_default();
    format!(
        "<div style=\"max-width:28em\">{}<input type=\"{}\" placeholder=\"{}\" value=\"{}\"{} \
         style=\"width:100%;padding:0.5em 1em;border:1px solid #d1d5db;border-radius:8px;background:#fff;color:#111\"></div>",
        label,
        text(state, &["type"], "text"),
        text(state, &["placeholder"], "Enter text..."),
        text(state, &["value"], ""),
        disabled_attr(state)
    )
}

fn badge(_: &ComponentInfo, state: &PreviewState) -> String {
    format!(
        "<span style=\"display:inline-block;padding:0.25em 0.75em;border-radius:999px;background:#f3e8ff;color:#6b21a8;font-size:0.875em\">{}</span>",
        text(state, &["children", "label"], "Badge")
    )
}

fn alert(_: &ComponentInfo, state: &PreviewState) -> String {
    format!(
        "<div style=\"max-width:28em;border-left:4px solid #a855f7;background:#faf5ff;padding:1em;border-radius:4px\">\
         <h3 style=\"margin:0;font-size:0.9em;color:#6b21a8\">{}</h3>\
         <div style=\"margin-top:0.5em;font-size:0.9em;color:#7e22ce\">{}</div></div>",
        text(state, &["title"], "Alert"),
        text(state, &["description", "children"], "Alert message")
    )
}

fn generic(component: &ComponentInfo, state: &PreviewState) -> String {
    let props = if state.is_empty() {
        String::new()
    } else {
        format!(
            "<div style=\"background:#f3f4f6;border-radius:8px;padding:1em;text-align:left\">\
             <div style=\"font-size:0.75em;color:#6b7280\">Props:</div><pre style=\"background:none;color:#374151;padding:0\">{}</pre></div>",
            escape(&state.to_json_pretty())
        )
    };
    format!(
        "<div style=\"border:2px dashed #d1d5db;border-radius:8px;padding:2em;text-align:center\">\
         <div style=\"font-weight:600;font-size:1.1em\">{}</div>\
         <div style=\"color:#4b5563;font-size:0.875em;margin:0.5em 0 1em\">{} / {}</div>{}</div>",
        escape(&component.name),
        component.app,
        escape(&component.directory),
        props
    )
}
