//! JSX usage snippets built from the current preview state.

use crate::models::{ComponentInfo, PreviewState, PropValue};

/// Import specifier for a component: `@/components/<path without extension>`.
pub fn import_path(component: &ComponentInfo) -> String {
    let rel = &component.relative_path;
    let without_ext = match rel.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() && !stem.ends_with('/') => stem,
        _ => rel.as_str(),
    };
    format!("@/components/{}", without_ext)
}

/// `import { Name } from '...';`
pub fn import_statement(component: &ComponentInfo) -> String {
    format!(
        "import {{ {} }} from '{}';",
        component.name,
        import_path(component)
    )
}

/// Single-line JSX element, e.g. `<Button label="Save" disabled />`.
///
/// `false` booleans are left out and `true` ones appear as bare attributes.
pub fn inline_usage(name: &str, state: &PreviewState) -> String {
    let attrs: Vec<String> = state
        .iter()
        .filter_map(|(key, value)| match value {
            PropValue::Text(s) => Some(format!("{}=\"{}\"", key, s)),
            PropValue::Bool(true) => Some(key.to_string()),
            PropValue::Bool(false) => None,
            other => Some(format!("{}={{{}}}", key, other.to_expression())),
        })
        .collect();

    if attrs.is_empty() {
        format!("<{} />", name)
    } else {
        format!("<{} {} />", name, attrs.join(" "))
    }
}

/// Import line followed by a multi-line JSX element, one prop per line.
pub fn usage_example(component: &ComponentInfo, state: &PreviewState) -> String {
    let mut out = import_statement(component);
    out.push_str("\n\n<");
    out.push_str(&component.name);

    if state.is_empty() {
        out.push_str(" />");
        return out;
    }

    out.push('\n');
    for (key, value) in state.iter() {
        match value {
            PropValue::Text(s) => out.push_str(&format!("  {}=\"{}\"\n", key, s)),
            other => out.push_str(&format!("  {}={{{}}}\n", key, other.to_expression())),
        }
    }
    out.push_str("/>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppTag, UiCharacteristics};

    fn component(relative_path: &str, name: &str) -> ComponentInfo {
        ComponentInfo {
            name: name.to_string(),
            path: format!("/apps/core/{}", relative_path),
            relative_path: relative_path.to_string(),
            app: AppTag::Core,
            directory: "/ui".to_string(),
            has_props: true,
            props_interface: None,
            ui_characteristics: UiCharacteristics::default(),
        }
    }

    fn state() -> PreviewState {
        let mut state = PreviewState::new();
        state.set("label", PropValue::Text("Save".to_string()));
        state.set("count", PropValue::Number(2.0));
        state.set("disabled", PropValue::Bool(false));
        state.set("primary", PropValue::Bool(true));
        state.set("icon", PropValue::Absent);
        state
    }

    #[test]
    fn test_import_path_drops_extension() {
        let c = component("ui/save-button.tsx", "SaveButton");
        assert_eq!(import_path(&c), "@/components/ui/save-button");
        assert_eq!(
            import_statement(&c),
            "import { SaveButton } from '@/components/ui/save-button';"
        );
    }

    #[test]
    fn test_inline_usage() {
        assert_eq!(
            inline_usage("SaveButton", &state()),
            r#"<SaveButton label="Save" count={2} primary icon={undefined} />"#
        );
        assert_eq!(inline_usage("Divider", &PreviewState::new()), "<Divider />");
    }

    #[test]
    fn test_usage_example() {
        let c = component("ui/save-button.tsx", "SaveButton");
        let expected = "import { SaveButton } from '@/components/ui/save-button';\n\n\
                        <SaveButton\n  label=\"Save\"\n  count={2}\n  disabled={false}\n  primary={true}\n  icon={undefined}\n/>";
        assert_eq!(usage_example(&c, &state()), expected);
    }

    #[test]
    fn test_usage_example_without_props() {
        let c = component("divider.jsx", "Divider");
        assert_eq!(
            usage_example(&c, &PreviewState::new()),
            "import { Divider } from '@/components/divider';\n\n<Divider />"
        );
    }
}
