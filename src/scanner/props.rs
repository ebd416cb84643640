//! Props declaration discovery and field parsing.
//!
//! Works on raw text with regular expressions, not on a syntax tree. Bodies
//! are captured up to the first closing brace, so nested object types are cut
//! short and generics or comments may confuse field parsing. Callers only see
//! the [`DeclarationParser`] trait, which leaves room for a real parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::PropDefinition;

/// First `interface XProps` or `type XProps =` declaration, with its
/// brace-delimited body when one follows directly.
static PROPS_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:export\s+)?(?:interface\s+(?P<iname>\w+Props)\b|type\s+(?P<tname>\w+Props)\s*=)(?:\s*\{(?P<body>[^}]*)\})?",
    )
    .unwrap()
});

/// `name?: type;` statements inside a declaration body.
static PROP_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)(\?)?:\s*([^;]+);").unwrap());

/// Form of a props declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Interface,
    TypeAlias,
}

/// A props declaration found in a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropsDeclaration {
    pub kind: DeclarationKind,
    /// Declared identifier, always ending in `Props`.
    pub name: String,
    /// Text between the braces, if an object literal followed the header.
    pub body: Option<String>,
}

impl PropsDeclaration {
    /// Declaration text rebuilt from name and body, `None` without a body.
    pub fn source_text(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        Some(match self.kind {
            DeclarationKind::Interface => format!("interface {} {{{}}}", self.name, body),
            DeclarationKind::TypeAlias => format!("type {} = {{{}}}", self.name, body),
        })
    }
}

/// Finds props declarations and splits them into fields.
pub trait DeclarationParser {
    /// The first props declaration in `content` that has a body, else the
    /// first header without one. `None` when no header matches at all.
    fn find_props(&self, content: &str) -> Option<PropsDeclaration>;

    /// Fields of a declaration body, in textual order.
    fn parse_fields(&self, body: &str) -> Vec<PropDefinition>;

    /// Fields of the first props declaration in `content`.
    fn parse_props(&self, content: &str) -> Vec<PropDefinition> {
        self.find_props(content)
            .and_then(|decl| decl.body)
            .map(|body| self.parse_fields(&body))
            .unwrap_or_default()
    }
}

/// Regex-based [`DeclarationParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexDeclarationParser;

impl DeclarationParser for RegexDeclarationParser {
    fn find_props(&self, content: &str) -> Option<PropsDeclaration> {
        let mut first = None;
        for caps in PROPS_DECLARATION.captures_iter(content) {
            let (kind, name) = match (caps.name("iname"), caps.name("tname")) {
                (Some(name), _) => (DeclarationKind::Interface, name),
                (None, Some(name)) => (DeclarationKind::TypeAlias, name),
                (None, None) => continue,
            };
            let declaration = PropsDeclaration {
                kind,
                name: name.as_str().to_string(),
                body: caps.name("body").map(|m| m.as_str().to_string()),
            };
            if declaration.body.is_some() {
                return Some(declaration);
            }
            first.get_or_insert(declaration);
        }
        first
    }

    fn parse_fields(&self, body: &str) -> Vec<PropDefinition> {
        PROP_FIELD
            .captures_iter(body)
            .map(|caps| PropDefinition::new(&caps[1], caps[3].trim(), caps.get(2).is_none()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> RegexDeclarationParser {
        RegexDeclarationParser
    }

    #[test]
    fn test_finds_exported_interface_with_body() {
        let src = "import React from 'react';\n\nexport interface ButtonProps {\n  label: string;\n}\n";
        let decl = parser().find_props(src).unwrap();
        assert_eq!(decl.kind, DeclarationKind::Interface);
        assert_eq!(decl.name, "ButtonProps");
        assert_eq!(decl.body.as_deref(), Some("\n  label: string;\n"));
        assert_eq!(
            decl.source_text().as_deref(),
            Some("interface ButtonProps {\n  label: string;\n}")
        );
    }

    #[test]
    fn test_finds_type_alias() {
        let src = "type CardProps = { title: string; };";
        let decl = parser().find_props(src).unwrap();
        assert_eq!(decl.kind, DeclarationKind::TypeAlias);
        assert_eq!(decl.source_text().as_deref(), Some("type CardProps = { title: string; }"));
    }

    #[test]
    fn test_header_without_object_body() {
        let src = "interface InputProps extends BaseProps { value: string; }";
        let decl = parser().find_props(src).unwrap();
        assert_eq!(decl.name, "InputProps");
        assert_eq!(decl.body, None);
        assert_eq!(decl.source_text(), None);

        let alias = parser().find_props("type LinkProps = AnchorProps & { href: string };").unwrap();
        assert_eq!(alias.body, None);
    }

    #[test]
    fn test_body_after_header_only_declaration() {
        let src = "interface BaseProps extends React.HTMLAttributes<HTMLDivElement> {}\n\
                   export interface CardProps { title: string; }";
        let decl = parser().find_props(src).unwrap();
        assert_eq!(decl.name, "CardProps");
        assert_eq!(decl.body.as_deref(), Some(" title: string; "));
        assert_eq!(
            parser().parse_props(src),
            vec![PropDefinition::new("title", "string", true)]
        );

        let src = "type LinkProps = AnchorProps & { href: string };\ntype IconProps = { size: number; };";
        assert_eq!(parser().find_props(src).unwrap().name, "IconProps");
    }

    #[test]
    fn test_ignores_non_props_names() {
        assert!(parser().find_props("interface ButtonState { on: boolean; }").is_none());
        assert!(parser().find_props("type PropsMap = {};").is_none());
        assert!(parser().find_props("const x = 1;").is_none());
    }

    #[test]
    fn test_first_declaration_wins() {
        let src = "type AProps = { a: string; };\ninterface BProps { b: number; }";
        assert_eq!(parser().find_props(src).unwrap().name, "AProps");
    }

    #[test]
    fn test_nested_object_truncates_body() {
        let src = "interface PanelProps { style: { color: string; }; title: string; }";
        let decl = parser().find_props(src).unwrap();
        assert_eq!(decl.body.as_deref(), Some(" style: { color: string; "));
    }

    #[test]
    fn test_fields_keep_order_and_optionality() {
        let fields = parser().parse_fields("a: string; b?: number; c: boolean;");
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        let required: Vec<_> = fields.iter().map(|f| f.required).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(required, vec![true, false, true]);
    }

    #[test]
    fn test_field_types_are_trimmed_raw_text() {
        let body = "\n  variant?: \"primary\" | \"ghost\";\n  onClick: () => void;\n  items: Array<string> ;\n";
        let fields = parser().parse_fields(body);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].type_expr, "\"primary\" | \"ghost\"");
        assert_eq!(fields[1].type_expr, "() => void");
        assert_eq!(fields[2].type_expr, "Array<string>");
        assert!(fields.iter().all(|f| f.default_value.is_none() && f.description.is_none()));
    }

    #[test]
    fn test_parse_props_from_file() {
        let src = "interface HeroCardProps { title: string; count?: number; }";
        let props = parser().parse_props(src);
        assert_eq!(
            props,
            vec![
                PropDefinition::new("title", "string", true),
                PropDefinition::new("count", "number", false),
            ]
        );
        assert!(parser().parse_props("export default function X() {}").is_empty());
    }
}
